//! Partitioned reductions over employee slices.
//!
//! Both reductions are built from a per-element step and an associative
//! merge, so the sequential fold and the rayon fold/reduce produce the
//! same result regardless of how the slice is split.

use crate::models::{Employee, SalaryAccumulator, SalaryStatistics};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Inputs at least this long are reduced on the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 100_000;

/// How a reduction walks its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    Sequential,
    Parallel,
}

impl ExecutionMode {
    /// Picks the mode for an input of `len` records.
    pub fn for_len(len: usize) -> Self {
        if len >= PARALLEL_THRESHOLD {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Sequential
        }
    }
}

/// Salary statistics over the records matching `predicate`.
pub fn salary_statistics_with<P>(
    mode: ExecutionMode,
    employees: &[Employee],
    predicate: P,
) -> Option<SalaryStatistics>
where
    P: Fn(&Employee) -> bool + Sync,
{
    let accumulator = match mode {
        ExecutionMode::Sequential => employees
            .iter()
            .filter(|&e| predicate(e))
            .fold(SalaryAccumulator::default(), |acc, e| acc.push(e.salary)),
        ExecutionMode::Parallel => employees
            .par_iter()
            .filter(|&e| predicate(e))
            .fold(SalaryAccumulator::default, |acc, e| acc.push(e.salary))
            .reduce(SalaryAccumulator::default, SalaryAccumulator::merge),
    };

    accumulator.finish()
}

/// Number of records per department.
pub fn count_by_department_with(
    mode: ExecutionMode,
    employees: &[Employee],
) -> BTreeMap<String, usize> {
    let counts = match mode {
        ExecutionMode::Sequential => employees.iter().fold(BTreeMap::new(), tally),
        ExecutionMode::Parallel => employees
            .par_iter()
            .fold(BTreeMap::new, tally)
            .reduce(BTreeMap::new, merge_counts),
    };

    counts
        .into_iter()
        .map(|(department, count)| (department.to_string(), count))
        .collect()
}

fn tally<'a>(
    mut counts: BTreeMap<&'a str, usize>,
    employee: &'a Employee,
) -> BTreeMap<&'a str, usize> {
    *counts.entry(employee.department.as_str()).or_default() += 1;
    counts
}

fn merge_counts<'a>(
    mut left: BTreeMap<&'a str, usize>,
    right: BTreeMap<&'a str, usize>,
) -> BTreeMap<&'a str, usize> {
    for (department, count) in right {
        *left.entry(department).or_default() += count;
    }
    left
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generate_employees;

    #[test]
    fn test_mode_for_len() {
        assert_eq!(ExecutionMode::for_len(0), ExecutionMode::Sequential);
        assert_eq!(
            ExecutionMode::for_len(PARALLEL_THRESHOLD - 1),
            ExecutionMode::Sequential
        );
        assert_eq!(
            ExecutionMode::for_len(PARALLEL_THRESHOLD),
            ExecutionMode::Parallel
        );
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let employees = generate_employees(20_000, 11, None);

        let seq = salary_statistics_with(ExecutionMode::Sequential, &employees, |_| true);
        let par = salary_statistics_with(ExecutionMode::Parallel, &employees, |_| true);
        assert_eq!(seq, par);
        assert_eq!(seq.map(|s| s.count), Some(20_000));

        let seq = count_by_department_with(ExecutionMode::Sequential, &employees);
        let par = count_by_department_with(ExecutionMode::Parallel, &employees);
        assert_eq!(seq, par);
        assert_eq!(par.values().sum::<usize>(), 20_000);
    }

    #[test]
    fn test_parallel_empty_input() {
        assert_eq!(
            salary_statistics_with(ExecutionMode::Parallel, &[], |_| true),
            None
        );
        assert!(count_by_department_with(ExecutionMode::Parallel, &[]).is_empty());
    }

    #[test]
    fn test_merge_counts_sums_shared_keys() {
        let left: BTreeMap<&str, usize> = [("A", 2), ("B", 1)].into_iter().collect();
        let right: BTreeMap<&str, usize> = [("B", 3), ("C", 4)].into_iter().collect();

        let merged = merge_counts(left, right);
        assert_eq!(merged.get("A"), Some(&2));
        assert_eq!(merged.get("B"), Some(&4));
        assert_eq!(merged.get("C"), Some(&4));
    }
}
