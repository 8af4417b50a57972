//! Employee filtering, sorting, grouping and statistics.
//!
//! Every function here borrows the roster and returns freshly built
//! results; the input is never modified.

use super::parallel::{count_by_department_with, salary_statistics_with, ExecutionMode};
use crate::models::{
    DepartmentActivity, Employee, GenderDepartmentGroups, SalaryStatistics, TenuredEmployee,
};
use chrono::{Datelike, Month, NaiveDate};
use std::collections::BTreeMap;

/// Employees whose department matches `department`, ignoring case.
pub fn filter_by_department(employees: &[Employee], department: &str) -> Vec<Employee> {
    let wanted = department.to_lowercase();

    employees
        .iter()
        .filter(|e| e.department.to_lowercase() == wanted)
        .cloned()
        .collect()
}

/// Sort by last name, then first name. Equal names keep their order.
pub fn sort_by_name(employees: &[Employee]) -> Vec<Employee> {
    let mut sorted = employees.to_vec();
    sorted.sort_by(|a, b| {
        a.last_name
            .cmp(&b.last_name)
            .then_with(|| a.first_name.cmp(&b.first_name))
    });
    sorted
}

/// Headcount per department. Departments without employees are absent.
pub fn count_by_department(employees: &[Employee]) -> BTreeMap<String, usize> {
    count_by_department_with(ExecutionMode::for_len(employees.len()), employees)
}

/// Salary statistics over the employees matching `predicate`.
///
/// Returns `None` when no employee matches.
pub fn salary_statistics<P>(employees: &[Employee], predicate: P) -> Option<SalaryStatistics>
where
    P: Fn(&Employee) -> bool + Sync,
{
    salary_statistics_with(ExecutionMode::for_len(employees.len()), employees, predicate)
}

/// Salary statistics over active employees.
pub fn active_salary_statistics(employees: &[Employee]) -> Option<SalaryStatistics> {
    salary_statistics(employees, Employee::is_active)
}

/// Active employees grouped by gender, then by department.
pub fn group_by_gender_then_department(employees: &[Employee]) -> GenderDepartmentGroups {
    let mut grouped = GenderDepartmentGroups::new();

    for employee in employees.iter().filter(|e| e.is_active()) {
        grouped
            .entry(employee.gender)
            .or_default()
            .entry(employee.department.clone())
            .or_default()
            .push(employee.clone());
    }

    grouped
}

/// The `n` longest-serving active employees, oldest hire first.
///
/// Ties on hire date keep roster order. Tenure is measured at `today`.
pub fn top_n_by_hire_date(
    employees: &[Employee],
    n: usize,
    today: NaiveDate,
) -> Vec<TenuredEmployee> {
    let mut active: Vec<&Employee> = employees.iter().filter(|e| e.is_active()).collect();
    active.sort_by_key(|e| e.hire_date);

    active
        .into_iter()
        .take(n)
        .map(|e| TenuredEmployee {
            employee: e.clone(),
            years: e.tenure_years(today),
        })
        .collect()
}

/// Share of active employees in every department of the roster.
pub fn active_percentage_by_department(
    employees: &[Employee],
) -> BTreeMap<String, DepartmentActivity> {
    let mut tallies: BTreeMap<&str, (usize, usize)> = BTreeMap::new();

    for employee in employees {
        let (active, total) = tallies.entry(employee.department.as_str()).or_default();
        *total += 1;
        if employee.is_active() {
            *active += 1;
        }
    }

    tallies
        .into_iter()
        .map(|(department, (active, total))| {
            (department.to_string(), DepartmentActivity::new(active, total))
        })
        .collect()
}

/// Employees hired in `month` of any year.
pub fn hired_in_month(employees: &[Employee], month: Month) -> Vec<Employee> {
    employees
        .iter()
        .filter(|e| e.hire_date.month() == month.number_from_month())
        .cloned()
        .collect()
}
