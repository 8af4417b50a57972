//! Data models for the roster.
//!
//! This module contains the employee record and the result structures
//! produced by the aggregation functions and consumed by the report.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while constructing roster records from literal values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("invalid date literal '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    #[error("invalid salary literal '{0}'")]
    InvalidSalary(String),

    #[error("unknown gender code '{0}' (expected M or F)")]
    InvalidGender(String),

    #[error("termination date {terminated} precedes hire date {hired}")]
    TerminatedBeforeHire {
        hired: NaiveDate,
        terminated: NaiveDate,
    },
}

/// Parse an ISO-8601 (`YYYY-MM-DD`) date literal.
pub fn parse_date(value: &str) -> Result<NaiveDate, RosterError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| RosterError::InvalidDate {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Gender code of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "M")]
    Male,
}

impl Gender {
    /// Every gender code, in display order.
    pub const ALL: [Gender; 2] = [Gender::Female, Gender::Male];

    /// Returns the single-letter code.
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Female => "F",
            Gender::Male => "M",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Gender {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "F" | "f" => Ok(Gender::Female),
            "M" | "m" => Ok(Gender::Male),
            other => Err(RosterError::InvalidGender(other.to_string())),
        }
    }
}

/// An exact, non-negative monetary amount held in cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Salary(u64);

impl Salary {
    /// Creates a salary from a whole number of currency units.
    pub fn from_units(units: u64) -> Self {
        Salary(units * 100)
    }

    pub fn from_cents(cents: u64) -> Self {
        Salary(cents)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Salary {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RosterError::InvalidSalary(s.to_string());
        let trimmed = s.trim();

        let (units, fraction) = match trimmed.split_once('.') {
            Some((units, fraction)) => (units, fraction),
            None => (trimmed, ""),
        };

        if units.is_empty()
            || fraction.len() > 2
            || !units.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let units: u64 = units.parse().map_err(|_| invalid())?;
        let cents: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Salary)
            .ok_or_else(invalid)
    }
}

impl From<Salary> for String {
    fn from(salary: Salary) -> Self {
        salary.to_string()
    }
}

impl TryFrom<String> for Salary {
    type Error = RosterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Whether an employee is still with the company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmploymentStatus {
    Active,
    Terminated(NaiveDate),
}

/// A single employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    /// Department name; grouping is case-sensitive.
    pub department: String,
    pub job_title: String,
    pub salary: Salary,
    pub hire_date: NaiveDate,
    pub status: EmploymentStatus,
}

impl Employee {
    /// Creates an active employee.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        gender: Gender,
        department: impl Into<String>,
        job_title: impl Into<String>,
        salary: Salary,
        hire_date: NaiveDate,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            gender,
            department: department.into(),
            job_title: job_title.into(),
            salary,
            hire_date,
            status: EmploymentStatus::Active,
        }
    }

    /// Marks the employee as terminated on `date`.
    ///
    /// Fails when `date` is before the hire date.
    pub fn terminated_on(mut self, date: NaiveDate) -> Result<Self, RosterError> {
        if date < self.hire_date {
            return Err(RosterError::TerminatedBeforeHire {
                hired: self.hire_date,
                terminated: date,
            });
        }
        self.status = EmploymentStatus::Terminated(date);
        Ok(self)
    }

    pub fn is_active(&self) -> bool {
        matches!(self.status, EmploymentStatus::Active)
    }

    pub fn termination_date(&self) -> Option<NaiveDate> {
        match self.status {
            EmploymentStatus::Active => None,
            EmploymentStatus::Terminated(date) => Some(date),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whole calendar years between the hire date and `today`.
    ///
    /// A hire date after `today` counts as zero years.
    pub fn tenure_years(&self, today: NaiveDate) -> u32 {
        today.years_since(self.hire_date).unwrap_or(0)
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}) - {} - {} - hired {}",
            self.full_name(),
            self.gender,
            self.department,
            self.job_title,
            self.salary,
            self.hire_date
        )?;
        if let Some(date) = self.termination_date() {
            write!(f, " - terminated {}", date)?;
        }
        Ok(())
    }
}

/// Summary statistics over salaries. Only exists for a non-empty subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryStatistics {
    pub count: usize,
    pub min: Salary,
    pub max: Salary,
    /// Total divided by count, rounded half-up to the cent.
    pub mean: Salary,
    pub total: Salary,
}

/// Running min/max/sum/count over salaries.
///
/// Partial accumulators can be merged in any order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SalaryAccumulator {
    count: usize,
    total_cents: u128,
    min: Option<Salary>,
    max: Option<Salary>,
}

impl SalaryAccumulator {
    pub fn push(mut self, salary: Salary) -> Self {
        self.count += 1;
        self.total_cents += u128::from(salary.cents());
        self.min = Some(self.min.map_or(salary, |m| m.min(salary)));
        self.max = Some(self.max.map_or(salary, |m| m.max(salary)));
        self
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            count: self.count + other.count,
            total_cents: self.total_cents + other.total_cents,
            min: match (self.min, other.min) {
                (Some(a), Some(b)) => Some(a.min(b)),
                (a, b) => a.or(b),
            },
            max: match (self.max, other.max) {
                (Some(a), Some(b)) => Some(a.max(b)),
                (a, b) => a.or(b),
            },
        }
    }

    /// Returns `None` when nothing was accumulated.
    pub fn finish(self) -> Option<SalaryStatistics> {
        let (min, max) = (self.min?, self.max?);
        if self.count == 0 {
            return None;
        }

        let count = self.count as u128;
        let mean = (self.total_cents + count / 2) / count;

        Some(SalaryStatistics {
            count: self.count,
            min,
            max,
            mean: Salary::from_cents(u64::try_from(mean).unwrap_or(u64::MAX)),
            total: Salary::from_cents(u64::try_from(self.total_cents).unwrap_or(u64::MAX)),
        })
    }
}

/// Active headcount against total headcount for one department.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepartmentActivity {
    pub active: usize,
    pub total: usize,
    /// `100 * active / total`.
    pub percentage: f64,
}

impl DepartmentActivity {
    pub fn new(active: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0.0
        } else {
            active as f64 * 100.0 / total as f64
        };
        Self {
            active,
            total,
            percentage,
        }
    }
}

/// An employee paired with their tenure at the reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenuredEmployee {
    pub employee: Employee,
    pub years: u32,
}

/// Employees hired in a given calendar month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyHires {
    pub month: String,
    pub employees: Vec<Employee>,
}

/// Employees matching a department filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentMembers {
    pub department: String,
    pub employees: Vec<Employee>,
}

/// Two-level grouping: gender, then department.
pub type GenderDepartmentGroups = BTreeMap<Gender, BTreeMap<String, Vec<Employee>>>;

/// Timing of one sequential-vs-parallel comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimedComparison<T> {
    pub sequential: T,
    pub sequential_ms: f64,
    pub parallel: T,
    pub parallel_ms: f64,
}

impl<T> TimedComparison<T> {
    /// Sequential time over parallel time.
    pub fn speedup(&self) -> Option<f64> {
        if self.parallel_ms > 0.0 {
            Some(self.sequential_ms / self.parallel_ms)
        } else {
            None
        }
    }
}

/// Results of the sequential vs. parallel benchmark.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub size: usize,
    pub seed: u64,
    pub threads: usize,
    pub generation_ms: f64,
    pub average_salary: TimedComparison<Option<Salary>>,
    pub department_counts: TimedComparison<BTreeMap<String, usize>>,
}

/// Metadata about the roster report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    /// Date used as "today" for tenure.
    pub reference_date: NaiveDate,
    pub total_employees: usize,
    pub active_employees: usize,
    pub duration_seconds: f64,
}

/// The complete roster report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub metadata: ReportMetadata,
    pub department_members: DepartmentMembers,
    pub sorted_by_name: Vec<Employee>,
    pub headcount_by_department: BTreeMap<String, usize>,
    pub monthly_hires: MonthlyHires,
    /// `None` when there are no active employees.
    pub active_salary_statistics: Option<SalaryStatistics>,
    pub active_by_gender_and_department: GenderDepartmentGroups,
    pub most_senior: Vec<TenuredEmployee>,
    pub activity_by_department: BTreeMap<String, DepartmentActivity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benchmark: Option<BenchmarkReport>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_salary_parse_and_display() {
        assert_eq!("700".parse::<Salary>().unwrap(), Salary::from_units(700));
        assert_eq!("700.5".parse::<Salary>().unwrap(), Salary::from_cents(70050));
        assert_eq!("0.05".parse::<Salary>().unwrap(), Salary::from_cents(5));
        assert_eq!(Salary::from_cents(150_007).to_string(), "1500.07");
        assert_eq!(Salary::from_units(800).to_string(), "800.00");
    }

    #[test]
    fn test_salary_rejects_malformed() {
        for bad in ["", "-5", "1.234", "abc", "1.2.3", ".50", "12a"] {
            assert!(bad.parse::<Salary>().is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_salary_serializes_as_decimal_string() {
        let json = serde_json::to_string(&Salary::from_cents(86050)).unwrap();
        assert_eq!(json, "\"860.50\"");
        let back: Salary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Salary::from_cents(86050));
    }

    #[test]
    fn test_gender_from_str() {
        assert_eq!("M".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("f".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!(
            "X".parse::<Gender>(),
            Err(RosterError::InvalidGender("X".to_string()))
        );
    }

    #[test]
    fn test_parse_date_rejects_malformed() {
        assert!(parse_date("2021-02-30").is_err());
        assert!(parse_date("01/04/2021").is_err());
        assert_eq!(date("2021-04-01").to_string(), "2021-04-01");
    }

    #[test]
    fn test_termination_state() {
        let e = Employee::new(
            "Juan",
            "Gutierrez",
            Gender::Male,
            "Talento Humano",
            "Reclutador",
            Salary::from_units(500),
            date("2023-03-11"),
        );
        assert!(e.is_active());
        assert_eq!(e.termination_date(), None);

        let t = e.clone().terminated_on(date("2024-04-01")).unwrap();
        assert!(!t.is_active());
        assert_eq!(t.termination_date(), Some(date("2024-04-01")));

        assert!(e.terminated_on(date("2020-01-01")).is_err());
    }

    #[test]
    fn test_tenure_uses_calendar_difference() {
        let e = Employee::new(
            "Ana",
            "López",
            Gender::Female,
            "Ventas",
            "Gerente",
            Salary::from_units(1000),
            date("2020-04-21"),
        );
        assert_eq!(e.tenure_years(date("2024-04-20")), 3);
        assert_eq!(e.tenure_years(date("2024-04-21")), 4);
        assert_eq!(e.tenure_years(date("2019-01-01")), 0);
    }

    #[test]
    fn test_accumulator_merge_and_finish() {
        let left = SalaryAccumulator::default()
            .push(Salary::from_units(100))
            .push(Salary::from_units(300));
        let right = SalaryAccumulator::default().push(Salary::from_units(200));

        let stats = left.merge(right).finish().unwrap();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.min, Salary::from_units(100));
        assert_eq!(stats.max, Salary::from_units(300));
        assert_eq!(stats.mean, Salary::from_units(200));
        assert_eq!(stats.total, Salary::from_units(600));

        assert_eq!(SalaryAccumulator::default().finish(), None);
        assert_eq!(
            SalaryAccumulator::default().merge(right).finish(),
            right.finish()
        );
    }

    #[test]
    fn test_mean_rounds_half_up() {
        let stats = SalaryAccumulator::default()
            .push(Salary::from_cents(1))
            .push(Salary::from_cents(2))
            .finish()
            .unwrap();
        assert_eq!(stats.mean, Salary::from_cents(2));
    }

    #[test]
    fn test_department_activity_percentage() {
        assert_eq!(DepartmentActivity::new(1, 2).percentage, 50.0);
        assert_eq!(DepartmentActivity::new(0, 3).percentage, 0.0);
        assert_eq!(DepartmentActivity::new(0, 0).percentage, 0.0);
    }
}
