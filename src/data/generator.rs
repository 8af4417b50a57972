//! Synthetic employee generation.
//!
//! Produces large, reproducible employee lists for the benchmark by
//! drawing every field from a small vocabulary with a seeded RNG.

use crate::models::{Employee, Gender, Salary};
use chrono::NaiveDate;
use indicatif::ProgressBar;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

const FIRST_NAMES: &[&str] = &[
    "Juan", "María", "Carlos", "Ana", "Luis", "Laura", "Pedro", "Sofia",
];
const LAST_NAMES: &[&str] = &[
    "García",
    "Rodríguez",
    "Martínez",
    "López",
    "González",
    "Pérez",
];
const DEPARTMENTS: &[&str] = &["Informática", "Contabilidad", "Talento Humano", "Ventas"];
const JOB_TITLES: &[&str] = &["Desarrollador", "Asistente", "Supervisor", "Gerente"];

/// Salary range in whole units, upper bound exclusive.
const SALARY_UNITS: std::ops::Range<u64> = 500..2500;
/// Hire year range, upper bound exclusive.
const HIRE_YEARS: std::ops::Range<i32> = 2018..2024;

/// How often the progress bar is advanced.
const PROGRESS_STEP: usize = 100_000;

/// Generate `count` active employees from `seed`.
///
/// The same seed always yields the same list.
pub fn generate_employees(count: usize, seed: u64, progress: Option<&ProgressBar>) -> Vec<Employee> {
    debug!("Generating {} employees with seed {}", count, seed);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut employees = Vec::with_capacity(count);

    for i in 0..count {
        employees.push(random_employee(&mut rng));

        if let Some(pb) = progress {
            if (i + 1) % PROGRESS_STEP == 0 {
                pb.set_position((i + 1) as u64);
            }
        }
    }

    if let Some(pb) = progress {
        pb.set_position(count as u64);
    }

    employees
}

fn random_employee(rng: &mut StdRng) -> Employee {
    let year = rng.gen_range(HIRE_YEARS);
    let month = rng.gen_range(1..=12);
    let day = rng.gen_range(1..=28);
    // Days 1..=28 exist in every month.
    let hire_date = NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default();

    Employee::new(
        pick(rng, FIRST_NAMES),
        pick(rng, LAST_NAMES),
        Gender::ALL[rng.gen_range(0..Gender::ALL.len())],
        pick(rng, DEPARTMENTS),
        pick(rng, JOB_TITLES),
        Salary::from_units(rng.gen_range(SALARY_UNITS)),
        hire_date,
    )
}

fn pick(rng: &mut StdRng, words: &[&'static str]) -> &'static str {
    words[rng.gen_range(0..words.len())]
}
