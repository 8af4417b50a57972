//! Sequential vs. parallel timing over a generated roster.

use super::parallel::{count_by_department_with, salary_statistics_with, ExecutionMode};
use crate::data::generate_employees;
use crate::models::{BenchmarkReport, TimedComparison};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::ThreadPool;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Options for a benchmark run.
#[derive(Debug, Clone)]
pub struct BenchmarkOptions {
    /// Number of employees to generate.
    pub size: usize,
    /// RNG seed. A random seed is drawn when not set.
    pub seed: Option<u64>,
    /// Worker threads for the parallel runs (0 for rayon's default).
    pub threads: usize,
    /// Whether to show a progress bar while generating.
    pub show_progress: bool,
}

impl Default for BenchmarkOptions {
    fn default() -> Self {
        Self {
            size: 5_000_000,
            seed: None,
            threads: 0,
            show_progress: true,
        }
    }
}

/// Generate the roster and time both reductions in both modes.
pub fn run_benchmark(options: &BenchmarkOptions) -> Result<BenchmarkReport> {
    let seed = options.seed.unwrap_or_else(rand::random);
    let pool = build_thread_pool(options.threads)?;

    info!(
        "Benchmarking {} employees (seed {}, {} threads)",
        options.size,
        seed,
        pool.current_num_threads()
    );

    let pb = if options.show_progress {
        Some(generation_progress(options.size)?)
    } else {
        None
    };

    let start = Instant::now();
    let employees = generate_employees(options.size, seed, pb.as_ref());
    let generation_ms = millis(start.elapsed());

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
    debug!("Generated {} employees in {:.1} ms", employees.len(), generation_ms);

    let average_salary = pool.install(|| {
        compare(|mode| salary_statistics_with(mode, &employees, |_| true).map(|s| s.mean))
    });
    let department_counts =
        pool.install(|| compare(|mode| count_by_department_with(mode, &employees)));

    Ok(BenchmarkReport {
        size: options.size,
        seed,
        threads: pool.current_num_threads(),
        generation_ms,
        average_salary,
        department_counts,
    })
}

fn build_thread_pool(threads: usize) -> Result<ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("roster-worker-{}", i))
        .build()
        .context("Failed to build benchmark thread pool")
}

fn generation_progress(size: usize) -> Result<ProgressBar> {
    let pb = ProgressBar::new(size as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} {msg} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )?
            .progress_chars("#>-"),
    );
    pb.set_message("Generating employees");
    Ok(pb)
}

/// Run `task` sequentially, then in parallel, timing each.
fn compare<T>(task: impl Fn(ExecutionMode) -> T) -> TimedComparison<T> {
    let start = Instant::now();
    let sequential = task(ExecutionMode::Sequential);
    let sequential_ms = millis(start.elapsed());

    let start = Instant::now();
    let parallel = task(ExecutionMode::Parallel);
    let parallel_ms = millis(start.elapsed());

    debug!(
        "sequential {:.1} ms, parallel {:.1} ms",
        sequential_ms, parallel_ms
    );

    TimedComparison {
        sequential,
        sequential_ms,
        parallel,
        parallel_ms,
    }
}

fn millis(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1000.0
}
