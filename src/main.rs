//! Roster - functional-style queries over an employee roster
//!
//! A CLI that filters, sorts, groups and summarizes a built-in employee
//! roster, and optionally benchmarks sequential against parallel
//! reductions over a large generated roster.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Error (invalid arguments, config, roster data, output)

mod analysis;
mod cli;
mod config;
mod data;
mod models;
mod report;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, Utc};
use cli::{Args, OutputFormat};
use config::Config;
use models::{DepartmentMembers, Employee, MonthlyHires, Report, ReportMetadata};
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    init_logging(&args)?;

    info!("Roster v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    if let Err(e) = run(args) {
        error!("Roster failed: {:#}", e);
        eprintln!("\n❌ Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Handle --init-config: generate a default .roster.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(config::CONFIG_FILE);

    if path.exists() {
        eprintln!(
            "⚠️  {} already exists. Remove it first or edit it manually.",
            config::CONFIG_FILE
        );
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", config::CONFIG_FILE))?;

    println!("✅ Created {} with default settings.", config::CONFIG_FILE);
    Ok(())
}

/// Initialize logging based on verbosity settings.
///
/// Logs go to stderr so the report on stdout stays clean.
fn init_logging(args: &Args) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")
}

/// Build the report and write it out.
fn run(args: Args) -> Result<()> {
    let start_time = Instant::now();

    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    info!("Reference date: {}", today);

    let employees = data::load_roster().context("Failed to load the built-in roster")?;
    info!("Loaded {} employees", employees.len());

    let mut report = build_report(&employees, &config, today)?;

    if config.benchmark.enabled {
        let mut options = analysis::BenchmarkOptions::from(&config.benchmark);
        options.show_progress = !args.quiet;
        report.benchmark = Some(analysis::run_benchmark(&options)?);
    }

    report.metadata.duration_seconds = start_time.elapsed().as_secs_f64();

    let output = match config.report.format {
        OutputFormat::Json => report::generate_json_report(&report)?,
        OutputFormat::Markdown => report::generate_markdown_report(&report),
    };

    match args.output {
        Some(ref path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!("Report saved to: {}", path.display());
        }
        None => println!("{}", output),
    }

    Ok(())
}

/// Run every roster query and collect the results.
fn build_report(employees: &[Employee], config: &Config, today: NaiveDate) -> Result<Report> {
    let month = config.analysis.month()?;
    let department = &config.analysis.department;

    let department_members = DepartmentMembers {
        department: department.clone(),
        employees: analysis::filter_by_department(employees, department),
    };
    if department_members.employees.is_empty() {
        warn!("No employees in department '{}'", department);
    }

    let active_salary_statistics = analysis::active_salary_statistics(employees);
    if active_salary_statistics.is_none() {
        warn!("No active employees; salary statistics are empty");
    }

    Ok(Report {
        metadata: ReportMetadata {
            generated_at: Utc::now(),
            reference_date: today,
            total_employees: employees.len(),
            active_employees: employees.iter().filter(|e| e.is_active()).count(),
            duration_seconds: 0.0,
        },
        department_members,
        sorted_by_name: analysis::sort_by_name(employees),
        headcount_by_department: analysis::count_by_department(employees),
        monthly_hires: MonthlyHires {
            month: month.name().to_string(),
            employees: analysis::hired_in_month(employees, month),
        },
        active_salary_statistics,
        active_by_gender_and_department: analysis::group_by_gender_then_department(employees),
        most_senior: analysis::top_n_by_hire_date(employees, config.analysis.top_n, today),
        activity_by_department: analysis::active_percentage_by_department(employees),
        benchmark: None,
    })
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from {}", config::CONFIG_FILE);
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {:#}", e);
            Ok(Config::default())
        }
    }
}
