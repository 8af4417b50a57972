//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation.

use chrono::NaiveDate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Roster - functional-style queries over an employee roster
///
/// Filters, sorts, groups and summarizes the built-in roster, and can
/// compare sequential and parallel reductions over a generated one.
///
/// Examples:
///   roster
///   roster --department contabilidad --top 5 --today 2025-01-01
///   roster --format json --output roster.json
///   roster --benchmark --bench-size 1000000 --seed 42
///   roster --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Path to configuration file
    ///
    /// If not specified, looks for .roster.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only, no progress bar)
    #[arg(short, long)]
    pub quiet: bool,

    /// Department to list (case-insensitive)
    #[arg(short, long, value_name = "NAME")]
    pub department: Option<String>,

    /// Number of longest-serving employees to show
    #[arg(short, long, value_name = "COUNT")]
    pub top: Option<usize>,

    /// Month (1-12) for the hired-in-month listing
    #[arg(long, value_name = "MONTH")]
    pub hire_month: Option<u32>,

    /// Reference date for tenure (YYYY-MM-DD)
    ///
    /// Defaults to the local date.
    #[arg(long, value_name = "DATE", env = "ROSTER_TODAY")]
    pub today: Option<NaiveDate>,

    /// Output format (markdown, json)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Run the sequential vs. parallel benchmark
    #[arg(short, long)]
    pub benchmark: bool,

    /// Number of employees generated for the benchmark
    #[arg(long, value_name = "COUNT")]
    pub bench_size: Option<usize>,

    /// Seed for the benchmark generator
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Worker threads for the parallel benchmark runs
    #[arg(long, value_name = "NUM")]
    pub threads: Option<usize>,

    /// Generate a default .roster.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the report.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Markdown format (default)
    #[default]
    Markdown,
    /// JSON format
    Json,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if let Some(ref department) = self.department {
            if department.trim().is_empty() {
                return Err("Department must not be empty".to_string());
            }
        }

        if self.top == Some(0) {
            return Err("Top must be at least 1".to_string());
        }

        if let Some(month) = self.hire_month {
            if !(1..=12).contains(&month) {
                return Err("Hire month must be between 1 and 12".to_string());
            }
        }

        if self.bench_size == Some(0) {
            return Err("Benchmark size must be at least 1".to_string());
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
