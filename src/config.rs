//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.roster.toml` files.

use crate::analysis::BenchmarkOptions;
use crate::cli::OutputFormat;
use anyhow::{anyhow, Context, Result};
use chrono::Month;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = ".roster.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Query settings.
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Benchmark settings.
    #[serde(default)]
    pub benchmark: BenchmarkConfig,

    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Inputs to the roster queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Department listed by the department filter.
    #[serde(default = "default_department")]
    pub department: String,

    /// Number of longest-serving employees to show.
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Month (1-12) for the hired-in-month listing.
    #[serde(default = "default_hire_month")]
    pub hire_month: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            department: default_department(),
            top_n: default_top_n(),
            hire_month: default_hire_month(),
        }
    }
}

fn default_department() -> String {
    "Informática".to_string()
}

fn default_top_n() -> usize {
    3
}

fn default_hire_month() -> u32 {
    1
}

impl AnalysisConfig {
    /// The configured hire month.
    pub fn month(&self) -> Result<Month> {
        u8::try_from(self.hire_month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .ok_or_else(|| anyhow!("Invalid hire month {} (expected 1-12)", self.hire_month))
    }
}

/// Sequential vs. parallel benchmark settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Run the benchmark with every report.
    #[serde(default)]
    pub enabled: bool,

    /// Number of employees to generate.
    #[serde(default = "default_bench_size")]
    pub size: usize,

    /// Generator seed; random when absent.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Worker threads (0 for one per core).
    #[serde(default)]
    pub threads: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            size: default_bench_size(),
            seed: None,
            threads: 0,
        }
    }
}

fn default_bench_size() -> usize {
    5_000_000
}

impl From<&BenchmarkConfig> for BenchmarkOptions {
    fn from(config: &BenchmarkConfig) -> Self {
        Self {
            size: config.size,
            seed: config.seed,
            threads: config.threads,
            ..Self::default()
        }
    }
}

/// Report generation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .analysis
            .month()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        Self::load_from_dir(Path::new("."))
    }

    /// Try to load `.roster.toml` from a directory.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(CONFIG_FILE);

        if config_path.exists() {
            Ok(Some(Self::load(&config_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings.
    /// Only explicitly provided values override the file.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref department) = args.department {
            self.analysis.department = department.clone();
        }
        if let Some(top) = args.top {
            self.analysis.top_n = top;
        }
        if let Some(month) = args.hire_month {
            self.analysis.hire_month = month;
        }

        if args.benchmark {
            self.benchmark.enabled = true;
        }
        if let Some(size) = args.bench_size {
            self.benchmark.size = size;
        }
        if let Some(seed) = args.seed {
            self.benchmark.seed = Some(seed);
        }
        if let Some(threads) = args.threads {
            self.benchmark.threads = threads;
        }

        if let Some(format) = args.format {
            self.report.format = format;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.analysis.department, "Informática");
        assert_eq!(config.analysis.top_n, 3);
        assert_eq!(config.analysis.month().unwrap(), Month::January);
        assert!(!config.benchmark.enabled);
        assert_eq!(config.benchmark.size, 5_000_000);
        assert_eq!(config.report.format, OutputFormat::Markdown);
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[analysis]
department = "Ventas"
hire_month = 4

[benchmark]
enabled = true
size = 1000
seed = 42

[report]
format = "json"
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.analysis.department, "Ventas");
        assert_eq!(config.analysis.top_n, 3);
        assert_eq!(config.analysis.month().unwrap(), Month::April);
        assert!(config.benchmark.enabled);
        assert_eq!(config.benchmark.size, 1000);
        assert_eq!(config.benchmark.seed, Some(42));
        assert_eq!(config.benchmark.threads, 0);
        assert_eq!(config.report.format, OutputFormat::Json);
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from_dir(dir.path()).unwrap().is_none());

        std::fs::write(dir.path().join(CONFIG_FILE), "[analysis]\ntop_n = 5\n").unwrap();
        let config = Config::load_from_dir(dir.path()).unwrap().unwrap();
        assert_eq!(config.analysis.top_n, 5);
    }

    #[test]
    fn test_load_rejects_bad_month() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[analysis]\nhire_month = 13\n").unwrap();

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_merge_with_args() {
        let args = crate::cli::Args::try_parse_from([
            "roster",
            "--top",
            "5",
            "--bench-size",
            "10",
            "--threads",
            "2",
        ])
        .unwrap();

        let mut config = Config::default();
        config.analysis.department = "Ventas".to_string();
        config.merge_with_args(&args);

        assert_eq!(config.analysis.department, "Ventas");
        assert_eq!(config.analysis.top_n, 5);
        assert_eq!(config.benchmark.size, 10);
        assert_eq!(config.benchmark.threads, 2);
        assert!(!config.benchmark.enabled);

        let options = BenchmarkOptions::from(&config.benchmark);
        assert_eq!(options.size, 10);
        assert_eq!(options.threads, 2);
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(toml_str.contains("[analysis]"));
        assert!(toml_str.contains("[benchmark]"));
        assert!(toml_str.contains("[report]"));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.analysis.department, "Informática");
    }
}
