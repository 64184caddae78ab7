//! Configuration for a comparison report run.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::collector::CRITERION_OUTPUT_DIR;
use crate::errors::ConfigError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// One competing implementation: the Criterion directory name and the label used in reports.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ImplementationSpec {
    pub id: String,
    pub display_name: String,
}

impl ImplementationSpec {
    pub fn new(id: &str, display_name: &str) -> Self {
        Self { id: id.to_string(), display_name: display_name.to_string() }
    }
}

impl FromStr for ImplementationSpec {
    type Err = ConfigError;

    /// Parses `id` or `id=DisplayName`.
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let (id, display_name) = spec.split_once('=').unwrap_or((spec, spec));
        let (id, display_name) = (id.trim(), display_name.trim());
        if id.is_empty() || display_name.is_empty() {
            return Err(ConfigError::InvalidArgument(format!(
                "Invalid implementation '{spec}', expected ID or ID=DISPLAY_NAME"
            )));
        }
        Ok(Self::new(id, display_name))
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration for a report run.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ReportConfig {
    /// Root of the Criterion output tree.
    #[serde(default = "default_criterion_dir")]
    pub criterion_dir: PathBuf,
    /// Compared implementations, in column order. The first one is the baseline.
    #[serde(default = "default_implementations")]
    pub implementations: Vec<ImplementationSpec>,
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_criterion_dir() -> PathBuf {
    PathBuf::from(CRITERION_OUTPUT_DIR)
}

fn default_implementations() -> Vec<ImplementationSpec> {
    vec![
        ImplementationSpec::new("versioned_art", "VersionedART"),
        ImplementationSpec::new("im_hashmap", "ImHashMap"),
        ImplementationSpec::new("im_ordmap", "ImOrdMap"),
    ]
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            criterion_dir: default_criterion_dir(),
            implementations: default_implementations(),
            output_format: OutputFormat::default(),
        }
    }
}

impl ReportConfig {
    /// Reads a JSON config file. Missing fields take their default values.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file_error = |action: &str, cause: &dyn std::fmt::Display| {
            ConfigError::ConfigFileError(format!("Failed to {action} {}: {cause}", path.display()))
        };
        let contents = fs::read_to_string(path).map_err(|e| file_error("read", &e))?;
        serde_json::from_str(&contents).map_err(|e| file_error("parse", &e))
    }

    /// Creates a ReportConfig from CLI arguments. Arguments override the config file, which
    /// overrides the defaults.
    pub fn from_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = match args.config_file {
            Some(config_file) => Self::from_file(&config_file)?,
            None => Self::default(),
        };

        if let Some(criterion_dir) = args.criterion_dir {
            config.criterion_dir = criterion_dir;
        }
        if !args.implementations.is_empty() {
            config.implementations = args.implementations;
        }
        if let Some(output_format) = args.output_format {
            config.output_format = output_format;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.implementations.is_empty() {
            return Err(ConfigError::InvalidArgument(
                "At least one implementation is required".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for implementation in &self.implementations {
            if !seen.insert(implementation.id.as_str()) {
                return Err(ConfigError::InvalidArgument(format!(
                    "Duplicate implementation '{}'",
                    implementation.id
                )));
            }
        }
        Ok(())
    }
}

/// CLI arguments for the comparison report.
#[derive(Parser, Debug)]
#[command(name = "bench_comparison")]
#[command(
    about = "Compares Criterion results of competing implementations",
    long_about = None
)]
pub struct CliArgs {
    /// Path to JSON configuration file.
    #[arg(long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Criterion output directory. Defaults to "target/criterion".
    #[arg(long, value_name = "DIR")]
    pub criterion_dir: Option<PathBuf>,

    /// Implementation to compare, as ID or ID=DISPLAY_NAME. Repeat in column order; the first is
    /// the baseline.
    #[arg(long = "implementation", value_name = "SPEC")]
    pub implementations: Vec<ImplementationSpec>,

    /// Report format.
    #[arg(long, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Log level, used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
