use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::errors::{EstimateParseError, ReportError};
use crate::types::dataset::Dataset;
use crate::types::estimates::{EstimateRecord, Estimates};

#[cfg(test)]
#[path = "collector_test.rs"]
mod collector_test;

/// Default output directory used by the Criterion benchmarking library.
pub const CRITERION_OUTPUT_DIR: &str = "target/criterion";

/// Path to the estimates file within a Criterion parameter directory.
/// Criterion stores the latest benchmark results in this subdirectory structure.
pub const CRITERION_ESTIMATES_PATH: &str = "new/estimates.json";

/// Reads one Criterion estimates document.
pub fn load_estimates(path: &Path) -> Result<EstimateRecord, EstimateParseError> {
    let data = fs::read_to_string(path)
        .map_err(|source| EstimateParseError::Io { path: path.to_path_buf(), source })?;
    let estimates: Estimates = serde_json::from_str(&data)
        .map_err(|source| EstimateParseError::Deserialize { path: path.to_path_buf(), source })?;
    EstimateRecord::try_from(estimates).map_err(|missing| EstimateParseError::MissingField {
        path: path.to_path_buf(),
        field: missing.0,
    })
}

/// Returns the immediate subdirectories of `dir` with their names. Other entries are skipped.
fn subdirectories(dir: &Path) -> Result<Vec<(String, PathBuf)>, ReportError> {
    let io_error = |source: std::io::Error| ReportError::Io { path: dir.to_path_buf(), source };
    let mut subdirectories = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if !path.is_dir() {
            debug!("Skipping non-directory entry {}.", path.display());
            continue;
        }
        let Some(name) = path.file_name().map(|name| name.to_string_lossy().into_owned()) else {
            continue;
        };
        subdirectories.push((name, path));
    }
    Ok(subdirectories)
}

/// Lists a benchmark or implementation directory. An unreadable one is skipped with a warning so
/// that the rest of the tree is still reported.
fn readable_subdirectories(dir: &Path) -> Option<Vec<(String, PathBuf)>> {
    match subdirectories(dir) {
        Ok(subdirectories) => Some(subdirectories),
        Err(error) => {
            warn!("Skipping unreadable subtree: {error}");
            None
        }
    }
}

fn collect_implementation(
    dataset: &mut Dataset,
    benchmark: &str,
    implementation: &str,
    implementation_dir: &Path,
) {
    let Some(parameters) = readable_subdirectories(implementation_dir) else {
        return;
    };
    dataset.add_benchmark(benchmark).add_implementation(implementation);
    for (parameter, parameter_dir) in parameters {
        let estimates_path = parameter_dir.join(CRITERION_ESTIMATES_PATH);
        if !estimates_path.exists() {
            debug!("No estimates at {}, skipping.", estimates_path.display());
            continue;
        }
        match load_estimates(&estimates_path) {
            Ok(record) => dataset.insert(benchmark, implementation, &parameter, record),
            Err(error) => warn!("Error parsing estimates: {error}"),
        }
    }
}

fn collect_benchmark(dataset: &mut Dataset, benchmark: &str, benchmark_dir: &Path) {
    let Some(implementations) = readable_subdirectories(benchmark_dir) else {
        return;
    };
    dataset.add_benchmark(benchmark);
    for (implementation, implementation_dir) in implementations {
        collect_implementation(dataset, benchmark, &implementation, &implementation_dir);
    }
}

/// Walks `<criterion_dir>/<benchmark>/<implementation>/<parameter>/new/estimates.json` and
/// collects every readable record. Leaves without an estimates file are skipped silently, and
/// leaves whose file fails to parse are skipped with a warning, as are nested directories that
/// cannot be listed. Only failing to list `criterion_dir` itself is an error.
pub fn collect_benchmark_data(criterion_dir: &Path) -> Result<Dataset, ReportError> {
    let mut dataset = Dataset::default();
    for (benchmark, benchmark_dir) in subdirectories(criterion_dir)? {
        collect_benchmark(&mut dataset, &benchmark, &benchmark_dir);
    }
    info!("Collected {} benchmark(s) from {}.", dataset.len(), criterion_dir.display());
    Ok(dataset)
}
