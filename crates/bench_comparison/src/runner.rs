use tracing::info;

use crate::collector::collect_benchmark_data;
use crate::config::{OutputFormat, ReportConfig};
use crate::errors::ReportError;
use crate::report::AnalysisReport;

/// Collects the Criterion tree named by `config` and renders the comparison report. Fails if the
/// directory is missing or holds no benchmark.
pub fn run_report(config: &ReportConfig) -> Result<String, ReportError> {
    let criterion_dir = &config.criterion_dir;
    if !criterion_dir.exists() {
        return Err(ReportError::CriterionDirNotFound(criterion_dir.clone()));
    }

    info!("Collecting benchmark data...");
    let dataset = collect_benchmark_data(criterion_dir)?;
    if dataset.is_empty() {
        return Err(ReportError::NoBenchmarkData(criterion_dir.clone()));
    }

    let report = AnalysisReport::new(&dataset, &config.implementations);
    info!(
        benchmarks = report.benchmarks.len(),
        comparisons = report.summary.total_comparisons,
        "Comparison report is ready."
    );
    match config.output_format {
        OutputFormat::Text => Ok(report.render_text()),
        OutputFormat::Json => Ok(report.render_json()?),
    }
}
