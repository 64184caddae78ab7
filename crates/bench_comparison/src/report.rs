use serde::Serialize;

use crate::comparison::{compare_benchmark, BenchmarkComparison};
use crate::config::ImplementationSpec;
use crate::summary::{summarize, Summary};
use crate::types::dataset::Dataset;

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

/// Placeholder for cells without data.
pub const NOT_AVAILABLE: &str = "N/A";

const PARAMETER_WIDTH: usize = 12;
const TIME_COLUMN_WIDTH: usize = 15;
const RATIO_COLUMN_WIDTH: usize = 24;
const BANNER_WIDTH: usize = 60;

const NANOS_PER_MICRO: f64 = 1_000.0;
const NANOS_PER_MILLI: f64 = 1_000_000.0;
const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// Formats a duration in nanoseconds with the largest unit that keeps the value at least 1.
pub fn format_time(nanoseconds: f64) -> String {
    if nanoseconds < NANOS_PER_MICRO {
        format!("{nanoseconds:.1} ns")
    } else if nanoseconds < NANOS_PER_MILLI {
        format!("{:.1} µs", nanoseconds / NANOS_PER_MICRO)
    } else if nanoseconds < NANOS_PER_SEC {
        format!("{:.1} ms", nanoseconds / NANOS_PER_MILLI)
    } else {
        format!("{:.1} s", nanoseconds / NANOS_PER_SEC)
    }
}

pub fn format_ratio(ratio: f64) -> String {
    format!("{ratio:.2}x")
}

fn or_not_available(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn display_name<'a>(implementations: &'a [ImplementationSpec], id: &str) -> &'a str {
    implementations
        .iter()
        .find(|spec| spec.id == id)
        .map_or(NOT_AVAILABLE, |spec| spec.display_name.as_str())
}

/// Lays out one table line; cells are left-aligned and padded to their column width.
fn table_line(parameter: &str, cells: &[String], width: usize) -> String {
    let mut line = format!("{parameter:<parameter_width$}", parameter_width = PARAMETER_WIDTH);
    for cell in cells {
        line.push_str(&format!(" {cell:<width$}"));
    }
    line.trim_end().to_string()
}

fn separator(columns: usize, width: usize) -> String {
    "-".repeat(PARAMETER_WIDTH + columns * (width + 1))
}

fn banner(title: &str) -> Vec<String> {
    let rule = "=".repeat(BANNER_WIDTH);
    vec![rule.clone(), title.to_string(), rule]
}

/// Renders the per-parameter time table with the winner in the last column.
pub fn render_comparison_table(
    comparison: &BenchmarkComparison,
    implementations: &[ImplementationSpec],
) -> String {
    let mut header: Vec<String> =
        implementations.iter().map(|spec| spec.display_name.clone()).collect();
    header.push("Best".to_string());

    let mut lines = vec![
        table_line("Parameter", &header, TIME_COLUMN_WIDTH),
        separator(header.len(), TIME_COLUMN_WIDTH),
    ];
    for row in &comparison.rows {
        let mut cells: Vec<String> =
            row.means.iter().map(|mean| or_not_available(mean.map(format_time))).collect();
        cells.push(
            row.winner
                .as_deref()
                .map_or(NOT_AVAILABLE, |winner| display_name(implementations, winner))
                .to_string(),
        );
        lines.push(table_line(&row.parameter, &cells, TIME_COLUMN_WIDTH));
    }
    lines.join("\n")
}

/// Renders the ratios of every other implementation to the baseline (the first implementation).
pub fn render_ratio_table(
    comparison: &BenchmarkComparison,
    implementations: &[ImplementationSpec],
) -> String {
    let Some((baseline, others)) = implementations.split_first() else {
        return String::new();
    };
    let header: Vec<String> = others
        .iter()
        .map(|spec| format!("{}/{}", spec.display_name, baseline.display_name))
        .collect();

    let mut lines = vec![
        format!("Performance Ratios (relative to {}):", baseline.display_name),
        table_line("Parameter", &header, RATIO_COLUMN_WIDTH),
        separator(header.len(), RATIO_COLUMN_WIDTH),
    ];
    for row in &comparison.ratio_rows {
        let cells: Vec<String> =
            row.ratios.iter().map(|ratio| or_not_available(ratio.map(format_ratio))).collect();
        lines.push(table_line(&row.parameter, &cells, RATIO_COLUMN_WIDTH));
    }
    lines.join("\n")
}

/// Renders the banner and both tables of one benchmark.
pub fn render_benchmark_section(
    comparison: &BenchmarkComparison,
    implementations: &[ImplementationSpec],
) -> String {
    let mut lines = banner(&format!("BENCHMARK: {}", comparison.name));
    if comparison.has_data {
        lines.push(render_comparison_table(comparison, implementations));
        lines.push(String::new());
        lines.push(render_ratio_table(comparison, implementations));
    } else {
        lines.push("No data available".to_string());
    }
    lines.join("\n")
}

pub fn render_benchmark_list<'a>(names: impl ExactSizeIterator<Item = &'a str>) -> String {
    let mut lines = vec![format!("Found {} benchmark categories:", names.len())];
    lines.extend(names.map(|name| format!("  - {name}")));
    lines.join("\n")
}

pub fn render_summary(summary: &Summary, implementations: &[ImplementationSpec]) -> String {
    let mut lines = banner("SUMMARY");
    if summary.total_comparisons == 0 {
        lines.push(
            "Overall Performance Summary (0 comparisons): no parameter was measured for two or \
             more implementations."
                .to_string(),
        );
        return lines.join("\n");
    }

    lines.push(format!(
        "Overall Performance Summary ({} comparisons):",
        summary.total_comparisons
    ));
    let labels: Vec<String> = summary
        .wins
        .iter()
        .map(|entry| format!("{} wins:", display_name(implementations, &entry.implementation)))
        .collect();
    let label_width = labels.iter().map(|label| label.chars().count()).max().unwrap_or(0);
    for (label, entry) in labels.iter().zip(&summary.wins) {
        let percentage = entry.percentage.unwrap_or_default();
        lines.push(format!("  {label:<label_width$} {} ({percentage:.1}%)", entry.wins));
    }
    lines.join("\n")
}

/// Everything derived from one dataset: per-benchmark comparisons and the overall summary.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub implementations: Vec<ImplementationSpec>,
    pub benchmarks: Vec<BenchmarkComparison>,
    pub summary: Summary,
}

impl AnalysisReport {
    pub fn new(dataset: &Dataset, implementations: &[ImplementationSpec]) -> Self {
        let benchmarks = dataset
            .benchmarks
            .iter()
            .map(|(name, data)| compare_benchmark(name, data, implementations))
            .collect();
        Self {
            implementations: implementations.to_vec(),
            benchmarks,
            summary: summarize(dataset, implementations),
        }
    }

    pub fn render_text(&self) -> String {
        let mut sections =
            vec![render_benchmark_list(self.benchmarks.iter().map(|b| b.name.as_str()))];
        for comparison in &self.benchmarks {
            sections.push(render_benchmark_section(comparison, &self.implementations));
        }
        sections.push(render_summary(&self.summary, &self.implementations));
        let mut text = sections.join("\n\n");
        text.push('\n');
        text
    }

    pub fn render_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
