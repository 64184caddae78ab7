use serde::Serialize;

use crate::comparison::select_winner;
use crate::config::ImplementationSpec;
use crate::types::dataset::Dataset;

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

/// Minimal number of implementations with data for a parameter to count as a comparison.
const MIN_COMPARED_IMPLEMENTATIONS: usize = 2;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImplementationWins {
    pub implementation: String,
    pub wins: usize,
    /// Share of all comparisons won, in percent. Absent when no comparison was made.
    pub percentage: Option<f64>,
}

/// Win counts over every benchmark and parameter.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub total_comparisons: usize,
    /// One entry per compared implementation, in configured order.
    pub wins: Vec<ImplementationWins>,
}

#[allow(clippy::as_conversions)]
fn percentage(wins: usize, total: usize) -> Option<f64> {
    (total > 0).then(|| wins as f64 / total as f64 * 100.0)
}

/// Tallies winners over every parameter measured for the baseline (the first implementation). A
/// parameter counts as a comparison only if at least two implementations have data for it.
pub fn summarize(dataset: &Dataset, implementations: &[ImplementationSpec]) -> Summary {
    let mut win_counts = vec![0; implementations.len()];
    let mut total_comparisons = 0;

    if let Some(baseline) = implementations.first() {
        for benchmark in dataset.benchmarks.values() {
            let Some(baseline_data) = benchmark.implementations.get(&baseline.id) else {
                continue;
            };
            for parameter in baseline_data.parameters.keys() {
                let means: Vec<Option<f64>> = implementations
                    .iter()
                    .map(|spec| benchmark.mean(&spec.id, parameter))
                    .collect();
                if means.iter().flatten().count() < MIN_COMPARED_IMPLEMENTATIONS {
                    continue;
                }
                if let Some(winner) = select_winner(&means) {
                    total_comparisons += 1;
                    win_counts[winner] += 1;
                }
            }
        }
    }

    let wins = implementations
        .iter()
        .zip(win_counts)
        .map(|(spec, wins)| ImplementationWins {
            implementation: spec.id.clone(),
            wins,
            percentage: percentage(wins, total_comparisons),
        })
        .collect();

    Summary { total_comparisons, wins }
}
