use std::cmp::Ordering;

use serde::Serialize;

use crate::config::ImplementationSpec;
use crate::types::dataset::BenchmarkData;

#[cfg(test)]
#[path = "comparison_test.rs"]
mod comparison_test;

/// Means of all compared implementations at one parameter value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub parameter: String,
    /// Mean time in nanoseconds, one entry per compared implementation, in configured order.
    pub means: Vec<Option<f64>>,
    /// Id of the implementation with the smallest mean.
    pub winner: Option<String>,
}

/// Ratios of every non-baseline implementation's mean to the baseline's mean at one parameter.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RatioRow {
    pub parameter: String,
    /// One entry per non-baseline implementation, in configured order.
    pub ratios: Vec<Option<f64>>,
}

/// Result of comparing the implementations of one benchmark.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BenchmarkComparison {
    pub name: String,
    /// False if no implementation directory was found for this benchmark.
    pub has_data: bool,
    pub rows: Vec<ComparisonRow>,
    /// Only parameters at which the baseline was measured.
    pub ratio_rows: Vec<RatioRow>,
}

/// Parses an integer parameter value. Single underscores between digits are accepted as digit
/// separators (`1_000`).
fn parse_integer(parameter: &str) -> Option<i128> {
    let parameter = parameter.trim();
    let digits = parameter.strip_prefix(&['+', '-'][..]).unwrap_or(parameter);
    if digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return None;
    }
    parameter.replace('_', "").parse().ok()
}

/// Orders parameter values numerically if every one of them is an integer, and lexically
/// otherwise. Mixed orderings are never produced.
pub fn sort_parameters(parameters: impl IntoIterator<Item = String>) -> Vec<String> {
    let parameters: Vec<String> = parameters.into_iter().collect();
    let numeric: Option<Vec<(i128, String)>> = parameters
        .iter()
        .map(|parameter| parse_integer(parameter).map(|n| (n, parameter.clone())))
        .collect();
    match numeric {
        Some(mut numeric) => {
            numeric.sort_by(|(a, a_str), (b, b_str)| a.cmp(b).then_with(|| a_str.cmp(b_str)));
            numeric.into_iter().map(|(_, parameter)| parameter).collect()
        }
        None => {
            let mut parameters = parameters;
            parameters.sort();
            parameters
        }
    }
}

/// Index of the strictly smallest mean among the present ones. On an exact tie the first listed
/// wins.
pub fn select_winner(means: &[Option<f64>]) -> Option<usize> {
    let mut winner: Option<(usize, f64)> = None;
    for (index, mean) in means.iter().enumerate() {
        let Some(mean) = *mean else { continue };
        match winner {
            Some((_, best)) if mean.partial_cmp(&best) != Some(Ordering::Less) => {}
            _ => winner = Some((index, mean)),
        }
    }
    winner.map(|(index, _)| index)
}

fn means_at(
    data: &BenchmarkData,
    implementations: &[ImplementationSpec],
    parameter: &str,
) -> Vec<Option<f64>> {
    implementations.iter().map(|spec| data.mean(&spec.id, parameter)).collect()
}

/// Compares `implementations` across every parameter value measured in `data`. The first
/// implementation is the baseline of the ratio rows.
pub fn compare_benchmark(
    name: &str,
    data: &BenchmarkData,
    implementations: &[ImplementationSpec],
) -> BenchmarkComparison {
    let parameters = sort_parameters(data.parameter_union());

    let rows = parameters
        .iter()
        .map(|parameter| {
            let means = means_at(data, implementations, parameter);
            let winner = select_winner(&means).map(|index| implementations[index].id.clone());
            ComparisonRow { parameter: parameter.clone(), means, winner }
        })
        .collect();

    let ratio_rows = match implementations.split_first() {
        Some((baseline, others)) => parameters
            .iter()
            .filter_map(|parameter| {
                let baseline_mean = data.mean(&baseline.id, parameter)?;
                let ratios = means_at(data, others, parameter)
                    .into_iter()
                    // A zero baseline has no meaningful ratio.
                    .map(|mean| {
                        mean.filter(|_| baseline_mean != 0.0).map(|mean| mean / baseline_mean)
                    })
                    .collect();
                Some(RatioRow { parameter: parameter.clone(), ratios })
            })
            .collect(),
        None => Vec::new(),
    };

    BenchmarkComparison { name: name.to_string(), has_data: !data.is_empty(), rows, ratio_rows }
}
