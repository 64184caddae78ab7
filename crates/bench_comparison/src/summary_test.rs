use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

use crate::config::{ImplementationSpec, ReportConfig};
use crate::summary::{summarize, ImplementationWins, Summary};
use crate::types::dataset::Dataset;
use crate::types::estimates::EstimateRecord;

#[fixture]
fn implementations() -> Vec<ImplementationSpec> {
    ReportConfig::default().implementations
}

fn dataset(records: &[(&str, &str, &str, f64)]) -> Dataset {
    let mut dataset = Dataset::default();
    for (benchmark, implementation, parameter, mean) in records {
        dataset.insert(benchmark, implementation, parameter, EstimateRecord::from_mean(*mean));
    }
    dataset
}

fn wins_of(summary: &Summary) -> Vec<usize> {
    summary.wins.iter().map(|entry| entry.wins).collect()
}

#[rstest]
fn counts_wins_across_benchmarks(implementations: Vec<ImplementationSpec>) {
    let dataset = dataset(&[
        ("insert", "versioned_art", "10", 1.0),
        ("insert", "im_hashmap", "10", 2.0),
        ("insert", "im_ordmap", "10", 3.0),
        ("insert", "versioned_art", "100", 9.0),
        ("insert", "im_hashmap", "100", 4.0),
        ("lookup", "versioned_art", "10", 5.0),
        ("lookup", "im_ordmap", "10", 2.5),
        ("lookup", "versioned_art", "100", 5.0),
        ("lookup", "im_ordmap", "100", 6.0),
    ]);

    let summary = summarize(&dataset, &implementations);

    assert_eq!(summary.total_comparisons, 4);
    assert_eq!(
        summary.wins,
        vec![
            ImplementationWins {
                implementation: "versioned_art".to_string(),
                wins: 2,
                percentage: Some(50.0),
            },
            ImplementationWins {
                implementation: "im_hashmap".to_string(),
                wins: 1,
                percentage: Some(25.0),
            },
            ImplementationWins {
                implementation: "im_ordmap".to_string(),
                wins: 1,
                percentage: Some(25.0),
            },
        ]
    );
}

#[rstest]
fn only_baseline_parameters_are_compared(implementations: Vec<ImplementationSpec>) {
    let dataset = dataset(&[
        ("insert", "versioned_art", "10", 5.0),
        ("insert", "im_hashmap", "10", 1.0),
        // Not measured for the baseline.
        ("insert", "im_hashmap", "20", 1.0),
        ("insert", "im_ordmap", "20", 2.0),
        ("scan", "im_hashmap", "1", 1.0),
        ("scan", "im_ordmap", "1", 2.0),
    ]);

    let summary = summarize(&dataset, &implementations);

    assert_eq!(summary.total_comparisons, 1);
    assert_eq!(wins_of(&summary), vec![0, 1, 0]);
}

#[rstest]
fn single_implementation_is_not_a_comparison(implementations: Vec<ImplementationSpec>) {
    let dataset = dataset(&[
        ("insert", "versioned_art", "10", 5.0),
        ("insert", "versioned_art", "20", 6.0),
        ("insert", "im_hashmap", "20", 7.0),
    ]);

    let summary = summarize(&dataset, &implementations);

    assert_eq!(summary.total_comparisons, 1);
    assert_eq!(wins_of(&summary), vec![1, 0, 0]);
}

#[rstest]
fn ties_go_to_first_listed(implementations: Vec<ImplementationSpec>) {
    let dataset = dataset(&[
        ("insert", "versioned_art", "10", 3.0),
        ("insert", "im_hashmap", "10", 2.0),
        ("insert", "im_ordmap", "10", 2.0),
    ]);

    assert_eq!(wins_of(&summarize(&dataset, &implementations)), vec![0, 1, 0]);
}

#[rstest]
fn no_comparisons_have_no_percentages(implementations: Vec<ImplementationSpec>) {
    let dataset = dataset(&[("insert", "versioned_art", "10", 3.0)]);

    let summary = summarize(&dataset, &implementations);

    assert_eq!(summary.total_comparisons, 0);
    assert!(summary.wins.iter().all(|entry| entry.wins == 0 && entry.percentage.is_none()));
}

#[rstest]
fn percentages_sum_to_hundred(implementations: Vec<ImplementationSpec>) {
    let dataset = dataset(&[
        ("a", "versioned_art", "1", 1.0),
        ("a", "im_hashmap", "1", 2.0),
        ("a", "versioned_art", "2", 3.0),
        ("a", "im_ordmap", "2", 2.0),
        ("b", "versioned_art", "1", 3.0),
        ("b", "im_hashmap", "1", 2.0),
    ]);

    let summary = summarize(&dataset, &implementations);

    let total: f64 = summary.wins.iter().filter_map(|entry| entry.percentage).sum();
    assert!((total - 100.0).abs() < 1e-9);
}
