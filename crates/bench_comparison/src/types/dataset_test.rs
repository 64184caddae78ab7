use pretty_assertions::assert_eq;

use crate::types::dataset::Dataset;
use crate::types::estimates::EstimateRecord;

#[test]
fn parameter_union_spans_all_implementations() {
    let mut dataset = Dataset::default();
    dataset.insert("insert", "versioned_art", "10", EstimateRecord::from_mean(1.0));
    dataset.insert("insert", "versioned_art", "100", EstimateRecord::from_mean(2.0));
    dataset.insert("insert", "im_hashmap", "100", EstimateRecord::from_mean(3.0));
    dataset.insert("insert", "im_ordmap", "1000", EstimateRecord::from_mean(4.0));

    let union: Vec<_> =
        dataset.benchmark("insert").unwrap().parameter_union().into_iter().collect();

    assert_eq!(union, vec!["10", "100", "1000"]);
}

#[test]
fn insert_overwrites_same_path() {
    let mut dataset = Dataset::default();
    dataset.insert("insert", "im_hashmap", "10", EstimateRecord::from_mean(1.0));
    dataset.insert("insert", "im_hashmap", "10", EstimateRecord::from_mean(7.0));

    assert_eq!(dataset.record("insert", "im_hashmap", "10").map(|r| r.mean), Some(7.0));
    assert_eq!(dataset.len(), 1);
}

#[test]
fn missing_keys_at_any_level_yield_none() {
    let mut dataset = Dataset::default();
    dataset.insert("insert", "im_hashmap", "10", EstimateRecord::from_mean(1.0));

    assert_eq!(dataset.record("lookup", "im_hashmap", "10"), None);
    assert_eq!(dataset.record("insert", "im_ordmap", "10"), None);
    assert_eq!(dataset.record("insert", "im_hashmap", "20"), None);
}

#[test]
fn registered_benchmark_without_records_is_kept() {
    let mut dataset = Dataset::default();
    dataset.add_benchmark("scan").add_implementation("versioned_art");

    assert!(!dataset.is_empty());
    let scan = dataset.benchmark("scan").unwrap();
    assert!(!scan.is_empty());
    assert!(scan.parameter_union().is_empty());
}
