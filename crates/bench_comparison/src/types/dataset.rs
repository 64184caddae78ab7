use std::collections::{BTreeMap, BTreeSet};

use crate::types::estimates::EstimateRecord;

#[cfg(test)]
#[path = "dataset_test.rs"]
mod dataset_test;

/// Records of one implementation, keyed by parameter value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImplementationData {
    pub parameters: BTreeMap<String, EstimateRecord>,
}

impl ImplementationData {
    pub fn record(&self, parameter: &str) -> Option<&EstimateRecord> {
        self.parameters.get(parameter)
    }
}

/// Data of one benchmark, keyed by implementation name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BenchmarkData {
    pub implementations: BTreeMap<String, ImplementationData>,
}

impl BenchmarkData {
    /// Registers an implementation directory, even if it ends up holding no records.
    pub fn add_implementation(&mut self, implementation: &str) -> &mut ImplementationData {
        self.implementations.entry(implementation.to_string()).or_default()
    }

    pub fn record(&self, implementation: &str, parameter: &str) -> Option<&EstimateRecord> {
        self.implementations.get(implementation)?.record(parameter)
    }

    /// Mean time of `implementation` at `parameter`, if it was measured.
    pub fn mean(&self, implementation: &str, parameter: &str) -> Option<f64> {
        self.record(implementation, parameter).map(|record| record.mean)
    }

    /// All parameter values measured by at least one implementation.
    pub fn parameter_union(&self) -> BTreeSet<String> {
        self.implementations
            .values()
            .flat_map(|implementation| implementation.parameters.keys().cloned())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.implementations.is_empty()
    }
}

/// Every collected record, keyed benchmark -> implementation -> parameter. Built once per run and
/// only read afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    pub benchmarks: BTreeMap<String, BenchmarkData>,
}

impl Dataset {
    /// Registers a benchmark directory, even if it ends up holding no records.
    pub fn add_benchmark(&mut self, benchmark: &str) -> &mut BenchmarkData {
        self.benchmarks.entry(benchmark.to_string()).or_default()
    }

    /// Stores a record, replacing any previous record at the same path.
    pub fn insert(
        &mut self,
        benchmark: &str,
        implementation: &str,
        parameter: &str,
        record: EstimateRecord,
    ) {
        self.add_benchmark(benchmark)
            .add_implementation(implementation)
            .parameters
            .insert(parameter.to_string(), record);
    }

    pub fn is_empty(&self) -> bool {
        self.benchmarks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.benchmarks.len()
    }
}
