use crate::types::dataset::{BenchmarkData, Dataset};
use crate::types::estimates::{EstimateRecord, MeanInterval};

impl EstimateRecord {
    /// A record with the given mean, and every other statistic collapsed onto it.
    pub fn from_mean(mean: f64) -> Self {
        Self {
            mean,
            median: mean,
            std_dev: 0.0,
            confidence_interval: MeanInterval { lower: mean, upper: mean },
        }
    }
}

impl Dataset {
    pub fn benchmark(&self, benchmark: &str) -> Option<&BenchmarkData> {
        self.benchmarks.get(benchmark)
    }

    pub fn record(
        &self,
        benchmark: &str,
        implementation: &str,
        parameter: &str,
    ) -> Option<&EstimateRecord> {
        self.benchmark(benchmark)?.record(implementation, parameter)
    }

    /// Benchmark names in sorted order.
    pub fn benchmark_names(&self) -> impl Iterator<Item = &str> {
        self.benchmarks.keys().map(String::as_str)
    }
}
