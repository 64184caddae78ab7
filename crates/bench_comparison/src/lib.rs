//! Aggregates Criterion estimates of competing implementations into comparison tables, ratios to
//! a baseline implementation and an overall win summary.

pub mod collector;
pub mod comparison;
pub mod config;
pub mod errors;
pub mod report;
pub mod runner;
pub mod summary;
#[cfg(test)]
pub mod test_utils;
pub mod types;
