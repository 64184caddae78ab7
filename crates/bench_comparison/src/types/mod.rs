pub mod dataset;
pub mod estimates;
