use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "estimates_test.rs"]
mod estimates_test;

/// Criterion benchmark estimates, as stored in `new/estimates.json`.
#[derive(Debug, Deserialize, Default)]
pub struct Estimates {
    pub mean: Stat,
    pub median: Stat,
    pub std_dev: Stat,
    #[serde(default)]
    pub median_abs_dev: Option<Stat>,
    #[serde(default)]
    pub slope: Option<Stat>,
}

/// Statistical estimate with an optional confidence interval.
#[derive(Debug, Deserialize, Default)]
pub struct Stat {
    pub point_estimate: f64,
    #[serde(default)]
    pub standard_error: f64,
    #[serde(default)]
    pub confidence_interval: Option<ConfidenceInterval>,
}

/// Confidence interval bounds.
#[derive(Debug, Deserialize, Default)]
pub struct ConfidenceInterval {
    #[serde(default)]
    pub confidence_level: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

/// Bounds of the confidence interval around the mean, in nanoseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct MeanInterval {
    pub lower: f64,
    pub upper: f64,
}

/// Statistical summary of one (benchmark, implementation, parameter) measurement. All values are
/// in nanoseconds and are taken as reported by Criterion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct EstimateRecord {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub confidence_interval: MeanInterval,
}

/// Returned when an estimates document lacks a field the record is built from.
#[derive(Debug, PartialEq)]
pub struct MissingField(pub &'static str);

impl TryFrom<Estimates> for EstimateRecord {
    type Error = MissingField;

    fn try_from(estimates: Estimates) -> Result<Self, Self::Error> {
        let interval =
            estimates.mean.confidence_interval.ok_or(MissingField("mean.confidence_interval"))?;
        Ok(Self {
            mean: estimates.mean.point_estimate,
            median: estimates.median.point_estimate,
            std_dev: estimates.std_dev.point_estimate,
            confidence_interval: MeanInterval {
                lower: interval.lower_bound,
                upper: interval.upper_bound,
            },
        })
    }
}
