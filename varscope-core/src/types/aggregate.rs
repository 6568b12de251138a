use serde::{Deserialize, Serialize};

/// Per display name statistics, all expressed in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub name: String,
    /// 100 x sum of point-estimate fractions
    pub total_percent: f64,
    /// 100 x sum of bootstrap medians
    pub median_percent: f64,
    /// 100 x root-sum-square of the per-column interquartile widths
    pub spread_percent: f64,
}

impl AggregateResult {
    pub fn is_finite(&self) -> bool {
        self.total_percent.is_finite()
            && self.median_percent.is_finite()
            && self.spread_percent.is_finite()
    }
}
