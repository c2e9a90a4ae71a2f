//! JSON output records.
//!
//! Undefined statistics are NaN in memory; `serde_json` writes them as `null`.

use corrkit_stats::{correlation::CorrelationMethod, summary::Summary};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub missing: usize,
    pub sum: f64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
    pub std_dev: f64,
    pub first_quartile: f64,
    pub third_quartile: f64,
    pub min_regular: f64,
    pub max_regular: f64,
    pub percentiles: Vec<PercentileValue>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PercentileValue {
    pub percentile: f64,
    pub value: f64,
}

impl ColumnSummary {
    pub fn new(column: &str, summary: &Summary) -> Self {
        let stats = &summary.stats;
        Self {
            column: column.to_owned(),
            count: stats.count,
            missing: stats.missing,
            sum: stats.sum,
            mean: stats.mean,
            min: stats.min,
            max: stats.max,
            median: stats.median,
            std_dev: stats.std_dev,
            first_quartile: summary.quartiles.0,
            third_quartile: summary.quartiles.1,
            min_regular: summary.regular_range.0,
            max_regular: summary.regular_range.1,
            percentiles: summary
                .percentiles
                .iter()
                .map(|(percentile, value)| PercentileValue { percentile, value })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CorrelationResult {
    pub x: String,
    pub y: String,
    pub method: String,
    /// `None` when the coefficient is undefined; see `error`.
    pub value: Option<f64>,
    pub error: Option<String>,
}

impl CorrelationResult {
    pub fn compute(
        x_name: &str,
        x: &[f64],
        y_name: &str,
        y: &[f64],
        method: CorrelationMethod,
    ) -> Self {
        let (value, error) = match method.try_compute(x, y) {
            Ok(value) => (Some(value), None),
            Err(err) => (None, Some(err.to_string())),
        };
        Self {
            x: x_name.to_owned(),
            y: y_name.to_owned(),
            method: method.to_string(),
            value,
            error,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedColumn {
    pub column: String,
    pub values: Vec<f64>,
    pub ranks: Vec<f64>,
}
