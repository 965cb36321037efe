use chrono::NaiveDate;
use serde::Serialize;

/// One day of India VIX history.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VixHistoricalBar {
    pub index_name: String,
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub prev_close: Option<f64>,
    /// Change in points from the previous close, as reported by the provider.
    pub change: Option<f64>,
    /// Percent change from the previous close, as reported by the provider.
    pub percent_change: Option<f64>,
}
