use chrono::NaiveDate;
use serde::Serialize;

/// Open/closed status of the Capital Market segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketStatus {
    /// Short status, e.g. `"Open"` or `"Closed"`.
    pub market_status: String,
    /// The provider's longer message, e.g. `"Normal Market is Open"`.
    pub market_status_message: String,
}

/// Status of one market segment, as listed by the provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketState {
    /// Segment name, e.g. `"Capital Market"`, `"Currency"`.
    pub market: String,
    /// Short status, e.g. `"Open"`.
    pub market_status: String,
    /// The provider's longer message.
    pub market_status_message: String,
    /// Trading date the status refers to.
    pub trade_date: Option<NaiveDate>,
    /// Benchmark index shown for the segment, if any.
    pub index: String,
    /// Last value of the benchmark.
    pub last: Option<f64>,
    /// Absolute change of the benchmark.
    pub variation: Option<f64>,
    /// Percent change of the benchmark.
    pub percent_change: Option<f64>,
}
