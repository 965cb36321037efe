use chrono::NaiveDate;
use serde::Serialize;

/// An exchange traded fund with its latest price.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Etf {
    pub symbol: String,
    /// The asset or index the fund tracks, e.g. `"NIFTY 50 Index"`.
    pub underlying: String,
    pub company_name: String,
    pub isin: String,
    pub listing_date: Option<NaiveDate>,
    /// Last traded price.
    pub ltp: f64,
    pub change: Option<f64>,
    pub percent_change: Option<f64>,
    /// Net asset value, when published.
    pub nav: Option<f64>,
}
