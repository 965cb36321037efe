use chrono::NaiveDate;
use serde::Serialize;

/// A commodity with its reference spot rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Commodity {
    /// Commodity code, e.g. `"GOLD"`.
    pub symbol: String,
    /// Quotation unit, e.g. `"1 Grams"`.
    pub unit: String,
    pub spot_price: f64,
    pub previous_spot_price: Option<f64>,
    /// Date the rate was published.
    pub date: Option<NaiveDate>,
}
