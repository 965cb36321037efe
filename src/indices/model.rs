use chrono::NaiveDate;
use serde::Serialize;

use crate::core::SecurityFlags;

/// One entry of the index master list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexDescriptor {
    /// Index name as the provider spells it, e.g. `"NIFTY 50"`.
    pub index_name: String,
    /// Category, e.g. `"Broad Market Indices"`, `"Sectoral Indices"`.
    pub sub_type: String,
    /// Whether derivatives trade on the index.
    // The serialized key keeps the provider-documented spelling.
    #[serde(rename = "derivativesEligiblity")]
    pub derivatives_eligibility: bool,
}

/// Live quote of one index, with valuation and look-back comparisons.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexQuote {
    pub index_name: String,
    /// Trading date of the snapshot.
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    /// Last traded value.
    pub ltp: f64,
    pub prev_close: f64,
    /// Absolute change from the previous close.
    pub change: f64,
    pub percent_change: f64,
    pub pe: Option<f64>,
    pub pb: Option<f64>,
    /// Dividend yield.
    pub dy: Option<f64>,

    pub one_week_ago_date: Option<NaiveDate>,
    pub one_week_ago_val: Option<f64>,
    pub one_week_ago_percent_change: Option<f64>,

    #[serde(rename = "30dAgoDate")]
    pub month_ago_date: Option<NaiveDate>,
    #[serde(rename = "30dAgoVal")]
    pub month_ago_val: Option<f64>,
    #[serde(rename = "30dAgoPercentChange")]
    pub month_ago_percent_change: Option<f64>,

    #[serde(rename = "365dAgoDate")]
    pub year_ago_date: Option<NaiveDate>,
    #[serde(rename = "365dAgoVal")]
    pub year_ago_val: Option<f64>,
    #[serde(rename = "365dAgoPercentChange")]
    pub year_ago_percent_change: Option<f64>,
}

/// Quotes for every index at one provider timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexQuoteSnapshot {
    /// The provider's timestamp text, e.g. `"17-Oct-2025 15:30"`.
    pub timestamp: String,
    #[serde(rename = "indexQuote")]
    pub quotes: Vec<IndexQuote>,
}

/// One day of index history: OHLC plus valuation ratios when the provider has them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexHistoricalBar {
    pub index_name: String,
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: Option<u64>,
    #[serde(rename = "PE")]
    pub pe: Option<f64>,
    #[serde(rename = "PB")]
    pub pb: Option<f64>,
    pub div_yield: Option<f64>,
}

/// A stock that belongs to an index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstituentStock {
    pub symbol: String,
    pub company_name: String,
    pub industry: String,
    /// Market segment, e.g. `"EQUITY"`.
    pub segment: String,
    pub listing_date: Option<NaiveDate>,
    pub isin: String,
    #[serde(rename = "slb_isin")]
    pub slb_isin: String,
    #[serde(flatten)]
    pub flags: SecurityFlags,
}

/// The constituents of an index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexConstituents {
    pub index_name: String,
    /// Date of the provider's snapshot, when it carried one.
    pub date: Option<NaiveDate>,
    #[serde(rename = "stockList")]
    pub stocks: Vec<ConstituentStock>,
}
