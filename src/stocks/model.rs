use chrono::NaiveDate;
use serde::Serialize;

use crate::core::SecurityFlags;

/// One equity from the exchange's full listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListedStock {
    pub symbol: String,
    pub company_name: String,
    /// Trading series, e.g. `"EQ"`, `"BE"`, `"BZ"`.
    pub series: String,
    pub isin: String,
    pub listing_date: Option<NaiveDate>,
    pub face_value: Option<f64>,
}

/// Company, classification and trading details for one equity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockDetails {
    pub symbol: String,
    pub company_name: String,
    pub series: String,
    pub listing_date: Option<NaiveDate>,
    pub isin: String,
    pub face_value: Option<f64>,
    /// Total market capitalisation.
    pub market_cap: Option<f64>,
    /// Security status, e.g. `"Listed"`.
    pub sec_status: String,
    /// Basic industry classification.
    pub industry: String,
    pub sector: String,
    /// PE ratio of the sector.
    pub sector_pe: Option<f64>,
    pub industry_info: String,
    /// Macro-economic sector.
    #[serde(rename = "macro")]
    pub macro_category: String,
    pub trading_segment: String,
    #[serde(flatten)]
    pub flags: SecurityFlags,
}
