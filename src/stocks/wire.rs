use chrono::NaiveDate;
use serde::Deserialize;

use crate::core::wire::{opt_date, opt_f64, text};

/* ---------------- EQUITY_L.csv ---------------- */

/// One row of the archive listing. Headers are trimmed before matching.
#[derive(Deserialize)]
pub(crate) struct EquityCsvRow {
    #[serde(rename = "SYMBOL", default, deserialize_with = "text")]
    pub(crate) symbol: String,
    #[serde(rename = "NAME OF COMPANY", default, deserialize_with = "text")]
    pub(crate) company_name: String,
    #[serde(rename = "SERIES", default, deserialize_with = "text")]
    pub(crate) series: String,
    #[serde(rename = "DATE OF LISTING", default, deserialize_with = "opt_date")]
    pub(crate) listing_date: Option<NaiveDate>,
    #[serde(rename = "ISIN NUMBER", default, deserialize_with = "text")]
    pub(crate) isin: String,
    #[serde(rename = "FACE VALUE", default, deserialize_with = "opt_f64")]
    pub(crate) face_value: Option<f64>,
}

/* ---------------- GetQuoteApi?functionName=getSymbolData ---------------- */

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SymbolDataEnvelope {
    #[serde(default)]
    pub(crate) equity_response: Option<Vec<EquityNode>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EquityNode {
    #[serde(default)]
    pub(crate) meta_data: Option<EquityMeta>,
    #[serde(default)]
    pub(crate) trade_info: Option<TradeInfo>,
    #[serde(default)]
    pub(crate) sec_info: Option<SecInfo>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EquityMeta {
    #[serde(default, deserialize_with = "text")]
    pub(crate) symbol: String,
    #[serde(default, deserialize_with = "text")]
    pub(crate) company_name: String,
    #[serde(default, deserialize_with = "text")]
    pub(crate) series: String,
    #[serde(default, deserialize_with = "text")]
    pub(crate) isin_code: String,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TradeInfo {
    #[serde(default, deserialize_with = "opt_f64")]
    pub(crate) face_value: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub(crate) total_market_cap: Option<f64>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SecInfo {
    #[serde(default, deserialize_with = "opt_date")]
    pub(crate) listing_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "text")]
    pub(crate) sec_status: String,
    #[serde(default, deserialize_with = "text")]
    pub(crate) basic_industry: String,
    #[serde(default, deserialize_with = "text")]
    pub(crate) sector: String,
    #[serde(default, deserialize_with = "opt_f64")]
    pub(crate) pd_sector_pe: Option<f64>,
    #[serde(default, deserialize_with = "text")]
    pub(crate) industry_info: String,
    #[serde(default, rename = "macro", deserialize_with = "text")]
    pub(crate) macro_category: String,
    #[serde(default, deserialize_with = "text")]
    pub(crate) trading_segment: String,
}
