use chrono::NaiveDate;
use serde::Deserialize;

use crate::core::wire::{opt_f64, req_date, req_f64, text};

#[derive(Deserialize)]
pub(crate) struct VixRow {
    #[serde(rename = "EOD_TIMESTAMP", deserialize_with = "req_date")]
    pub(crate) date: NaiveDate,
    #[serde(rename = "EOD_INDEX_NAME", default, deserialize_with = "text")]
    pub(crate) index_name: String,
    #[serde(rename = "EOD_OPEN_INDEX_VAL", deserialize_with = "req_f64")]
    pub(crate) open: f64,
    #[serde(rename = "EOD_HIGH_INDEX_VAL", deserialize_with = "req_f64")]
    pub(crate) high: f64,
    #[serde(rename = "EOD_LOW_INDEX_VAL", deserialize_with = "req_f64")]
    pub(crate) low: f64,
    #[serde(rename = "EOD_CLOSE_INDEX_VAL", deserialize_with = "req_f64")]
    pub(crate) close: f64,
    #[serde(rename = "EOD_PREV_CLOSE", default, deserialize_with = "opt_f64")]
    pub(crate) prev_close: Option<f64>,
    #[serde(rename = "VIX_PTS_CHG", default, deserialize_with = "opt_f64")]
    pub(crate) change: Option<f64>,
    #[serde(rename = "VIX_PERC_CHG", default, deserialize_with = "opt_f64")]
    pub(crate) percent_change: Option<f64>,
}
