use serde::Deserialize;

use crate::core::wire::{opt_date, opt_f64, text};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MarketStatusEnvelope {
    #[serde(default)]
    pub(crate) market_state: Vec<MarketStateNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MarketStateNode {
    #[serde(default, deserialize_with = "text")]
    pub(crate) market: String,
    #[serde(default, deserialize_with = "text")]
    pub(crate) market_status: String,
    #[serde(default, deserialize_with = "text")]
    pub(crate) market_status_message: String,
    #[serde(default, deserialize_with = "opt_date")]
    pub(crate) trade_date: Option<chrono::NaiveDate>,
    #[serde(default, deserialize_with = "text")]
    pub(crate) index: String,
    #[serde(default, deserialize_with = "opt_f64")]
    pub(crate) last: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub(crate) variation: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub(crate) percent_change: Option<f64>,
}
