use chrono::NaiveDate;
use serde::Deserialize;

use crate::core::wire::{opt_date, opt_f64, req_f64, text};

#[derive(Deserialize)]
pub(crate) struct SpotRatesEnvelope {
    #[serde(default)]
    pub(crate) data: Option<Vec<SpotRateNode>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SpotRateNode {
    #[serde(deserialize_with = "text")]
    pub(crate) symbol: String,
    #[serde(default, deserialize_with = "text")]
    pub(crate) unit: String,
    #[serde(rename = "spotPrice1", deserialize_with = "req_f64")]
    pub(crate) spot_price: f64,
    #[serde(default, rename = "spotPrice2", deserialize_with = "opt_f64")]
    pub(crate) previous_spot_price: Option<f64>,
    #[serde(default, deserialize_with = "opt_date")]
    pub(crate) last_updated: Option<NaiveDate>,
}
