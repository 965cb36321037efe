use chrono::NaiveDate;
use serde::Deserialize;

use crate::core::wire::{opt_date, opt_f64, req_f64, text};

#[derive(Deserialize)]
pub(crate) struct EtfEnvelope {
    #[serde(default)]
    pub(crate) data: Option<Vec<EtfNode>>,
}

#[derive(Deserialize)]
pub(crate) struct EtfNode {
    #[serde(deserialize_with = "text")]
    pub(crate) symbol: String,
    #[serde(default, deserialize_with = "text")]
    pub(crate) assets: String,
    #[serde(rename = "ltP", deserialize_with = "req_f64")]
    pub(crate) ltp: f64,
    #[serde(default, rename = "chn", deserialize_with = "opt_f64")]
    pub(crate) change: Option<f64>,
    #[serde(default, rename = "per", deserialize_with = "opt_f64")]
    pub(crate) percent_change: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub(crate) nav: Option<f64>,
    #[serde(default)]
    pub(crate) meta: Option<EtfMeta>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EtfMeta {
    #[serde(default, deserialize_with = "text")]
    pub(crate) company_name: String,
    #[serde(default, deserialize_with = "text")]
    pub(crate) isin: String,
    #[serde(default, deserialize_with = "opt_date")]
    pub(crate) listing_date: Option<NaiveDate>,
}
