use chrono::NaiveDate;
use serde::Deserialize;

use crate::core::SecurityFlags;
use crate::core::wire::{opt_date, opt_f64, opt_u64, req_date, req_f64, text};

/* ---------------- allIndices ---------------- */

#[derive(Deserialize)]
pub(crate) struct AllIndicesEnvelope {
    #[serde(default)]
    pub(crate) data: Option<Vec<IndexQuoteNode>>,
    #[serde(default, deserialize_with = "text")]
    pub(crate) timestamp: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IndexQuoteNode {
    #[serde(deserialize_with = "text")]
    pub(crate) index: String,
    #[serde(deserialize_with = "req_f64")]
    pub(crate) last: f64,
    #[serde(deserialize_with = "req_f64")]
    pub(crate) open: f64,
    #[serde(deserialize_with = "req_f64")]
    pub(crate) high: f64,
    #[serde(deserialize_with = "req_f64")]
    pub(crate) low: f64,
    #[serde(deserialize_with = "req_f64")]
    pub(crate) previous_close: f64,
    #[serde(deserialize_with = "req_f64")]
    pub(crate) variation: f64,
    #[serde(deserialize_with = "req_f64")]
    pub(crate) percent_change: f64,
    #[serde(default, deserialize_with = "opt_f64")]
    pub(crate) pe: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub(crate) pb: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub(crate) dy: Option<f64>,

    #[serde(default, deserialize_with = "opt_date")]
    pub(crate) one_week_ago: Option<NaiveDate>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub(crate) one_week_ago_val: Option<f64>,

    #[serde(default, rename = "date30dAgo", deserialize_with = "opt_date")]
    pub(crate) date_30d_ago: Option<NaiveDate>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub(crate) one_month_ago_val: Option<f64>,
    #[serde(default, rename = "perChange30d", deserialize_with = "opt_f64")]
    pub(crate) per_change_30d: Option<f64>,

    #[serde(default, rename = "date365dAgo", deserialize_with = "opt_date")]
    pub(crate) date_365d_ago: Option<NaiveDate>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub(crate) one_year_ago_val: Option<f64>,
    #[serde(default, rename = "perChange365d", deserialize_with = "opt_f64")]
    pub(crate) per_change_365d: Option<f64>,
}

/* ---------------- equity-stockIndices ---------------- */

#[derive(Deserialize)]
pub(crate) struct StockIndicesEnvelope {
    #[serde(default, deserialize_with = "text")]
    pub(crate) name: String,
    #[serde(default, deserialize_with = "text")]
    pub(crate) timestamp: String,
    #[serde(default)]
    pub(crate) data: Option<Vec<ConstituentNode>>,
}

#[derive(Deserialize)]
pub(crate) struct ConstituentNode {
    #[serde(default, deserialize_with = "text")]
    pub(crate) symbol: String,
    #[serde(default)]
    pub(crate) meta: Option<ConstituentMeta>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ConstituentMeta {
    #[serde(default, deserialize_with = "text")]
    pub(crate) symbol: String,
    #[serde(default, deserialize_with = "text")]
    pub(crate) company_name: String,
    #[serde(default, deserialize_with = "text")]
    pub(crate) industry: String,
    #[serde(default, deserialize_with = "text")]
    pub(crate) segment: String,
    #[serde(default, deserialize_with = "opt_date")]
    pub(crate) listing_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "text")]
    pub(crate) isin: String,
    #[serde(default, rename = "slb_isin", deserialize_with = "text")]
    pub(crate) slb_isin: String,
    #[serde(flatten)]
    pub(crate) flags: SecurityFlags,
}

/* ---------------- historicalOR ---------------- */

#[derive(Deserialize)]
pub(crate) struct IndexPriceRow {
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
    #[serde(rename = "HIT_TRADED_QTY", default, deserialize_with = "opt_u64")]
    pub(crate) volume: Option<u64>,
}

#[derive(Deserialize)]
pub(crate) struct IndexYieldRow {
    #[serde(rename = "IY_DT", deserialize_with = "req_date")]
    pub(crate) date: NaiveDate,
    #[serde(rename = "IY_PE", default, deserialize_with = "opt_f64")]
    pub(crate) pe: Option<f64>,
    #[serde(rename = "IY_PB", default, deserialize_with = "opt_f64")]
    pub(crate) pb: Option<f64>,
    #[serde(rename = "IY_DY", default, deserialize_with = "opt_f64")]
    pub(crate) div_yield: Option<f64>,
}
