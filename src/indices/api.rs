use std::collections::{BTreeMap, HashSet};

use serde_json::{Map, Value};

use crate::core::{
    DateRange, NseClient, NseError, dates::normalize_provider_date, historical, net,
};

use super::model::{
    ConstituentStock, IndexConstituents, IndexDescriptor, IndexHistoricalBar, IndexQuote,
    IndexQuoteSnapshot,
};
use super::wire::{
    AllIndicesEnvelope, IndexPriceRow, IndexQuoteNode, IndexYieldRow, StockIndicesEnvelope,
};

const INDEX_MASTER_PATH: &str = "api/equity-masterOR";
const ALL_INDICES_PATH: &str = "api/allIndices";
const INDEX_STOCKS_PATH: &str = "api/equity-stockIndices";
const INDEX_HISTORY_PATH: &str = "api/historicalOR/indicesHistory";
const INDEX_YIELD_PATH: &str = "api/historicalOR/indicesYield";

const DERIVATIVES_CATEGORY: &str = "Indices Eligible in Derivatives";
const SKIPPED_CATEGORIES: &[&str] = &["Others"];
const BROAD_MARKET: &str = "Broad Market Indices";
const SECTORAL: &str = "Sectoral Indices";
/// Derivatives-eligible indices that are sectoral rather than broad-market.
const SECTORAL_OVERRIDE: &[&str] = &["NIFTY BANK", "NIFTY FIN SERVICE"];

/* ---------------- index list ---------------- */

fn names(v: &Value) -> impl Iterator<Item = &str> {
    v.as_array()
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

pub(super) fn map_index_master(master: &Map<String, Value>) -> Vec<IndexDescriptor> {
    let eligible: HashSet<&str> = master
        .get(DERIVATIVES_CATEGORY)
        .map(|v| names(v).collect())
        .unwrap_or_default();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();

    for (category, list) in master {
        if SKIPPED_CATEGORIES.contains(&category.as_str()) {
            continue;
        }
        let is_derivatives = category == DERIVATIVES_CATEGORY;
        for name in names(list) {
            if !seen.insert(name) {
                continue;
            }
            let sub_type = if !is_derivatives {
                category.clone()
            } else if SECTORAL_OVERRIDE.contains(&name) {
                SECTORAL.to_string()
            } else {
                BROAD_MARKET.to_string()
            };
            out.push(IndexDescriptor {
                index_name: name.to_string(),
                sub_type,
                derivatives_eligibility: is_derivatives || eligible.contains(name),
            });
        }
    }
    out
}

pub(super) async fn fetch_index_list(client: &NseClient) -> Result<Vec<IndexDescriptor>, NseError> {
    let url = client.api_url(INDEX_MASTER_PATH)?;
    let master: Map<String, Value> = net::get_json(client, url, "index_master", "all").await?;
    Ok(map_index_master(&master))
}

/* ---------------- all index quotes ---------------- */

/// `((current - past) / past) * 100`, rounded to two decimals; `0` when `past` is zero.
pub(super) fn percent_change(current: f64, past: f64) -> f64 {
    if past == 0.0 {
        return 0.0;
    }
    (((current - past) / past) * 100.0 * 100.0).round() / 100.0
}

fn look_back(ltp: f64, past: Option<f64>, supplied: Option<f64>) -> Option<f64> {
    supplied.or_else(|| past.map(|p| percent_change(ltp, p)))
}

fn map_quote(n: IndexQuoteNode, date: chrono::NaiveDate) -> IndexQuote {
    IndexQuote {
        index_name: n.index,
        date,
        open: n.open,
        high: n.high,
        low: n.low,
        ltp: n.last,
        prev_close: n.previous_close,
        change: n.variation,
        percent_change: n.percent_change,
        pe: n.pe,
        pb: n.pb,
        dy: n.dy,
        one_week_ago_date: n.one_week_ago,
        one_week_ago_val: n.one_week_ago_val,
        one_week_ago_percent_change: look_back(n.last, n.one_week_ago_val, None),
        month_ago_date: n.date_30d_ago,
        month_ago_val: n.one_month_ago_val,
        month_ago_percent_change: look_back(n.last, n.one_month_ago_val, n.per_change_30d),
        year_ago_date: n.date_365d_ago,
        year_ago_val: n.one_year_ago_val,
        year_ago_percent_change: look_back(n.last, n.one_year_ago_val, n.per_change_365d),
    }
}

pub(super) fn map_all_indices(env: AllIndicesEnvelope) -> Result<IndexQuoteSnapshot, NseError> {
    let nodes = env.data.unwrap_or_default();
    if nodes.is_empty() {
        return Ok(IndexQuoteSnapshot {
            timestamp: env.timestamp,
            quotes: Vec::new(),
        });
    }

    let date = normalize_provider_date(&env.timestamp).ok_or_else(|| {
        NseError::Data(format!("allIndices timestamp '{}' is not a date", env.timestamp))
    })?;

    Ok(IndexQuoteSnapshot {
        timestamp: env.timestamp,
        quotes: nodes.into_iter().map(|n| map_quote(n, date)).collect(),
    })
}

pub(super) async fn fetch_all_index_quotes(
    client: &NseClient,
) -> Result<IndexQuoteSnapshot, NseError> {
    let url = client.api_url(ALL_INDICES_PATH)?;
    let env: AllIndicesEnvelope = net::get_json(client, url, "all_indices", "all").await?;
    map_all_indices(env)
}

/* ---------------- index constituents ---------------- */

pub(super) async fn fetch_index_stocks(
    client: &NseClient,
    index: &str,
) -> Result<IndexConstituents, NseError> {
    let mut url = client.api_url(INDEX_STOCKS_PATH)?;
    url.query_pairs_mut().append_pair("index", index);

    let env: StockIndicesEnvelope =
        net::get_json(client, url.clone(), "index_stocks", index).await?;

    let index_name = if env.name.is_empty() {
        index.to_string()
    } else {
        env.name
    };

    // The first row summarises the index itself and carries the index name as its symbol.
    let stocks: Vec<ConstituentStock> = env
        .data
        .unwrap_or_default()
        .into_iter()
        .filter(|row| row.symbol != index_name)
        .filter_map(|row| row.meta)
        .map(|m| ConstituentStock {
            symbol: m.symbol,
            company_name: m.company_name,
            industry: m.industry,
            segment: m.segment,
            listing_date: m.listing_date,
            isin: m.isin,
            slb_isin: m.slb_isin,
            flags: m.flags,
        })
        .collect();

    // An index always has constituents; none at all means the provider did not recognise it.
    if stocks.is_empty() {
        return Err(NseError::provider(&url, format!("unknown index '{index}'")));
    }

    Ok(IndexConstituents {
        index_name,
        date: normalize_provider_date(&env.timestamp),
        stocks,
    })
}

/* ---------------- index history ---------------- */

pub(super) fn merge_history(
    range: DateRange,
    prices: Vec<IndexPriceRow>,
    yields: Vec<IndexYieldRow>,
    fallback_name: &str,
) -> Vec<IndexHistoricalBar> {
    let yields: BTreeMap<_, _> = yields.into_iter().map(|y| (y.date, y)).collect();
    let prices: BTreeMap<_, _> = prices
        .into_iter()
        .filter(|p| range.contains(p.date))
        .map(|p| (p.date, p))
        .collect();

    prices
        .into_values()
        .map(|p| {
            let y = yields.get(&p.date);
            IndexHistoricalBar {
                index_name: if p.index_name.is_empty() {
                    fallback_name.to_string()
                } else {
                    p.index_name
                },
                date: p.date,
                open: p.open,
                high: p.high,
                low: p.low,
                close: p.close,
                volume: p.volume,
                pe: y.and_then(|y| y.pe),
                pb: y.and_then(|y| y.pb),
                div_yield: y.and_then(|y| y.div_yield),
            }
        })
        .collect()
}

pub(super) async fn fetch_index_history(
    client: &NseClient,
    index: &str,
    range: DateRange,
    with_valuation: bool,
) -> Result<Vec<IndexHistoricalBar>, NseError> {
    let params = [("indexType", index)];

    let prices: Vec<IndexPriceRow> = historical::fetch_windowed_rows(
        client,
        INDEX_HISTORY_PATH,
        &params,
        range,
        "index_history",
        index,
    )
    .await?;

    let yields: Vec<IndexYieldRow> = if with_valuation && !prices.is_empty() {
        historical::fetch_windowed_rows(
            client,
            INDEX_YIELD_PATH,
            &params,
            range,
            "index_yield",
            index,
        )
        .await?
    } else {
        Vec::new()
    };

    Ok(merge_history(range, prices, yields, index))
}
