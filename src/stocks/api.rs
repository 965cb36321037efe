use crate::core::{NseClient, NseError, SecurityFlags, net};

use super::model::{ListedStock, StockDetails};
use super::wire::{EquityCsvRow, EquityNode, SymbolDataEnvelope};

const EQUITY_LIST_PATH: &str = "content/equities/EQUITY_L.csv";
const QUOTE_API_PATH: &str = "api/NextApi/apiClient/GetQuoteApi";

/* ---------------- full listing ---------------- */

pub(super) fn parse_equity_csv(body: &str) -> Result<Vec<ListedStock>, NseError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut out = Vec::new();
    for row in reader.deserialize::<EquityCsvRow>() {
        let row = row?;
        if row.symbol.is_empty() {
            continue;
        }
        out.push(ListedStock {
            symbol: row.symbol,
            company_name: row.company_name,
            series: row.series,
            isin: row.isin,
            listing_date: row.listing_date,
            face_value: row.face_value,
        });
    }
    Ok(out)
}

pub(super) async fn fetch_stocks_list(client: &NseClient) -> Result<Vec<ListedStock>, NseError> {
    let url = client.archive_url(EQUITY_LIST_PATH)?;
    let body = net::get_archive_text(client, url, "equity_list", "all", "csv").await?;
    parse_equity_csv(&body)
}

/* ---------------- details ---------------- */

pub(super) fn map_details(symbol: &str, node: EquityNode, flags: SecurityFlags) -> StockDetails {
    let meta = node.meta_data.unwrap_or_default();
    let trade = node.trade_info.unwrap_or_default();
    let sec = node.sec_info.unwrap_or_default();

    StockDetails {
        symbol: if meta.symbol.is_empty() {
            symbol.to_string()
        } else {
            meta.symbol
        },
        company_name: meta.company_name,
        series: meta.series,
        listing_date: sec.listing_date,
        isin: meta.isin_code,
        face_value: trade.face_value,
        market_cap: trade.total_market_cap,
        sec_status: sec.sec_status,
        industry: sec.basic_industry,
        sector: sec.sector,
        sector_pe: sec.pd_sector_pe,
        industry_info: sec.industry_info,
        macro_category: sec.macro_category,
        trading_segment: sec.trading_segment,
        flags,
    }
}

async fn fetch_flags(client: &NseClient, symbol: &str) -> Result<SecurityFlags, NseError> {
    let mut url = client.api_url(QUOTE_API_PATH)?;
    url.query_pairs_mut()
        .append_pair("functionName", "getMetaData")
        .append_pair("symbol", symbol);
    net::get_json(client, url, "stock_meta", symbol).await
}

pub(super) async fn fetch_stock_details(
    client: &NseClient,
    symbol: &str,
) -> Result<StockDetails, NseError> {
    let mut url = client.api_url(QUOTE_API_PATH)?;
    url.query_pairs_mut()
        .append_pair("functionName", "getSymbolData")
        .append_pair("marketType", "N")
        .append_pair("series", "EQ")
        .append_pair("symbol", symbol);

    let env: SymbolDataEnvelope =
        net::get_json(client, url.clone(), "stock_symbol_data", symbol).await?;
    let node = env
        .equity_response
        .and_then(|v| v.into_iter().next())
        .ok_or_else(|| NseError::provider(&url, format!("unknown symbol '{symbol}'")))?;

    // The flags live behind a second call; any failure there leaves them unset.
    let flags = fetch_flags(client, symbol).await.unwrap_or_else(|_e| {
        #[cfg(feature = "tracing")]
        tracing::warn!(error = %_e, symbol, "metadata unavailable; flags default to false");
        SecurityFlags::default()
    });

    Ok(map_details(symbol, node, flags))
}
