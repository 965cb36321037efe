//! Live smoke tests against the real site.
//!
//! `NSE_LIVE=1 cargo test --test record_live -- --ignored` checks the live endpoints.
//! `NSE_RECORD=1 cargo test --features test-mode --test record_live -- --ignored`
//! also rewrites `tests/fixtures/`, which the offline tests read.

mod common;

use nse_rs::NseClient;

fn live_client() -> NseClient {
    NseClient::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .unwrap()
}

#[tokio::test]
#[ignore]
async fn live_market_and_indices() {
    if !common::live_or_record_enabled() {
        return;
    }
    let client = live_client();

    // market_status_all.json, index_master_all.json, all_indices_all.json
    let status = nse_rs::market_status(&client).await.unwrap();
    let list = nse_rs::index_list(&client).await.unwrap();
    let quotes = nse_rs::all_index_quotes(&client).await.unwrap();

    // index_stocks_NIFTY_50.json, index_history_NIFTY_50.json, index_yield_NIFTY_50.json
    let stocks = nse_rs::index_stocks(&client, "NIFTY 50").await.unwrap();
    let bars = nse_rs::index_historical_data(&client, "NIFTY 50", "2025-01-01", Some("2025-01-03"))
        .await
        .unwrap();

    if !common::is_recording() {
        assert!(!status.market_status.is_empty());
        assert!(list.iter().any(|d| d.index_name == "NIFTY 50"));
        assert!(!quotes.quotes.is_empty());
        assert_eq!(stocks.stocks.len(), 50);
        assert!(!bars.is_empty());
    }
}

#[tokio::test]
#[ignore]
async fn live_equities_etfs_commodities_and_vix() {
    if !common::live_or_record_enabled() {
        return;
    }
    let client = live_client();

    // equity_list_all.csv, stock_symbol_data_TCS.json, stock_meta_TCS.json
    let listed = nse_rs::stocks_list(&client).await.unwrap();
    let tcs = nse_rs::stock_details(&client, "TCS").await.unwrap();

    // etf_all.json, commodity_spot_all.json, vix_history_vix.json
    let etfs = nse_rs::etf_list(&client).await.unwrap();
    let commodities = nse_rs::commodity_list(&client).await.unwrap();
    let vix = nse_rs::vix_historical_data(&client, "2025-01-01", Some("2025-01-03"))
        .await
        .unwrap();

    if !common::is_recording() {
        assert!(listed.iter().any(|s| s.symbol == "TCS"));
        assert_eq!(tcs.isin, "INE467B01029");
        assert!(!etfs.is_empty());
        assert!(!commodities.is_empty());
        assert!(!vix.is_empty());
    }
}
