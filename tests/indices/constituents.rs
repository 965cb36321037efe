use chrono::NaiveDate;
use httpmock::Method::GET;
use nse_rs::{ErrorKind, NseError};

use crate::common;

#[tokio::test]
async fn index_stocks_skips_summary_row() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/equity-stockIndices")
            .query_param_exists("index");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("index_stocks", "NIFTY 50", "json"));
    });
    let client = common::client_for(&server);

    let list = nse_rs::index_stocks(&client, "NIFTY 50").await.unwrap();
    mock.assert();

    assert_eq!(list.index_name, "NIFTY 50");
    assert_eq!(list.date, NaiveDate::from_ymd_opt(2025, 10, 17));
    assert_eq!(list.stocks.len(), 2);

    let rel = &list.stocks[0];
    assert_eq!(rel.symbol, "RELIANCE");
    assert_eq!(rel.listing_date, NaiveDate::from_ymd_opt(1995, 11, 29));
    assert!(rel.flags.is_fno_sec);
    assert!(rel.flags.is_slb_sec);
    assert!(!rel.flags.is_suspended);

    let tcs = &list.stocks[1];
    assert_eq!(tcs.segment, "");
    assert!(!tcs.flags.is_fno_sec);

    let json = serde_json::to_value(&list).unwrap();
    assert_eq!(json["stockList"][0]["isFNOSec"], true);
    assert_eq!(json["stockList"][0]["slb_isin"], "INE002A01018");
}

#[tokio::test]
async fn unknown_index_is_a_provider_error() {
    let server = common::setup_server();
    common::mock_json(&server, "/api/equity-stockIndices", "{}");
    let client = common::client_for(&server);

    let err = nse_rs::index_stocks(&client, "NOT_AN_INDEX").await.unwrap_err();
    assert!(matches!(err, NseError::Provider { .. }), "got {err:?}");
    assert_eq!(err.kind(), ErrorKind::Provider);
}

#[tokio::test]
async fn echoed_name_without_constituents_is_a_provider_error() {
    let server = common::setup_server();
    let client = common::client_for(&server);

    for body in [
        r#"{"name": "NOT_AN_INDEX", "timestamp": "17-Oct-2025 16:00:00", "data": []}"#,
        r#"{"name": "NOT_AN_INDEX", "data": null}"#,
        r#"{"name": "NOT_AN_INDEX", "data": [{"priority": 1, "symbol": "NOT_AN_INDEX"}]}"#,
    ] {
        let mut mock = common::mock_json(&server, "/api/equity-stockIndices", body);

        let err = nse_rs::index_stocks(&client, "NOT_AN_INDEX").await.unwrap_err();
        assert!(matches!(err, NseError::Provider { .. }), "{body}: got {err:?}");

        mock.assert();
        mock.delete();
    }
}

#[tokio::test]
async fn not_found_is_a_provider_error() {
    let server = common::setup_server();
    common::mock_status(&server, "/api/equity-stockIndices", 404);
    let client = common::client_for(&server);

    let err = nse_rs::index_stocks(&client, "NOT_AN_INDEX").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Provider, "got {err:?}");
}

#[tokio::test]
async fn empty_index_name_sends_nothing() {
    let server = common::setup_server();
    let mock = common::mock_json(&server, "/api/equity-stockIndices", "{}");
    let client = common::client_for(&server);

    let err = nse_rs::index_stocks(&client, "").await.unwrap_err();
    assert!(matches!(err, NseError::InvalidArgument(_)), "got {err:?}");
    mock.assert_hits(0);
}
