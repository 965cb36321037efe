use chrono::NaiveDate;
use nse_rs::ErrorKind;

use crate::common;

fn all_indices_body() -> String {
    common::fixture("all_indices", "all", "json")
}

#[tokio::test]
async fn all_index_quotes_maps_snapshot() {
    let server = common::setup_server();
    let mock = common::mock_json(&server, "/api/allIndices", &all_indices_body());
    let client = common::client_for(&server);

    let snap = nse_rs::all_index_quotes(&client).await.unwrap();
    mock.assert();

    assert_eq!(snap.timestamp, "17-Oct-2025 15:30");
    assert_eq!(snap.quotes.len(), 2);

    let nifty = &snap.quotes[0];
    assert_eq!(nifty.index_name, "NIFTY 50");
    assert_eq!(nifty.date, NaiveDate::from_ymd_opt(2025, 10, 17).unwrap());
    assert_eq!(nifty.ltp, 25709.85);
    assert_eq!(nifty.prev_close, 25585.3);
    assert_eq!(nifty.pe, Some(22.53));
    assert_eq!(nifty.one_week_ago_date, NaiveDate::from_ymd_opt(2025, 10, 10));
    // (25709.85 - 25285.35) / 25285.35 * 100 = 1.6788...
    assert_eq!(nifty.one_week_ago_percent_change, Some(1.68));
    assert_eq!(nifty.month_ago_percent_change, Some(1.5));
    assert_eq!(nifty.year_ago_val, Some(0.0));
    assert_eq!(nifty.year_ago_percent_change, Some(0.0));

    let it = &snap.quotes[1];
    assert_eq!(it.ltp, 35000.10);
    assert_eq!(it.change, -10.0);
    assert_eq!(it.pe, None);
    assert_eq!(it.pb, None);
    assert_eq!(it.one_week_ago_percent_change, None);
}

#[tokio::test]
async fn all_index_quotes_serializes_look_back_keys() {
    let server = common::setup_server();
    common::mock_json(&server, "/api/allIndices", &all_indices_body());
    let client = common::client_for(&server);

    let snap = nse_rs::all_index_quotes(&client).await.unwrap();
    let json = serde_json::to_value(&snap).unwrap();

    let first = &json["indexQuote"][0];
    assert_eq!(first["date"], "2025-10-17");
    assert_eq!(first["30dAgoDate"], "2025-09-17");
    assert_eq!(first["365dAgoDate"], "2024-10-17");
    assert_eq!(first["oneWeekAgoDate"], "2025-10-10");
}

#[tokio::test]
async fn missing_required_quote_field_fails_closed() {
    let server = common::setup_server();
    common::mock_json(
        &server,
        "/api/allIndices",
        r#"{"data": [{"index": "NIFTY 50", "last": "n/a", "open": 1, "high": 1, "low": 1,
             "previousClose": 1, "variation": 0, "percentChange": 0}],
            "timestamp": "17-Oct-2025 15:30"}"#,
    );
    let client = common::client_for(&server);

    let err = nse_rs::all_index_quotes(&client).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Request, "got {err:?}");
}
