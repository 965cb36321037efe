use chrono::NaiveDate;
use httpmock::Method::GET;
use nse_rs::{ErrorKind, IndexHistoryBuilder, NseError};

use crate::common;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn prices_body() -> String {
    common::fixture("index_history", "NIFTY 50", "json")
}

fn yields_body() -> String {
    common::fixture("index_yield", "NIFTY 50", "json")
}

#[tokio::test]
async fn index_history_is_ascending_in_range_and_deduped() {
    let server = common::setup_server();
    let prices = server.mock(|when, then| {
        when.method(GET)
            .path("/api/historicalOR/indicesHistory")
            .query_param_exists("indexType")
            .query_param("from", "01-01-2025")
            .query_param("to", "03-01-2025");
        then.status(200)
            .header("content-type", "application/json")
            .body(prices_body());
    });
    let yields = server.mock(|when, then| {
        when.method(GET)
            .path("/api/historicalOR/indicesYield")
            .query_param("from", "01-01-2025")
            .query_param("to", "03-01-2025");
        then.status(200)
            .header("content-type", "application/json")
            .body(yields_body());
    });
    let client = common::client_for(&server);

    let bars = nse_rs::index_historical_data(&client, "NIFTY 50", "2025-01-01", Some("2025-01-03"))
        .await
        .unwrap();

    prices.assert();
    yields.assert();

    let dates: Vec<_> = bars.iter().map(|b| b.date).collect();
    assert_eq!(dates, vec![d(2025, 1, 1), d(2025, 1, 2), d(2025, 1, 3)]);

    assert_eq!(bars[0].pe, Some(21.6));
    assert_eq!(bars[0].volume, None);
    assert_eq!(bars[1].pe, None);
    assert_eq!(bars[2].close, 24004.75);
    assert_eq!(bars[2].volume, Some(302_345_678));
    assert_eq!(bars[2].pb, None);
    assert_eq!(bars[2].div_yield, Some(1.28));

    let json = serde_json::to_value(&bars[0]).unwrap();
    assert_eq!(json["date"], "2025-01-01");
    assert_eq!(json["PE"], 21.6);
    assert_eq!(json["indexName"], "NIFTY 50");
}

#[tokio::test]
async fn valuation_can_be_skipped() {
    let server = common::setup_server();
    common::mock_json(&server, "/api/historicalOR/indicesHistory", &prices_body());
    let yields = common::mock_json(&server, "/api/historicalOR/indicesYield", &yields_body());
    let client = common::client_for(&server);

    let bars = IndexHistoryBuilder::new(&client, "NIFTY 50")
        .between(d(2025, 1, 1), d(2025, 1, 3))
        .valuation(false)
        .fetch()
        .await
        .unwrap();

    yields.assert_hits(0);
    assert_eq!(bars.len(), 3);
    assert!(bars.iter().all(|b| b.pe.is_none()));
}

#[tokio::test]
async fn empty_history_skips_yields_and_is_empty() {
    let server = common::setup_server();
    common::mock_json(&server, "/api/historicalOR/indicesHistory", r#"{"data": []}"#);
    let yields = common::mock_json(&server, "/api/historicalOR/indicesYield", &yields_body());
    let client = common::client_for(&server);

    let bars = nse_rs::index_historical_data(&client, "NIFTY 50", "2025-01-04", Some("2025-01-05"))
        .await
        .unwrap();

    assert!(bars.is_empty());
    yields.assert_hits(0);
}

#[tokio::test]
async fn long_ranges_are_fetched_in_yearly_windows() {
    let server = common::setup_server();
    let first = server.mock(|when, then| {
        when.method(GET)
            .path("/api/historicalOR/indicesHistory")
            .query_param("from", "01-01-2023")
            .query_param("to", "31-12-2023");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"data": [{"EOD_TIMESTAMP": "02-JAN-2023", "EOD_OPEN_INDEX_VAL": 1,
                "EOD_HIGH_INDEX_VAL": 1, "EOD_LOW_INDEX_VAL": 1, "EOD_CLOSE_INDEX_VAL": 1}]}"#);
    });
    let second = server.mock(|when, then| {
        when.method(GET)
            .path("/api/historicalOR/indicesHistory")
            .query_param("from", "01-01-2024")
            .query_param("to", "15-01-2024");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"data": [{"EOD_TIMESTAMP": "02-JAN-2024", "EOD_OPEN_INDEX_VAL": 2,
                "EOD_HIGH_INDEX_VAL": 2, "EOD_LOW_INDEX_VAL": 2, "EOD_CLOSE_INDEX_VAL": 2}]}"#);
    });
    let client = common::client_for(&server);

    let bars = IndexHistoryBuilder::new(&client, "NIFTY 50")
        .start("2023-01-01")
        .end("2024-01-15")
        .valuation(false)
        .fetch()
        .await
        .unwrap();

    first.assert();
    second.assert();
    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].date, d(2023, 1, 2));
    assert_eq!(bars[1].date, d(2024, 1, 2));
    assert_eq!(bars[1].index_name, "NIFTY 50");
}

#[tokio::test]
async fn invalid_dates_fail_before_any_request() {
    let server = common::setup_server();
    let prices = common::mock_json(&server, "/api/historicalOR/indicesHistory", &prices_body());
    let client = common::client_for(&server);

    for (start, end) in [
        ("2025-13-01", Some("2025-12-31")),
        ("01-01-2025", Some("2025-01-03")),
        ("2025-1-1", None),
        ("2025-02-30", Some("2025-03-01")),
        ("2025-01-01", Some("yesterday")),
    ] {
        let err = nse_rs::index_historical_data(&client, "NIFTY 50", start, end)
            .await
            .unwrap_err();
        assert!(matches!(err, NseError::InvalidDateRange(_)), "{start}: got {err:?}");
    }

    prices.assert_hits(0);
}

#[tokio::test]
async fn reversed_range_is_rejected() {
    let server = common::setup_server();
    let prices = common::mock_json(&server, "/api/historicalOR/indicesHistory", &prices_body());
    let client = common::client_for(&server);

    for (start, end) in [("2025-01-03", "2025-01-01"), ("2024-12-31", "2000-01-01")] {
        let err = nse_rs::index_historical_data(&client, "NIFTY 50", start, Some(end))
            .await
            .unwrap_err();
        assert!(matches!(err, NseError::InvalidDateRange(_)), "got {err:?}");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    prices.assert_hits(0);
}

#[tokio::test]
async fn empty_index_name_is_an_invalid_argument() {
    let server = common::setup_server();
    let prices = common::mock_json(&server, "/api/historicalOR/indicesHistory", &prices_body());
    let client = common::client_for(&server);

    let err = nse_rs::index_historical_data(&client, "  ", "2025-01-01", Some("2025-01-03"))
        .await
        .unwrap_err();
    assert!(matches!(err, NseError::InvalidArgument(_)), "got {err:?}");

    let err = IndexHistoryBuilder::new(&client, "NIFTY 50").fetch().await.unwrap_err();
    assert!(matches!(err, NseError::InvalidArgument(_)), "got {err:?}");

    prices.assert_hits(0);
}

#[tokio::test]
async fn unknown_index_history_is_a_provider_error() {
    let server = common::setup_server();
    common::mock_json(
        &server,
        "/api/historicalOR/indicesHistory",
        r#"{"error": "Invalid index type NOT_AN_INDEX"}"#,
    );
    let client = common::client_for(&server);

    let err = nse_rs::index_historical_data(&client, "NOT_AN_INDEX", "2025-01-01", Some("2025-01-03"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Provider, "got {err:?}");
}
