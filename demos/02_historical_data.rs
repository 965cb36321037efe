use chrono::NaiveDate;
use nse_rs::{IndexHistoryBuilder, NseClient, NseError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = NseClient::default();

    // 1. Index history over more than a year is fetched in yearly windows.
    let start = NaiveDate::from_ymd_opt(2023, 6, 1).ok_or("bad date")?;
    let end = NaiveDate::from_ymd_opt(2024, 12, 31).ok_or("bad date")?;
    let bars = IndexHistoryBuilder::new(&client, "NIFTY BANK")
        .between(start, end)
        .fetch()
        .await?;
    println!("--- NIFTY BANK: {} daily bars ---", bars.len());
    if let (Some(first), Some(last)) = (bars.first(), bars.last()) {
        println!("  {} close {:.2}", first.date, first.close);
        println!("  {} close {:.2} (PE {:?})", last.date, last.close, last.pe);
    }
    println!();

    // 2. India VIX, as JSON.
    let vix = nse_rs::vix_historical_data(&client, "2025-01-01", Some("2025-01-31")).await?;
    println!("--- India VIX, January 2025 ---");
    println!("{}", serde_json::to_string_pretty(&vix)?);
    println!();

    // 3. Bad input is rejected locally.
    match nse_rs::index_historical_data(&client, "NIFTY 50", "2025-03-01", Some("2025-01-01")).await {
        Err(NseError::InvalidDateRange(msg)) => println!("rejected as expected: {msg}"),
        other => println!("unexpected: {other:?}"),
    }

    Ok(())
}
