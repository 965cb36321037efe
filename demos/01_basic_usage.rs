use std::time::Duration;

use nse_rs::NseClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 1. A client with a 10-second timeout. Warmup (cookie priming) is on by default.
    let client = NseClient::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    // 2. Is the market open?
    let status = nse_rs::market_status(&client).await?;
    println!("--- Capital Market ---");
    println!("{} ({})", status.market_status, status.market_status_message);
    println!();

    // 3. Live index quotes.
    let snapshot = nse_rs::all_index_quotes(&client).await?;
    println!("--- Index quotes as of {} ---", snapshot.timestamp);
    for q in snapshot.quotes.iter().take(5) {
        println!(
            "  {:<24} {:>10.2} ({:+.2}%)  PE {}",
            q.index_name,
            q.ltp,
            q.percent_change,
            q.pe.map_or_else(|| "-".to_string(), |pe| format!("{pe:.2}"))
        );
    }
    println!();

    // 4. Constituents of an index, then details for one of them.
    let nifty = nse_rs::index_stocks(&client, "NIFTY 50").await?;
    println!("--- {} has {} constituents ---", nifty.index_name, nifty.stocks.len());
    if let Some(first) = nifty.stocks.first() {
        let details = nse_rs::stock_details(&client, &first.symbol).await?;
        println!(
            "{}: {} / {} (F&O: {})",
            details.symbol, details.sector, details.industry, details.flags.is_fno_sec
        );
    }
    println!();

    // 5. ETFs and commodity spot rates.
    let etfs = nse_rs::etf_list(&client).await?;
    println!("--- {} ETFs ---", etfs.len());
    for etf in etfs.iter().take(3) {
        println!("  {:<12} {:>10.2}  tracks {}", etf.symbol, etf.ltp, etf.underlying);
    }

    let commodities = nse_rs::commodity_list(&client).await?;
    println!("--- Commodity spot rates ---");
    for c in &commodities {
        println!("  {:<10} {:>12.2} per {}", c.symbol, c.spot_price, c.unit);
    }

    Ok(())
}
