//! nse-rs: async client for NSE India's public market data.
//!
//! Every dataset is a plain async function taking an [`NseClient`]. The client carries
//! transport configuration only; nothing is cached between calls.
//!
//! ```no_run
//! # async fn run() -> Result<(), nse_rs::NseError> {
//! let client = nse_rs::NseClient::default();
//!
//! let status = nse_rs::market_status(&client).await?;
//! println!("Capital Market is {}", status.market_status);
//!
//! let vix = nse_rs::vix_historical_data(&client, "2025-01-01", Some("2025-01-31")).await?;
//! println!("{} VIX bars", vix.len());
//! # Ok(())
//! # }
//! ```
//!
//! Dates going in and coming out are `YYYY-MM-DD`. Malformed or reversed ranges fail with
//! [`NseError::InvalidDateRange`] before any request is made.

pub mod core;

pub mod commodity;
pub mod etf;
pub mod indices;
pub mod market;
pub mod stocks;
pub mod vix;

pub use core::{
    DateRange, ErrorKind, NseClient, NseClientBuilder, NseError, SecurityFlags,
};

pub use commodity::{Commodity, commodity_list};
pub use etf::{Etf, etf_list};
pub use indices::{
    ConstituentStock, IndexConstituents, IndexDescriptor, IndexHistoricalBar, IndexHistoryBuilder,
    IndexQuote, IndexQuoteSnapshot, all_index_quotes, index_historical_data, index_list,
    index_stocks,
};
pub use market::{MarketState, MarketStatus, market_states, market_status};
pub use stocks::{ListedStock, StockDetails, stock_details, stocks_list};
pub use vix::{VixHistoricalBar, VixHistoryBuilder, vix_historical_data};
