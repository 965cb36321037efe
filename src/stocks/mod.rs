//! Equities: the full listing and per-symbol details.

mod api;
mod model;
mod wire;

pub use model::{ListedStock, StockDetails};

use crate::core::{NseClient, NseError, require_name};

/// Fetches every equity listed on the exchange, from the archive CSV listing.
///
/// # Errors
///
/// Returns an error if the request fails or the CSV cannot be parsed.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn stocks_list(client: &NseClient) -> Result<Vec<ListedStock>, NseError> {
    api::fetch_stocks_list(client).await
}

/// Fetches company, classification and trading details for one equity symbol.
///
/// # Errors
///
/// Returns [`NseError::InvalidArgument`] for an empty symbol, [`NseError::Provider`] when the
/// provider does not know the symbol, and request errors otherwise.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn stock_details(client: &NseClient, symbol: &str) -> Result<StockDetails, NseError> {
    let symbol = require_name("symbol", symbol)?;
    api::fetch_stock_details(client, &symbol).await
}
