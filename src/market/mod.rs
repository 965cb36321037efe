//! Market status: whether the exchange's segments are open.

mod api;
mod model;
mod wire;

pub use model::{MarketState, MarketStatus};

use crate::core::{NseClient, NseError};

/// Fetches the status of the Capital Market (equities) segment.
///
/// # Errors
///
/// Returns an error if the request fails, the response cannot be parsed, or the
/// provider's answer has no Capital Market entry ([`NseError::Provider`]).
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn market_status(client: &NseClient) -> Result<MarketStatus, NseError> {
    api::fetch_market_status(client).await
}

/// Fetches the status of every market segment the provider reports.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be parsed.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn market_states(client: &NseClient) -> Result<Vec<MarketState>, NseError> {
    api::fetch_market_states(client).await
}
