//! Commodities and their reference spot rates.

mod api;
mod model;
mod wire;

pub use model::Commodity;

use crate::core::{NseClient, NseError};

/// Fetches the commodities the exchange publishes spot rates for.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be parsed.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn commodity_list(client: &NseClient) -> Result<Vec<Commodity>, NseError> {
    api::fetch_commodity_list(client).await
}
