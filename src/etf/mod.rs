//! Exchange traded funds.

mod api;
mod model;
mod wire;

pub use model::Etf;

use crate::core::{NseClient, NseError};

/// Fetches every ETF traded on the exchange with its latest price.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be parsed.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn etf_list(client: &NseClient) -> Result<Vec<Etf>, NseError> {
    api::fetch_etf_list(client).await
}
