//! Market indices: master list, live quotes, history and constituents.

mod api;
mod model;
mod wire;

pub use model::{
    ConstituentStock, IndexConstituents, IndexDescriptor, IndexHistoricalBar, IndexQuote,
    IndexQuoteSnapshot,
};

use chrono::NaiveDate;

use crate::core::{DateRange, NseClient, NseError, dates::canonical, require_name};

/// Fetches the master list of indices with their category and derivatives eligibility.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be parsed.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn index_list(client: &NseClient) -> Result<Vec<IndexDescriptor>, NseError> {
    api::fetch_index_list(client).await
}

/// Fetches live quotes (OHLC, PE/PB/DY and 1-week/30-day/365-day comparisons) for every index.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be parsed.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn all_index_quotes(client: &NseClient) -> Result<IndexQuoteSnapshot, NseError> {
    api::fetch_all_index_quotes(client).await
}

/// Fetches the constituent stocks of an index, e.g. `"NIFTY 50"`.
///
/// # Errors
///
/// Returns [`NseError::InvalidArgument`] for an empty name, [`NseError::Provider`] when the
/// provider does not know the index, and request errors otherwise.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn index_stocks(client: &NseClient, index: &str) -> Result<IndexConstituents, NseError> {
    let index = require_name("index name", index)?;
    api::fetch_index_stocks(client, &index).await
}

/// Fetches daily index history between two `YYYY-MM-DD` dates, inclusive.
/// A missing `end` means today.
///
/// Shorthand for [`IndexHistoryBuilder`].
///
/// # Errors
///
/// See [`IndexHistoryBuilder::fetch`].
pub async fn index_historical_data(
    client: &NseClient,
    index: &str,
    start: &str,
    end: Option<&str>,
) -> Result<Vec<IndexHistoricalBar>, NseError> {
    let mut builder = IndexHistoryBuilder::new(client, index).start(start);
    if let Some(end) = end {
        builder = builder.end(end);
    }
    builder.fetch().await
}

/// A builder for daily index history (OHLC, volume and PE/PB/dividend yield).
///
/// Bars come back in ascending date order, one per trading day inside the range.
/// Ranges longer than the provider's one-year limit are fetched window by window.
#[derive(Debug)]
pub struct IndexHistoryBuilder {
    client: NseClient,
    index: String,
    start: Option<String>,
    end: Option<String>,
    valuation: bool,
}

impl IndexHistoryBuilder {
    /// Creates a builder for the given index name.
    pub fn new(client: &NseClient, index: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            index: index.into(),
            start: None,
            end: None,
            valuation: true,
        }
    }

    /// First day (`YYYY-MM-DD`). Required.
    #[must_use]
    pub fn start(mut self, date: impl Into<String>) -> Self {
        self.start = Some(date.into());
        self
    }

    /// Last day (`YYYY-MM-DD`), inclusive. Defaults to today (IST).
    #[must_use]
    pub fn end(mut self, date: impl Into<String>) -> Self {
        self.end = Some(date.into());
        self
    }

    /// Sets both bounds from calendar dates.
    #[must_use]
    pub fn between(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start(canonical(start)).end(canonical(end))
    }

    /// Whether to also fetch PE/PB/dividend yield. Default: true.
    #[must_use]
    pub const fn valuation(mut self, yes: bool) -> Self {
        self.valuation = yes;
        self
    }

    /// Executes the request(s).
    ///
    /// # Errors
    ///
    /// Returns [`NseError::InvalidArgument`] for an empty index name or a missing start,
    /// [`NseError::InvalidDateRange`] for malformed or reversed dates (both before any
    /// request), and request/provider errors from the fetch itself.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(index = %self.index)))]
    pub async fn fetch(self) -> Result<Vec<IndexHistoricalBar>, NseError> {
        let index = require_name("index name", &self.index)?;
        let start = self
            .start
            .as_deref()
            .ok_or_else(|| NseError::InvalidArgument("start date is required".into()))?;
        let range = DateRange::parse(start, self.end.as_deref())?;
        api::fetch_index_history(&self.client, &index, range, self.valuation).await
    }
}
