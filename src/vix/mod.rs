//! India VIX history.

mod api;
mod model;
mod wire;

pub use model::VixHistoricalBar;

use chrono::NaiveDate;

use crate::core::{DateRange, NseClient, NseError, dates::canonical};

/// Fetches daily India VIX history between two `YYYY-MM-DD` dates, inclusive.
/// A missing `end` means today.
///
/// # Errors
///
/// See [`VixHistoryBuilder::fetch`].
pub async fn vix_historical_data(
    client: &NseClient,
    start: &str,
    end: Option<&str>,
) -> Result<Vec<VixHistoricalBar>, NseError> {
    let mut builder = VixHistoryBuilder::new(client).start(start);
    if let Some(end) = end {
        builder = builder.end(end);
    }
    builder.fetch().await
}

/// A builder for daily India VIX history.
#[derive(Debug)]
pub struct VixHistoryBuilder {
    client: NseClient,
    start: Option<String>,
    end: Option<String>,
}

impl VixHistoryBuilder {
    /// Creates a new builder.
    pub fn new(client: &NseClient) -> Self {
        Self {
            client: client.clone(),
            start: None,
            end: None,
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

    /// Executes the request(s). Bars come back in ascending date order.
    ///
    /// # Errors
    ///
    /// Returns [`NseError::InvalidArgument`] when no start was given and
    /// [`NseError::InvalidDateRange`] for malformed or reversed dates, both before any
    /// request; request/provider errors otherwise.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn fetch(self) -> Result<Vec<VixHistoricalBar>, NseError> {
        let start = self
            .start
            .as_deref()
            .ok_or_else(|| NseError::InvalidArgument("start date is required".into()))?;
        let range = DateRange::parse(start, self.end.as_deref())?;
        api::fetch_vix_history(&self.client, range).await
    }
}
