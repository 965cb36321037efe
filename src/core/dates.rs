//! Date handling: caller ranges in, provider query format out, canonical dates back.
//!
//! Callers speak `YYYY-MM-DD`. The provider wants `DD-MM-YYYY` in query strings and answers
//! with a mix of `03-JAN-2025`, `02-Jan-2026 16:00:00` and ISO dates. Everything that leaves
//! this crate is a [`NaiveDate`], which serializes as `YYYY-MM-DD`.

use chrono::{Duration, NaiveDate, Utc};
use chrono_tz::Asia::Kolkata;

use crate::core::NseError;

/// The canonical textual form of every date in this crate.
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d";

const PROVIDER_QUERY_FORMAT: &str = "%d-%m-%Y";

/// Formats the provider uses in response payloads, tried in order on the date token.
const PROVIDER_RESPONSE_FORMATS: &[&str] = &["%d-%b-%Y", "%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y"];

/// Largest span (inclusive, in days) one historical request may cover.
pub(crate) const MAX_WINDOW_DAYS: i64 = 365;

/// Parses a strict `YYYY-MM-DD` string.
///
/// # Errors
///
/// Returns [`NseError::InvalidDateRange`] if the text is not a zero-padded ISO calendar date.
pub fn parse_canonical(text: &str) -> Result<NaiveDate, NseError> {
    let bytes = text.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shaped {
        return Err(NseError::InvalidDateRange(format!(
            "'{text}' is not a YYYY-MM-DD date"
        )));
    }
    NaiveDate::parse_from_str(text, CANONICAL_FORMAT)
        .map_err(|e| NseError::InvalidDateRange(format!("'{text}': {e}")))
}

/// Renders a date in the canonical `YYYY-MM-DD` form.
#[must_use]
pub fn canonical(date: NaiveDate) -> String {
    date.format(CANONICAL_FORMAT).to_string()
}

/// Renders a date the way the provider's query parameters expect it (`DD-MM-YYYY`).
pub(crate) fn to_provider_format(date: NaiveDate) -> String {
    date.format(PROVIDER_QUERY_FORMAT).to_string()
}

/// Parses any date format the provider uses in its payloads. A trailing time part is ignored.
#[must_use]
pub fn normalize_provider_date(text: &str) -> Option<NaiveDate> {
    let token = text.split_whitespace().next()?;
    PROVIDER_RESPONSE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(token, fmt).ok())
}

/// Today's date on the provider's calendar (India Standard Time).
#[must_use]
pub fn provider_today() -> NaiveDate {
    Utc::now().with_timezone(&Kolkata).date_naive()
}

/// A validated, inclusive date range with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Builds a range from two dates.
    ///
    /// # Errors
    ///
    /// Returns [`NseError::InvalidDateRange`] if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, NseError> {
        if start > end {
            return Err(NseError::InvalidDateRange(format!(
                "start {} is after end {}",
                canonical(start),
                canonical(end)
            )));
        }
        Ok(Self { start, end })
    }

    /// Parses caller-supplied `YYYY-MM-DD` strings. A missing end means today (IST).
    ///
    /// # Errors
    ///
    /// Returns [`NseError::InvalidDateRange`] if either string does not parse or the
    /// start is after the end.
    pub fn parse(start: &str, end: Option<&str>) -> Result<Self, NseError> {
        let start = parse_canonical(start.trim())?;
        let end = match end {
            Some(e) => parse_canonical(e.trim())?,
            None => provider_today(),
        };
        Self::new(start, end)
    }

    /// First day of the range.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range (inclusive).
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` lies inside the range, bounds included.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Splits the range into consecutive, non-overlapping windows of at most `max_days` days.
    pub(crate) fn windows(&self, max_days: i64) -> Vec<Self> {
        let step = Duration::days(max_days.max(1) - 1);
        let mut out = Vec::new();
        let mut cursor = self.start;
        while cursor <= self.end {
            let window_end = (cursor + step).min(self.end);
            out.push(Self {
                start: cursor,
                end: window_end,
            });
            match window_end.succ_opt() {
                Some(next) => cursor = next,
                None => break,
            }
        }
        out
    }

    /// The `(from, to)` pair in provider query format.
    pub(crate) fn provider_params(&self) -> (String, String) {
        (to_provider_format(self.start), to_provider_format(self.end))
    }
}
