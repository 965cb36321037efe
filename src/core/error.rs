use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum NseError {
    /// A caller-supplied argument failed local validation. No request was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A caller-supplied date range was malformed or had its start after its end.
    /// No request was sent.
    #[error("invalid date range: {0}")]
    InvalidDateRange(String),

    /// An error occurred during an HTTP request (connectivity, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The response body was not valid JSON, or did not have the expected shape.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The archive CSV listing could not be parsed.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// The data received from the provider was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// The provider rejected the query, e.g. because it does not know the symbol or index.
    #[error("provider error at {url}: {message}")]
    Provider {
        /// The URL that was rejected.
        url: String,
        /// The provider's own message, or a description of the rejection.
        message: String,
    },
}

/// The three tiers every [`NseError`] falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Local validation failed before any network call.
    InvalidArgument,
    /// Transport-level failure: connectivity, timeout, status, malformed body.
    Request,
    /// The provider answered, but rejected the query.
    Provider,
}

impl NseError {
    /// Returns the tier this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) | Self::InvalidDateRange(_) => ErrorKind::InvalidArgument,
            Self::Provider { .. } => ErrorKind::Provider,
            Self::Http(_)
            | Self::Url(_)
            | Self::Status { .. }
            | Self::Json(_)
            | Self::Csv(_)
            | Self::Data(_) => ErrorKind::Request,
        }
    }

    pub(crate) fn provider(url: &url::Url, message: impl Into<String>) -> Self {
        Self::Provider {
            url: url.to_string(),
            message: message.into(),
        }
    }
}
