//! Public client surface + builder.
//! Internals are split into `session` (cookie warmup) and `constants` (UA + defaults).

mod constants;
mod session;

use crate::core::NseError;
use constants::{
    API_HEADERS, DEFAULT_ARCHIVES_URL, DEFAULT_BASE_URL, DEFAULT_WARMUP_PAUSE, OPTION_CHAIN_PATH,
    PAGE_HEADERS, USER_AGENT,
};
use reqwest::{Client, RequestBuilder};
use std::time::Duration;
use url::Url;

/// A configured HTTP client for the NSE India public endpoints.
///
/// The client is cheap to clone; clones share one connection pool and one cookie store.
/// It holds no market data between calls.
#[derive(Debug, Clone)]
pub struct NseClient {
    http: Client,
    base_url: Url,
    archives_url: Url,
    warmup: bool,
    warmup_pause: Duration,
}

impl Default for NseClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl NseClient {
    /// Create a new builder.
    #[must_use]
    pub fn builder() -> NseClientBuilder {
        NseClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) const fn warmup_enabled(&self) -> bool {
        self.warmup
    }

    /// Resolves a path such as `api/allIndices` against the main site.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, NseError> {
        Ok(self.base_url.join(path)?)
    }

    /// Resolves a path against the static archive host.
    pub(crate) fn archive_url(&self, path: &str) -> Result<Url, NseError> {
        Ok(self.archives_url.join(path)?)
    }

    fn referer(&self) -> Option<Url> {
        self.base_url.join(OPTION_CHAIN_PATH).ok()
    }

    /// Builds a GET for a JSON API endpoint with the browser-like header set.
    pub(crate) fn api_request(&self, url: Url) -> RequestBuilder {
        let mut req = with_headers(self.http.get(url), API_HEADERS);
        if let Some(referer) = self.referer() {
            req = req.header("referer", referer.as_str());
        }
        req
    }

    /// Builds a GET for an HTML page or archive file.
    pub(crate) fn page_request(&self, url: Url) -> RequestBuilder {
        with_headers(self.http.get(url), PAGE_HEADERS)
    }
}

fn with_headers(mut req: RequestBuilder, pairs: &[(&str, &str)]) -> RequestBuilder {
    for (name, value) in pairs {
        req = req.header(*name, *value);
    }
    req
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`NseClient`].
#[derive(Debug, Default)]
pub struct NseClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    archives_url: Option<Url>,
    warmup: Option<bool>,
    warmup_pause: Option<Duration>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl NseClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the main site base (default `https://www.nseindia.com/`).
    /// Used by tests to point the client at a mock server.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the archive host base (default `https://nsearchives.nseindia.com/`).
    #[must_use]
    pub fn archives_url(mut self, url: Url) -> Self {
        self.archives_url = Some(url);
        self
    }

    /// Visit the homepage and option-chain page before each API call to pick up the
    /// session cookies the provider expects. Default: enabled.
    #[must_use]
    pub const fn warmup(mut self, yes: bool) -> Self {
        self.warmup = Some(yes);
        self
    }

    /// Pause between warmup and the API call. Default: 300ms.
    #[must_use]
    pub const fn warmup_pause(mut self, dur: Duration) -> Self {
        self.warmup_pause = Some(dur);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if a default base URL fails to parse or the HTTP client cannot be built.
    pub fn build(self) -> Result<NseClient, NseError> {
        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        let archives_url = match self.archives_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_ARCHIVES_URL)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .cookie_store(true);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(NseClient {
            http,
            base_url,
            archives_url,
            warmup: self.warmup.unwrap_or(true),
            warmup_pause: self.warmup_pause.unwrap_or(DEFAULT_WARMUP_PAUSE),
        })
    }
}
