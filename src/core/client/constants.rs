//! Centralized constants for default hosts, UA and header sets.

use std::time::Duration;

/// Default desktop UA; the provider rejects obvious non-browser agents.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/120.0.0.0 Safari/537.36"
);

/// Main site; serves both the HTML pages used for warmup and the `/api/*` JSON endpoints.
pub(crate) const DEFAULT_BASE_URL: &str = "https://www.nseindia.com/";

/// Static archive host (CSV listings).
pub(crate) const DEFAULT_ARCHIVES_URL: &str = "https://nsearchives.nseindia.com/";

/// Page visited second during warmup; also sent as `Referer` on API calls.
pub(crate) const OPTION_CHAIN_PATH: &str = "option-chain";

/// Pause between warmup and the API call.
pub(crate) const DEFAULT_WARMUP_PAUSE: Duration = Duration::from_millis(300);

/// Headers sent with every JSON API call.
pub(crate) const API_HEADERS: &[(&str, &str)] = &[
    ("accept", "application/json, text/javascript, */*; q=0.01"),
    ("accept-language", "en-US,en;q=0.9"),
    ("x-requested-with", "XMLHttpRequest"),
    ("sec-fetch-dest", "empty"),
    ("sec-fetch-mode", "cors"),
    ("sec-fetch-site", "same-origin"),
];

/// Headers sent when fetching HTML pages (warmup) or archive files.
pub(crate) const PAGE_HEADERS: &[(&str, &str)] = &[
    (
        "accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
    ),
    ("accept-language", "en-US,en;q=0.9"),
    ("upgrade-insecure-requests", "1"),
    ("sec-fetch-dest", "document"),
    ("sec-fetch-mode", "navigate"),
    ("sec-fetch-site", "none"),
    ("sec-fetch-user", "?1"),
];
