//! Cookie warmup against the provider's HTML pages.
//!
//! The API endpoints answer 401/403 to requests that carry none of the cookies set by
//! the regular site, so the homepage and the option-chain page are visited first.

use super::constants::OPTION_CHAIN_PATH;
use crate::core::error::NseError;

impl super::NseClient {
    /// Visits the homepage and the option-chain page, storing their cookies.
    pub(crate) async fn warm_up(&self) -> Result<(), NseError> {
        for path in ["", OPTION_CHAIN_PATH] {
            let url = self.base_url.join(path)?;
            let resp = self.page_request(url.clone()).send().await?;
            if !resp.status().is_success() {
                return Err(NseError::Status {
                    status: resp.status().as_u16(),
                    url: url.to_string(),
                });
            }
        }

        if !self.warmup_pause.is_zero() {
            tokio::time::sleep(self.warmup_pause).await;
        }
        Ok(())
    }

    /// Warmup is best-effort: a failure is logged and the API call proceeds anyway.
    pub(crate) async fn warm_up_if_enabled(&self) {
        if !self.warmup_enabled() {
            return;
        }
        if let Err(_e) = self.warm_up().await {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %_e, "session warmup failed; continuing without cookies");
        }
    }
}
