//! The one request path shared by every dataset.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::core::{NseClient, NseError};

/// Read the response body as text.
/// In `test-mode`, if `NSE_RECORD=1`, the body is saved as a fixture.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _key: &str,
    _ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if std::env::var("NSE_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _key, _ext, &text)
        {
            eprintln!("NSE_RECORD: failed to write fixture for {_key}: {e}");
        }
    }

    Ok(text)
}

/// Performs a GET against a JSON API endpoint and deserializes the payload into `T`.
///
/// `endpoint` and `key` name the call in logs and recorded fixtures.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &NseClient,
    url: Url,
    endpoint: &str,
    key: &str,
) -> Result<T, NseError> {
    client.warm_up_if_enabled().await;

    #[cfg(feature = "tracing")]
    tracing::debug!(%url, endpoint, "GET");

    let resp = client.api_request(url.clone()).send().await?;
    let status = resp.status();
    let body = get_text(resp, endpoint, key, "json").await?;

    if status == StatusCode::NOT_FOUND {
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| provider_fault(&v))
            .unwrap_or_else(|| "not found".to_string());
        return Err(NseError::provider(&url, message));
    }
    if !status.is_success() {
        return Err(NseError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let value: Value = serde_json::from_str(&body)?;
    if let Some(message) = provider_fault(&value) {
        return Err(NseError::provider(&url, message));
    }

    serde_json::from_value(value).map_err(|e| NseError::Data(format!("{endpoint}: {e}")))
}

/// Performs a GET against the archive host and returns the raw body (CSV listings).
pub(crate) async fn get_archive_text(
    client: &NseClient,
    url: Url,
    endpoint: &str,
    key: &str,
    ext: &str,
) -> Result<String, NseError> {
    #[cfg(feature = "tracing")]
    tracing::debug!(%url, endpoint, "GET archive");

    let resp = client.page_request(url.clone()).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(NseError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    Ok(get_text(resp, endpoint, key, ext).await?)
}

/// Detects the provider's error envelopes.
///
/// Two shapes are recognised: an object with a non-null, non-false `error` member, and a
/// bare message object (`msg`/`message` with at most `status`/`code` beside it).
pub(crate) fn provider_fault(value: &Value) -> Option<String> {
    let obj = value.as_object()?;

    match obj.get("error") {
        None | Some(Value::Null | Value::Bool(false)) => {}
        Some(Value::String(s)) => return Some(s.clone()),
        Some(other) => {
            let msg = other
                .get("message")
                .or_else(|| other.get("description"))
                .and_then(Value::as_str)
                .map_or_else(|| other.to_string(), str::to_string);
            return Some(msg);
        }
    }

    let only_message = obj
        .keys()
        .all(|k| matches!(k.as_str(), "msg" | "message" | "status" | "code"));
    if only_message {
        return obj
            .get("msg")
            .or_else(|| obj.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string);
    }
    None
}
