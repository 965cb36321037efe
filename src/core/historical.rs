//! Windowed fetch shared by the historical datasets.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::core::dates::{DateRange, MAX_WINDOW_DAYS};
use crate::core::{NseClient, NseError, net};

#[derive(Deserialize)]
struct RowsEnvelope<T> {
    #[serde(default = "Option::default")]
    data: Option<Vec<T>>,
}

/// Fetches `path` once per provider window of `range`, in order, and concatenates the rows.
///
/// `params` are sent with every window, followed by `from`/`to` in provider format.
pub(crate) async fn fetch_windowed_rows<T: DeserializeOwned>(
    client: &NseClient,
    path: &str,
    params: &[(&str, &str)],
    range: DateRange,
    endpoint: &str,
    key: &str,
) -> Result<Vec<T>, NseError> {
    let mut rows = Vec::new();
    for window in range.windows(MAX_WINDOW_DAYS) {
        let (from, to) = window.provider_params();
        let mut url = client.api_url(path)?;
        {
            let mut qp = url.query_pairs_mut();
            for (k, v) in params {
                qp.append_pair(k, v);
            }
            qp.append_pair("from", &from);
            qp.append_pair("to", &to);
        }
        let env: RowsEnvelope<T> = net::get_json(client, url, endpoint, key).await?;
        rows.extend(env.data.unwrap_or_default());
    }
    Ok(rows)
}
