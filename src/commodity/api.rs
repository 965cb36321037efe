use crate::core::{NseClient, NseError, net};

use super::model::Commodity;
use super::wire::SpotRatesEnvelope;

const SPOT_RATES_PATH: &str = "api/refrates";
const SPOT_RATES_INDEX: &str = "commodityspotrates";

pub(super) async fn fetch_commodity_list(client: &NseClient) -> Result<Vec<Commodity>, NseError> {
    let mut url = client.api_url(SPOT_RATES_PATH)?;
    url.query_pairs_mut().append_pair("index", SPOT_RATES_INDEX);

    let env: SpotRatesEnvelope = net::get_json(client, url, "commodity_spot", "all").await?;
    Ok(env
        .data
        .unwrap_or_default()
        .into_iter()
        .filter(|n| !n.symbol.is_empty())
        .map(|n| Commodity {
            symbol: n.symbol,
            unit: n.unit,
            spot_price: n.spot_price,
            previous_spot_price: n.previous_spot_price,
            date: n.last_updated,
        })
        .collect())
}
