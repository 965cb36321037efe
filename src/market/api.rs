use crate::core::{NseClient, NseError, net};

use super::model::{MarketState, MarketStatus};
use super::wire::{MarketStateNode, MarketStatusEnvelope};

const MARKET_STATUS_PATH: &str = "api/marketStatus";
const CAPITAL_MARKET: &str = "Capital Market";

async fn fetch_states(client: &NseClient) -> Result<(url::Url, Vec<MarketStateNode>), NseError> {
    let url = client.api_url(MARKET_STATUS_PATH)?;
    let env: MarketStatusEnvelope =
        net::get_json(client, url.clone(), "market_status", "all").await?;
    Ok((url, env.market_state))
}

pub(super) async fn fetch_market_status(client: &NseClient) -> Result<MarketStatus, NseError> {
    let (url, states) = fetch_states(client).await?;
    states
        .into_iter()
        .find(|s| s.market == CAPITAL_MARKET)
        .map(|s| MarketStatus {
            market_status: s.market_status,
            market_status_message: s.market_status_message,
        })
        .ok_or_else(|| NseError::provider(&url, "no Capital Market entry in market status"))
}

pub(super) async fn fetch_market_states(client: &NseClient) -> Result<Vec<MarketState>, NseError> {
    let (_, states) = fetch_states(client).await?;
    Ok(states.into_iter().map(MarketState::from).collect())
}

impl From<MarketStateNode> for MarketState {
    fn from(n: MarketStateNode) -> Self {
        Self {
            market: n.market,
            market_status: n.market_status,
            market_status_message: n.market_status_message,
            trade_date: n.trade_date,
            index: n.index,
            last: n.last,
            variation: n.variation,
            percent_change: n.percent_change,
        }
    }
}
