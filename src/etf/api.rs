use crate::core::{NseClient, NseError, net};

use super::model::Etf;
use super::wire::{EtfEnvelope, EtfNode};

const ETF_PATH: &str = "api/etf";

impl From<EtfNode> for Etf {
    fn from(n: EtfNode) -> Self {
        let meta = n.meta.unwrap_or_default();
        Self {
            symbol: n.symbol,
            underlying: n.assets,
            company_name: meta.company_name,
            isin: meta.isin,
            listing_date: meta.listing_date,
            ltp: n.ltp,
            change: n.change,
            percent_change: n.percent_change,
            nav: n.nav,
        }
    }
}

pub(super) async fn fetch_etf_list(client: &NseClient) -> Result<Vec<Etf>, NseError> {
    let url = client.api_url(ETF_PATH)?;
    let env: EtfEnvelope = net::get_json(client, url, "etf", "all").await?;
    Ok(env
        .data
        .unwrap_or_default()
        .into_iter()
        .filter(|n| !n.symbol.is_empty())
        .map(Etf::from)
        .collect())
}
