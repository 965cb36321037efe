use std::collections::BTreeMap;

use crate::core::{DateRange, NseClient, NseError, historical};

use super::model::VixHistoricalBar;
use super::wire::VixRow;

const VIX_HISTORY_PATH: &str = "api/historicalOR/vixhistory";
const VIX_NAME: &str = "India VIX";

pub(super) fn map_rows(range: DateRange, rows: Vec<VixRow>) -> Vec<VixHistoricalBar> {
    let by_date: BTreeMap<_, _> = rows
        .into_iter()
        .filter(|r| range.contains(r.date))
        .map(|r| (r.date, r))
        .collect();

    by_date
        .into_values()
        .map(|r| VixHistoricalBar {
            index_name: if r.index_name.is_empty() {
                VIX_NAME.to_string()
            } else {
                r.index_name
            },
            date: r.date,
            open: r.open,
            high: r.high,
            low: r.low,
            close: r.close,
            prev_close: r.prev_close,
            change: r.change,
            percent_change: r.percent_change,
        })
        .collect()
}

pub(super) async fn fetch_vix_history(
    client: &NseClient,
    range: DateRange,
) -> Result<Vec<VixHistoricalBar>, NseError> {
    let rows: Vec<VixRow> =
        historical::fetch_windowed_rows(client, VIX_HISTORY_PATH, &[], range, "vix_history", "vix")
            .await?;
    Ok(map_rows(range, rows))
}
