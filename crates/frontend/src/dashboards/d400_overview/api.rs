use crate::shared::api::ApiClient;
use contracts::dashboards::d400_overview::{CountTile, DashboardCounts};
use contracts::shared::envelope::count_in_envelope;
use futures::future::join_all;

async fn fetch_count(api: &ApiClient, tile: CountTile) -> Option<usize> {
    match api.get(tile.endpoint()).await {
        Ok(value) => Some(count_in_envelope(&value, tile.plural_key())),
        Err(e) => {
            log::warn!("D400: count of {} unavailable: {}", tile.plural_key(), e);
            None
        }
    }
}

/// All tiles in parallel; a failed request yields `None` without affecting the rest
pub async fn fetch_counts(api: &ApiClient) -> DashboardCounts {
    let counts = join_all(CountTile::ALL.iter().map(|&tile| fetch_count(api, tile))).await;
    DashboardCounts {
        entries: CountTile::ALL.iter().copied().zip(counts).collect(),
    }
}
