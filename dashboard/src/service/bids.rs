use backend_api::ContractsApi;
use model::view::contracts::BidRecord;
use std::sync::Arc;
use tracing::warn;

/// Sample set served when the live backend is unreachable or erroring, so
/// the charts always have something to show. Values and order are fixed.
fn fallback_bids() -> Vec<BidRecord> {
    [
        ("Project A", 75.0),
        ("Project B", 60.0),
        ("Project C", 80.0),
        ("Project D", 45.0),
        ("Project E", 90.0),
    ]
    .into_iter()
    .map(|(name, win_percentage)| BidRecord {
        name: name.to_string(),
        win_percentage,
    })
    .collect()
}

#[derive(Debug)]
pub struct BidBoard {
    backend: Arc<dyn ContractsApi>,
}

impl BidBoard {
    pub fn new(backend: Arc<dyn ContractsApi>) -> Self { Self { backend } }

    /// Never fails: any backend trouble is logged and degrades to the
    /// sample set. The returned records are either entirely the backend's
    /// answer or entirely the sample set, never a mix.
    pub async fn fetch_bids(&self) -> Vec<BidRecord> {
        match self.backend.bids_get().await {
            Ok(bids) => bids,
            Err(err) => {
                warn!(
                    "Failed to fetch the bid history, serving the sample \
                     set: {}",
                    err
                );
                fallback_bids()
            }
        }
    }
}
