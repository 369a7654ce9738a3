// Fetch tracking service - Use case for loading tracking data newest first
use crate::application::tracking_repository::TrackingRepository;
use crate::domain::tracking_item::TrackingItem;
use std::sync::Arc;

#[derive(Clone)]
pub struct FetchTrackingService {
    repository: Arc<dyn TrackingRepository>,
}

impl FetchTrackingService {
    pub fn new(repository: Arc<dyn TrackingRepository>) -> Self {
        Self { repository }
    }

    /// Fetch all items sorted by `last_updated`, newest first.
    /// Items with equal timestamps keep their repository order.
    pub async fn execute(&self) -> anyhow::Result<Vec<TrackingItem>> {
        let mut items = self.repository.fetch_tracking_data().await?;
        items.sort_by(|a, b| b.last_updated.cmp(&a.last_updated));
        Ok(items)
    }
}
