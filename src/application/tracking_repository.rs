// Repository trait for tracking data access
use crate::domain::tracking_item::TrackingItem;
use async_trait::async_trait;

#[async_trait]
pub trait TrackingRepository: Send + Sync {
    /// Fetch every tracked vehicle, in server order.
    ///
    /// Transport failures are returned as-is so callers can downcast them.
    async fn fetch_tracking_data(&self) -> anyhow::Result<Vec<TrackingItem>>;
}
