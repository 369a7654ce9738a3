// Wire records and their conversion to domain items
use crate::domain::timestamp::parse_timestamp;
use crate::domain::tracking_item::TrackingItem;
use serde::Deserialize;

/// The endpoint returns a bare JSON array of records.
pub type TrackingResponseDto = Vec<TrackingItemDto>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingItemDto {
    pub plate_no: String,
    pub driver_name: String,
    pub lat: f64,
    pub lng: f64,
    pub location: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub last_updated: String,
}

impl TrackingItemDto {
    /// Convert to a domain item, or `None` when `last_updated` is unparsable.
    pub fn into_domain(self) -> Option<TrackingItem> {
        let Some(last_updated) = parse_timestamp(&self.last_updated) else {
            tracing::debug!(
                "Dropping record {}: unparsable lastUpdated {:?}",
                self.plate_no,
                self.last_updated
            );
            return None;
        };

        Some(TrackingItem {
            id: TrackingItem::id_for_plate(&self.plate_no),
            plate_no: self.plate_no,
            driver_name: self.driver_name,
            location: self.location,
            latitude: self.lat,
            longitude: self.lng,
            last_updated,
            driver_image_url: Some(self.image_url),
        })
    }
}

/// Convert a batch, keeping the order of the records that survive.
pub fn to_domain_items(records: TrackingResponseDto) -> Vec<TrackingItem> {
    records
        .into_iter()
        .filter_map(TrackingItemDto::into_domain)
        .collect()
}
