// Tracking item domain model
use chrono::{DateTime, Utc};
use reqwest::Url;

/// Latitude/longitude pair for map placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// One tracked vehicle at its last known position.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackingItem {
    pub id: String,
    pub plate_no: String,
    pub driver_name: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub last_updated: DateTime<Utc>,
    pub driver_image_url: Option<String>,
}

impl TrackingItem {
    /// Identifier derived from a plate number: every space becomes `_`.
    pub fn id_for_plate(plate_no: &str) -> String {
        plate_no.replace(' ', "_")
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    /// Driver image as a URL. Empty or malformed values yield `None`.
    pub fn driver_image(&self) -> Option<Url> {
        self.driver_image_url
            .as_deref()
            .filter(|raw| !raw.is_empty())
            .and_then(|raw| Url::parse(raw).ok())
    }

    /// Relative age label ("Today", "1 day ago", "3 days ago") against `now`.
    /// Counts whole elapsed days; timestamps in the future read as "Today".
    pub fn last_updated_label(&self, now: DateTime<Utc>) -> String {
        match (now - self.last_updated).num_days() {
            days if days <= 0 => "Today".to_string(),
            1 => "1 day ago".to_string(),
            days => format!("{} days ago", days),
        }
    }

    pub fn last_updated_formatted(&self) -> String {
        self.last_updated_label(Utc::now())
    }
}
