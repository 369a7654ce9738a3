// Domain layer - Tracking entities and value parsing
pub mod timestamp;
pub mod tracking_item;
