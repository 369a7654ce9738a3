// Application layer - Use cases and repository seams
pub mod fetch_tracking_service;
pub mod tracking_repository;
