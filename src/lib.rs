// Tracking feed - fetch, translate and present vehicle tracking data
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

use std::sync::Arc;

use crate::application::fetch_tracking_service::FetchTrackingService;
use crate::infrastructure::config::TrackingConfig;
use crate::infrastructure::network_service::DefaultNetworkService;
use crate::infrastructure::remote_tracking_repository::RemoteTrackingRepository;
use crate::presentation::tracking_coordinator::TrackingCoordinator;

/// Wire transport, repository, use case and coordinator from configuration.
pub fn build_coordinator(config: &TrackingConfig) -> TrackingCoordinator {
    // Create transport and repository (infrastructure layer)
    let network = Arc::new(DefaultNetworkService::new());
    let repository = Arc::new(RemoteTrackingRepository::new(
        network,
        config.api.endpoint.clone(),
        config.api.headers.clone(),
    ));

    // Create use case (application layer)
    let service = FetchTrackingService::new(repository);

    // Create coordinator (presentation layer)
    TrackingCoordinator::with_debounce(service, config.search.debounce())
}
