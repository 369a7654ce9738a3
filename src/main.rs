// Main entry point - Load tracking data once and log the resulting list
use tokio_stream::StreamExt;

use tracking_feed::build_coordinator;
use tracking_feed::infrastructure::config::load_tracking_config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = load_tracking_config()?;
    tracing::info!("Fetching tracking data from {}", config.api.endpoint);

    let coordinator = build_coordinator(&config);
    coordinator.load_data();

    // Wait for the load to settle
    let mut updates = coordinator.updates();
    let mut state = coordinator.state();
    while let Some(next) = updates.next().await {
        state = next;
        if !state.is_loading {
            break;
        }
    }

    if let Some(message) = &state.error_message {
        anyhow::bail!("Failed to load tracking data: {}", message);
    }

    for item in &state.filtered {
        println!(
            "{:<12} {:<20} {:<30} ({:.4}, {:.4}) {}",
            item.plate_no,
            item.driver_name,
            item.location,
            item.latitude,
            item.longitude,
            item.last_updated_formatted()
        );
    }
    tracing::info!("{} vehicles", state.filtered.len());

    Ok(())
}
