// Tracking coordinator - Owns view state for the list and map screens
use crate::application::fetch_tracking_service::FetchTrackingService;
use crate::domain::tracking_item::TrackingItem;
use crate::presentation::debouncer::Debouncer;
use crate::presentation::view_state::{ViewMode, ViewState};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Drives loading, search, sorting and selection, publishing every change
/// through a `watch` channel.
///
/// Each call applies its state change in one `send_modify`, so observers never
/// see a half-applied update. Mutating methods take `&mut self`; the
/// coordinator expects a single owner driving it. Requires a tokio runtime.
///
/// Overlapping `load_data` calls are not serialised: each runs its own fetch
/// and whichever finishes last determines the final state.
pub struct TrackingCoordinator {
    shared: Arc<Shared>,
    search_debounce: Debouncer,
}

struct Shared {
    service: FetchTrackingService,
    state: watch::Sender<ViewState>,
}

impl Shared {
    fn apply_load_result(&self, result: anyhow::Result<Vec<TrackingItem>>) {
        match result {
            Ok(items) => {
                tracing::info!("Loaded {} tracking items", items.len());
                self.state.send_modify(|state| {
                    state.items = items;
                    state.refresh_filtered();
                    state.is_loading = false;
                });
            }
            Err(e) => {
                tracing::warn!("Failed to load tracking data: {}", e);
                self.state.send_modify(|state| {
                    state.error_message = Some(e.to_string());
                    state.is_loading = false;
                });
            }
        }
    }
}

impl TrackingCoordinator {
    pub fn new(service: FetchTrackingService) -> Self {
        Self::with_debounce(service, DEFAULT_SEARCH_DEBOUNCE)
    }

    pub fn with_debounce(service: FetchTrackingService, debounce: Duration) -> Self {
        let (state, _) = watch::channel(ViewState::default());
        Self {
            shared: Arc::new(Shared { service, state }),
            search_debounce: Debouncer::new(debounce),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ViewState {
        self.shared.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.shared.state.subscribe()
    }

    /// Stream yielding the current state, then every subsequent change.
    pub fn updates(&self) -> WatchStream<ViewState> {
        WatchStream::new(self.subscribe())
    }

    /// Start a fetch. `is_loading` is set before this returns; the result is
    /// applied when the background task completes. On failure the previously
    /// loaded items stay in place.
    pub fn load_data(&self) {
        self.shared.state.send_modify(|state| {
            state.is_loading = true;
            state.error_message = None;
        });

        let shared = Arc::clone(&self.shared);
        tokio::spawn(async move {
            let result = shared.service.execute().await;
            shared.apply_load_result(result);
        });
    }

    /// Update the search text now; refilter once the debounce window passes
    /// without another edit.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.shared.state.send_modify(|state| state.search_text = text);

        let shared = Arc::downgrade(&self.shared);
        self.search_debounce.schedule(move || {
            if let Some(shared) = shared.upgrade() {
                shared.state.send_modify(ViewState::refresh_filtered);
            }
        });
    }

    pub fn toggle_sort(&mut self) {
        self.shared.state.send_modify(|state| {
            state.sort_ascending = !state.sort_ascending;
            state.refresh_filtered();
        });
    }

    pub fn select_item(&mut self, item: TrackingItem) {
        self.shared
            .state
            .send_modify(|state| state.selected_item = Some(item));
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.shared
            .state
            .send_modify(|state| state.view_mode = view_mode);
    }
}
