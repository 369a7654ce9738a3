// Presentation layer - Observable view state for list and map screens
pub mod debouncer;
pub mod tracking_coordinator;
pub mod view_state;
