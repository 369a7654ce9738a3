// Observable view state and the filtered projection
use crate::domain::tracking_item::TrackingItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Map,
}

/// Everything the list and map screens render.
///
/// `filtered` is always recomputed from `items`, `search_text` and
/// `sort_ascending`; it is never patched in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    /// Full fetched set, newest first.
    pub items: Vec<TrackingItem>,
    pub filtered: Vec<TrackingItem>,
    pub search_text: String,
    pub sort_ascending: bool,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub view_mode: ViewMode,
    /// Not required to be a member of `filtered`.
    pub selected_item: Option<TrackingItem>,
}

impl ViewState {
    pub(crate) fn refresh_filtered(&mut self) {
        self.filtered = project(&self.items, &self.search_text, self.sort_ascending);
    }
}

/// Filter `items` by `search_text` and sort by `last_updated`.
///
/// An empty search passes everything through. Otherwise an item matches when
/// its plate number, driver name or location contains the text, ignoring case.
pub fn project(items: &[TrackingItem], search_text: &str, ascending: bool) -> Vec<TrackingItem> {
    let mut filtered: Vec<TrackingItem> = if search_text.is_empty() {
        items.to_vec()
    } else {
        let needle = search_text.to_lowercase();
        items
            .iter()
            .filter(|item| matches_search(item, &needle))
            .cloned()
            .collect()
    };

    if ascending {
        filtered.sort_by(|a, b| a.last_updated.cmp(&b.last_updated));
    } else {
        filtered.sort_by(|a, b| b.last_updated.cmp(&a.last_updated));
    }

    filtered
}

/// `needle` must already be lower-case.
fn matches_search(item: &TrackingItem, needle: &str) -> bool {
    [&item.plate_no, &item.driver_name, &item.location]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}
