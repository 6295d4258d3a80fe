//! User-action handlers.
//!
//! Each handler mutates the explicit `AppState` and returns the load it
//! requires, or `None` when the action is not available (out-of-range page,
//! "load more" while loading, ...). Handlers never perform I/O, so every
//! transition can be tested without a network or a UI.

use catalog::{Gender, Status};
use tracing::debug;

use crate::render::DetailView;
use crate::state::{AppState, LoadMode, LoadTicket};

/// Explicit search (Enter or the search button): applies the trimmed term
pub fn on_search(state: &mut AppState, text: &str) -> LoadTicket {
    state.filters.name = text.trim().to_string();
    state.reset_pagination();
    state.begin_load(LoadMode::Replace)
}

/// A debounced, settled search term from search-as-you-type
pub fn on_live_search(state: &mut AppState, text: &str) -> LoadTicket {
    state.filters.name = text.to_string();
    state.reset_pagination();
    state.begin_load(LoadMode::Replace)
}

/// Status or gender selection changed
pub fn on_filter_change(
    state: &mut AppState,
    status: Option<Status>,
    gender: Option<Gender>,
) -> LoadTicket {
    state.filters.status = status;
    state.filters.gender = gender;
    state.reset_pagination();
    state.begin_load(LoadMode::Replace)
}

/// A numbered pagination control was activated
pub fn on_page_selected(state: &mut AppState, page: u32) -> Option<LoadTicket> {
    if page < 1 || page > state.total_pages() {
        debug!("Ignoring page {} (have {})", page, state.total_pages());
        return None;
    }
    state.reset_pagination();
    state.filters.page = page;
    Some(state.begin_load(LoadMode::Replace))
}

pub fn on_previous(state: &mut AppState) -> Option<LoadTicket> {
    if state.filters.page <= 1 {
        return None;
    }
    state.filters.page -= 1;
    Some(state.begin_load(LoadMode::Replace))
}

pub fn on_next(state: &mut AppState) -> Option<LoadTicket> {
    if state.filters.page >= state.total_pages() {
        return None;
    }
    state.filters.page += 1;
    Some(state.begin_load(LoadMode::Replace))
}

/// "Load more": fetch the following page and append it.
///
/// Gated by the loading flag and by the API reporting a next page.
pub fn on_load_more(state: &mut AppState) -> Option<LoadTicket> {
    if state.is_loading() {
        debug!("Load more ignored while a load is in flight");
        return None;
    }
    if !state.has_next() {
        return None;
    }
    state.filters.page += 1;
    Some(state.begin_load(LoadMode::Append))
}

/// Retry after an error: reload the current filters and page
pub fn on_retry(state: &mut AppState) -> LoadTicket {
    state.error = None;
    state.begin_load(LoadMode::Replace)
}

/// A card was clicked or activated from the keyboard
pub fn on_card_activated(state: &AppState, index: usize) -> Option<DetailView> {
    state.characters.get(index).map(DetailView::from_record)
}
