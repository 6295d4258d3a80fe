//! Pagination controls derived from the API's page count.
//!
//! Controls are plain data; activating one is the job of the handlers
//! (`on_previous`, `on_page_selected`, `on_next`), which always run a
//! Replace-mode load.

use std::ops::RangeInclusive;

use catalog::{locale, PageInfo};

/// Maximum number of numbered controls shown at once
pub const MAX_NUMBERED_CONTROLS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Previous,
    Page,
    Next,
}

/// One button of the pagination bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControl {
    pub kind: ControlKind,
    pub label: String,
    /// Page loaded when the control is activated
    pub target: u32,
    pub disabled: bool,
    /// Marks the current page (aria-current)
    pub active: bool,
    pub aria_label: String,
}

/// State of the "load more" control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadMoreView {
    /// Shown only when the API reports a next page
    pub visible: bool,
    /// Disabled while a load is in flight
    pub disabled: bool,
}

/// Numbered pages shown around `current`.
///
/// ## Algorithm
/// 1. Start two pages before `current`, never before page 1
/// 2. Near the last page, pull the start back so five pages stay visible
/// 3. End four pages after the start, never after `total`
pub fn page_window(current: u32, total: u32) -> RangeInclusive<u32> {
    if total == 0 {
        return 1..=0;
    }
    let span = MAX_NUMBERED_CONTROLS - 1;
    let start = current
        .saturating_sub(2)
        .min(total.saturating_sub(span))
        .max(1);
    let end = (start + span).min(total);
    start..=end
}

/// Build the full pagination bar: previous, numbered window, next
pub fn build_controls(current: u32, total: u32) -> Vec<PageControl> {
    let mut controls = Vec::with_capacity(MAX_NUMBERED_CONTROLS as usize + 2);

    let previous = current.saturating_sub(1).max(1);
    controls.push(PageControl {
        kind: ControlKind::Previous,
        label: locale::PREVIOUS_LABEL.to_string(),
        target: previous,
        disabled: current <= 1,
        active: false,
        aria_label: locale::page_aria_label(previous),
    });

    for page in page_window(current, total) {
        controls.push(PageControl {
            kind: ControlKind::Page,
            label: page.to_string(),
            target: page,
            disabled: false,
            active: page == current,
            aria_label: locale::page_aria_label(page),
        });
    }

    let next = current + 1;
    controls.push(PageControl {
        kind: ControlKind::Next,
        label: locale::NEXT_LABEL.to_string(),
        target: next,
        disabled: current >= total,
        active: false,
        aria_label: locale::page_aria_label(next),
    });

    controls
}

pub fn load_more_view(page_info: Option<&PageInfo>, loading: bool) -> LoadMoreView {
    LoadMoreView {
        visible: page_info.is_some_and(PageInfo::has_next),
        disabled: loading,
    }
}
