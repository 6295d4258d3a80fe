//! A render target that records everything it is told.
//!
//! Useful for tests and for headless use where the caller inspects the
//! resulting rows directly.

use crate::pagination::{LoadMoreView, PageControl};
use crate::render::{CardView, DetailView, RenderTarget};

#[derive(Debug, Clone, Default)]
pub struct MemoryTarget {
    pub cards: Vec<CardView>,
    /// Number of times the grid was cleared
    pub clears: usize,
    /// `(title, hint)` while the empty state is shown
    pub empty_state: Option<(String, String)>,
    pub results_count: Option<String>,
    pub controls: Vec<PageControl>,
    pub load_more: LoadMoreView,
    pub loading: bool,
    /// Every loading transition, in order
    pub loading_history: Vec<bool>,
    pub error: Option<String>,
    pub announcements: Vec<String>,
    pub details: Vec<DetailView>,
}

impl RenderTarget for MemoryTarget {
    fn clear_cards(&mut self) {
        self.cards.clear();
        self.empty_state = None;
        self.clears += 1;
    }

    fn append_cards(&mut self, cards: Vec<CardView>) {
        self.empty_state = None;
        self.cards.extend(cards);
    }

    fn show_empty_state(&mut self, title: &str, hint: &str) {
        self.cards.clear();
        self.empty_state = Some((title.to_string(), hint.to_string()));
    }

    fn set_results_count(&mut self, text: &str) {
        self.results_count = Some(text.to_string());
    }

    fn set_pagination(&mut self, controls: &[PageControl], load_more: LoadMoreView) {
        self.controls = controls.to_vec();
        self.load_more = load_more;
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        self.loading_history.push(loading);
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    fn hide_error(&mut self) {
        self.error = None;
    }

    fn announce(&mut self, message: &str) {
        self.announcements.push(message.to_string());
    }

    fn show_details(&mut self, details: &DetailView) {
        self.details.push(details.clone());
    }
}
