//! Tunables of the browser.

use std::time::Duration;

/// Browser behaviour that is not part of the filter state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserConfig {
    /// Quiet period before typed input triggers a search
    pub debounce: Duration,
    /// Shortest typed term that triggers a search (empty always does)
    pub min_live_query_len: usize,
    /// Entrance delay added per newly rendered card
    pub reveal_step: Duration,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(500),
            min_live_query_len: 3,
            reveal_step: Duration::from_millis(100),
        }
    }
}
