//! Debounce for search-as-you-type.
//!
//! Each keystroke replaces the pending term and restarts the delay. When the
//! delay elapses without new input the term settles, and it is applied only
//! if it is long enough to be useful or empty (which clears the search).

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    delay: Duration,
    min_len: usize,
    pending: Option<(String, Instant)>,
}

impl SearchDebouncer {
    pub fn new(delay: Duration, min_len: usize) -> Self {
        Self {
            delay,
            min_len,
            pending: None,
        }
    }

    /// Whether a settled term should trigger a search
    pub fn accepts(&self, text: &str) -> bool {
        text.is_empty() || text.chars().count() >= self.min_len
    }

    /// Record new input at `now`, cancelling any pending term
    pub fn push(&mut self, text: impl Into<String>, now: Instant) {
        self.pending = Some((text.into(), now));
    }

    /// Drop the pending term, if any
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// When the pending term settles, if there is one
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, at)| *at + self.delay)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the settled term.
    ///
    /// Returns `None` while the delay is still running, and also when the
    /// term settled but is too short (it is dropped in that case).
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let deadline = self.deadline()?;
        if now < deadline {
            return None;
        }
        let (text, _) = self.pending.take()?;
        self.accepts(&text).then_some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(500);

    #[test]
    fn test_settles_after_delay() {
        let mut debouncer = SearchDebouncer::new(DELAY, 3);
        let t0 = Instant::now();

        debouncer.push("rick", t0);
        assert_eq!(debouncer.poll(t0 + Duration::from_millis(499)), None);
        assert_eq!(debouncer.poll(t0 + DELAY), Some("rick".to_string()));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_new_input_restarts_delay() {
        let mut debouncer = SearchDebouncer::new(DELAY, 3);
        let t0 = Instant::now();

        debouncer.push("ric", t0);
        debouncer.push("rick", t0 + Duration::from_millis(300));

        assert_eq!(debouncer.poll(t0 + DELAY), None);
        assert_eq!(
            debouncer.poll(t0 + Duration::from_millis(800)),
            Some("rick".to_string())
        );
    }

    #[test]
    fn test_short_terms_are_dropped_but_empty_clears() {
        let mut debouncer = SearchDebouncer::new(DELAY, 3);
        let t0 = Instant::now();

        debouncer.push("ri", t0);
        assert_eq!(debouncer.poll(t0 + DELAY), None);
        assert!(!debouncer.is_pending(), "short term is consumed, not retried");

        debouncer.push("", t0);
        assert_eq!(debouncer.poll(t0 + DELAY), Some(String::new()));
    }

    #[test]
    fn test_cancel_drops_pending_term() {
        let mut debouncer = SearchDebouncer::new(DELAY, 3);
        let t0 = Instant::now();

        debouncer.push("rick", t0);
        debouncer.cancel();

        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.deadline(), None);
        assert_eq!(debouncer.poll(t0 + DELAY), None);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let debouncer = SearchDebouncer::new(DELAY, 3);
        assert!(!debouncer.accepts("ñú"));
        assert!(debouncer.accepts("ñúa"));
    }
}
