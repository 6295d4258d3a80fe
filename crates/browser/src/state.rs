//! Explicit application state and the load cycle.
//!
//! Every handler receives `&mut AppState` and returns the `LoadTicket` to
//! execute. A ticket captures the generation at which it was issued; only
//! the ticket matching the latest generation may change the result set, so
//! a slow response can never overwrite a newer one.
//!
//! Per-cycle state machine:
//!
//! ```text
//! Idle -> Loading -> Success -> Idle
//!                 -> Failure -> ErrorShown -> Loading (retry)
//! ```

use api_client::FetchError;
use catalog::{CharacterPage, CharacterRecord, FilterState, PageInfo};
use tracing::{debug, info, warn};

/// Whether a load replaces the visible results or extends them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    Replace,
    Append,
}

/// Where the browser is in its current load cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    ErrorShown,
}

/// A load that has been started but not yet applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub mode: LoadMode,
    /// Snapshot of the filters the request must be built from
    pub filters: FilterState,
}

/// Result of applying a response to the state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Records were merged; `added` is the size of the fetched page
    Loaded { mode: LoadMode, added: usize },
    /// The load failed and the result set was cleared
    Failed(FetchError),
    /// A newer load was started after this one; the response was dropped
    Stale,
}

/// All mutable state of one browsing session
#[derive(Debug, Clone)]
pub struct AppState {
    pub filters: FilterState,
    /// Records currently displayed, in API order
    pub characters: Vec<CharacterRecord>,
    /// Metadata of the last successful response
    pub page_info: Option<PageInfo>,
    pub error: Option<FetchError>,
    loading: bool,
    phase: LoadPhase,
    generation: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_filters(FilterState::new())
    }

    pub fn with_filters(filters: FilterState) -> Self {
        Self {
            filters,
            characters: Vec::new(),
            page_info: None,
            error: None,
            loading: false,
            phase: LoadPhase::Idle,
            generation: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Total pages reported by the API, 1 before the first response
    pub fn total_pages(&self) -> u32 {
        self.page_info.as_ref().map(|info| info.pages).unwrap_or(1)
    }

    /// Total matching records reported by the API
    pub fn total_count(&self) -> u32 {
        self.page_info.as_ref().map(|info| info.count).unwrap_or(0)
    }

    pub fn has_next(&self) -> bool {
        self.page_info.as_ref().is_some_and(PageInfo::has_next)
    }

    /// Back to page 1 with an empty result set
    pub fn reset_pagination(&mut self) {
        self.filters.page = 1;
        self.characters.clear();
    }

    /// Start a load cycle.
    ///
    /// Raises the loading flag, clears the previous error and bumps the
    /// generation so any load still in flight becomes stale.
    pub fn begin_load(&mut self, mode: LoadMode) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        self.phase = LoadPhase::Loading;
        self.error = None;

        debug!(
            "Load #{} started ({:?}, page {})",
            self.generation, mode, self.filters.page
        );

        LoadTicket {
            generation: self.generation,
            mode,
            filters: self.filters.clone(),
        }
    }

    /// Apply the response of a load.
    ///
    /// ## Algorithm
    /// 1. Drop the response if a newer ticket exists
    /// 2. Clear the loading flag (whatever the outcome)
    /// 3. On success: extend (Append) or replace (Replace) the records,
    ///    record PageInfo and clamp the page into `[1, pages]`
    /// 4. On failure: keep the error and clear the records
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<CharacterPage, FetchError>,
    ) -> LoadOutcome {
        if ticket.generation != self.generation {
            debug!(
                "Discarding stale response for load #{} (latest is #{})",
                ticket.generation, self.generation
            );
            return LoadOutcome::Stale;
        }

        self.loading = false;

        match result {
            Ok(page) => {
                let added = page.results.len();
                match ticket.mode {
                    LoadMode::Append => self.characters.extend(page.results),
                    LoadMode::Replace => self.characters = page.results,
                }

                if page.info.pages > 0 {
                    self.filters.page = self.filters.page.clamp(1, page.info.pages);
                }
                info!(
                    "Loaded {} characters ({} shown, {} total)",
                    added,
                    self.characters.len(),
                    page.info.count
                );
                self.page_info = Some(page.info);
                self.phase = LoadPhase::Idle;

                LoadOutcome::Loaded {
                    mode: ticket.mode,
                    added,
                }
            }
            Err(err) => {
                warn!("Load #{} failed: {}", ticket.generation, err);
                self.characters.clear();
                self.error = Some(err.clone());
                self.phase = LoadPhase::ErrorShown;
                LoadOutcome::Failed(err)
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
