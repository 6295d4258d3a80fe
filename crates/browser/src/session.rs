//! # Browser Session
//!
//! Coordinates one browsing session end to end:
//! 1. A handler updates the state and issues a `LoadTicket`
//! 2. The loading indicator is raised and any previous error hidden
//! 3. The source fetches the page for the ticket's filters
//! 4. The response is applied to the state (stale ones are dropped)
//! 5. Cards, counter, pagination and announcement are written to the target
//!
//! Loads are awaited one at a time by the session methods. `begin` and
//! `apply` are exposed separately so a driver that overlaps requests still
//! gets newest-wins semantics from the generation counter.

use std::time::Instant;

use api_client::{CharacterSource, FetchError};
use catalog::{locale, CharacterPage, Gender, Status};
use tracing::{debug, info};

use crate::config::BrowserConfig;
use crate::debounce::SearchDebouncer;
use crate::handlers;
use crate::pagination::{build_controls, load_more_view};
use crate::render::{RenderTarget, Renderer};
use crate::state::{AppState, LoadMode, LoadOutcome, LoadTicket};

/// Owns the state, the data source and the render target of one session
pub struct BrowserSession<S, R> {
    source: S,
    target: R,
    state: AppState,
    renderer: Renderer,
    debouncer: SearchDebouncer,
}

impl<S, R> BrowserSession<S, R>
where
    S: CharacterSource,
    R: RenderTarget,
{
    pub fn new(source: S, target: R, config: BrowserConfig) -> Self {
        Self::with_state(source, target, config, AppState::new())
    }

    /// Start from an existing state, e.g. filters given on the command line
    pub fn with_state(source: S, target: R, config: BrowserConfig, state: AppState) -> Self {
        debug!("Browser session over {}", source.name());
        Self {
            source,
            target,
            state,
            renderer: Renderer::new(config.reveal_step),
            debouncer: SearchDebouncer::new(config.debounce, config.min_live_query_len),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn target(&self) -> &R {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut R {
        &mut self.target
    }

    // ------------------------------------------------------------------------
    // Load cycle
    // ------------------------------------------------------------------------

    /// Run a handler against the state and show the loading indicator
    pub fn begin<F>(&mut self, handler: F) -> Option<LoadTicket>
    where
        F: FnOnce(&mut AppState) -> Option<LoadTicket>,
    {
        let ticket = handler(&mut self.state)?;
        self.show_loading();
        Some(ticket)
    }

    fn show_loading(&mut self) {
        self.target.hide_error();
        self.target.set_loading(true);
        self.refresh_pagination();
    }

    /// Fetch and apply one ticket
    pub async fn execute(&mut self, ticket: LoadTicket) -> LoadOutcome {
        let result = self.source.fetch_page(&ticket.filters).await;
        self.apply(ticket, result)
    }

    /// Apply a response and update the target accordingly
    pub fn apply(
        &mut self,
        ticket: LoadTicket,
        result: Result<CharacterPage, FetchError>,
    ) -> LoadOutcome {
        let outcome = self.state.complete_load(ticket, result);

        match &outcome {
            LoadOutcome::Stale => return outcome,
            LoadOutcome::Loaded { mode, added } => {
                self.renderer
                    .render(&mut self.target, &self.state.characters, *mode, *added);
                self.target.set_results_count(&locale::results_count(
                    self.state.characters.len(),
                    self.state.total_count(),
                ));
                self.target.announce(&locale::loaded_announcement(
                    *added,
                    self.state.total_count(),
                ));
            }
            LoadOutcome::Failed(err) => {
                self.target.show_error(&err.user_message());
                self.target.clear_cards();
                self.target
                    .show_empty_state(locale::EMPTY_STATE_TITLE, locale::EMPTY_STATE_HINT);
            }
        }

        self.target.set_loading(false);
        self.refresh_pagination();
        outcome
    }

    async fn run<F>(&mut self, handler: F) -> Option<LoadOutcome>
    where
        F: FnOnce(&mut AppState) -> Option<LoadTicket>,
    {
        let ticket = self.begin(handler)?;
        Some(self.execute(ticket).await)
    }

    /// Like `run`, for handlers that always issue a load
    async fn run_always<F>(&mut self, handler: F) -> LoadOutcome
    where
        F: FnOnce(&mut AppState) -> LoadTicket,
    {
        let ticket = handler(&mut self.state);
        self.show_loading();
        self.execute(ticket).await
    }

    fn refresh_pagination(&mut self) {
        let controls = build_controls(self.state.filters.page, self.state.total_pages());
        let load_more = load_more_view(self.state.page_info.as_ref(), self.state.is_loading());
        self.target.set_pagination(&controls, load_more);
    }

    // ------------------------------------------------------------------------
    // User actions
    // ------------------------------------------------------------------------

    /// Initial load of the current filters
    pub async fn start(&mut self) -> LoadOutcome {
        info!("Loading characters for {:?}", self.state.filters);
        self.run_always(|state| state.begin_load(LoadMode::Replace))
            .await
    }

    /// Explicit search; supersedes any typed input still waiting to settle
    pub async fn search(&mut self, text: &str) -> LoadOutcome {
        self.debouncer.cancel();
        self.run_always(|state| handlers::on_search(state, text))
            .await
    }

    /// Feed one keystroke's worth of input to the debouncer
    pub fn type_text(&mut self, text: &str, now: Instant) {
        self.debouncer.push(text, now);
    }

    /// When pending typed input settles
    pub fn live_search_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Run the live search if the typed input has settled by `now`
    pub async fn settle_live_search(&mut self, now: Instant) -> Option<LoadOutcome> {
        let text = self.debouncer.poll(now)?;
        Some(
            self.run_always(|state| handlers::on_live_search(state, &text))
                .await,
        )
    }

    pub async fn change_filters(
        &mut self,
        status: Option<Status>,
        gender: Option<Gender>,
    ) -> LoadOutcome {
        self.run_always(|state| handlers::on_filter_change(state, status, gender))
            .await
    }

    pub async fn select_page(&mut self, page: u32) -> Option<LoadOutcome> {
        self.run(|state| handlers::on_page_selected(state, page)).await
    }

    pub async fn previous(&mut self) -> Option<LoadOutcome> {
        self.run(handlers::on_previous).await
    }

    pub async fn next(&mut self) -> Option<LoadOutcome> {
        self.run(handlers::on_next).await
    }

    pub async fn load_more(&mut self) -> Option<LoadOutcome> {
        self.run(handlers::on_load_more).await
    }

    pub async fn retry(&mut self) -> LoadOutcome {
        self.run_always(handlers::on_retry).await
    }

    /// Show the detail view of the `index`-th card; false if there is none
    pub fn activate_card(&mut self, index: usize) -> bool {
        match handlers::on_card_activated(&self.state, index) {
            Some(details) => {
                self.target.show_details(&details);
                true
            }
            None => false,
        }
    }
}
