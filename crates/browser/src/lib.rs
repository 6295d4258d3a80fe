//! Character browser: filter, fetch, render and paginate.
//!
//! This crate provides:
//! - AppState, the explicit state every handler works on
//! - Handlers for search, filters, pagination, "load more" and retry
//! - Renderer and the RenderTarget trait for drawing cards
//! - Pagination controls and the search-as-you-type debouncer
//! - BrowserSession, which ties a CharacterSource to a RenderTarget
//!
//! ## Architecture
//! A user action runs through the same stages every time:
//! 1. A handler mutates AppState and issues a LoadTicket
//! 2. The CharacterSource fetches the page for the ticket's filters
//! 3. AppState applies the response (newest ticket wins)
//! 4. The Renderer and pagination controls update the target
//!
//! ## Example Usage
//! ```ignore
//! use api_client::{ApiClient, DEFAULT_API_URL};
//! use browser::{BrowserConfig, BrowserSession, MemoryTarget};
//!
//! let client = ApiClient::new(DEFAULT_API_URL)?;
//! let mut session = BrowserSession::new(client, MemoryTarget::default(), BrowserConfig::default());
//!
//! session.start().await;
//! session.search("rick").await;
//! session.load_more().await;
//! println!("{:?}", session.target().results_count);
//! ```

pub mod config;
pub mod debounce;
pub mod handlers;
pub mod memory;
pub mod pagination;
pub mod render;
pub mod session;
pub mod state;

#[cfg(test)]
mod testing;

// Re-export main types
pub use config::BrowserConfig;
pub use debounce::SearchDebouncer;
pub use memory::MemoryTarget;
pub use pagination::{build_controls, ControlKind, LoadMoreView, PageControl};
pub use render::{CardView, DetailView, RenderTarget, Renderer};
pub use session::BrowserSession;
pub use state::{AppState, LoadMode, LoadOutcome, LoadPhase, LoadTicket};
