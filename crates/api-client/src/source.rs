//! Core trait for anything that can serve pages of characters.
//!
//! The browser is generic over this trait, so its load cycle can be driven
//! by the HTTP client in production and by in-memory fakes in tests.

use std::future::Future;

use catalog::{CharacterPage, FilterState};

use crate::error::FetchError;

/// A source of character pages.
///
/// ## Design Note
/// - One call is one request: implementations must not retry
/// - The returned future is `Send` so sources can be driven from any runtime
pub trait CharacterSource {
    /// Returns the name of this source (for logging/debugging)
    fn name(&self) -> &str;

    /// Fetch the page selected by `filter`.
    ///
    /// # Returns
    /// * `Ok(CharacterPage)` - The envelope with `info` and `results`
    /// * `Err(FetchError)` - Classified failure
    fn fetch_page(
        &self,
        filter: &FilterState,
    ) -> impl Future<Output = Result<CharacterPage, FetchError>> + Send;
}
