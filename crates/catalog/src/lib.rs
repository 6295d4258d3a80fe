//! # Catalog Crate
//!
//! Domain model for the character browser.
//!
//! ## Main Components
//!
//! - **types**: Character records and the pagination envelope (CharacterRecord, PageInfo)
//! - **filter**: FilterState and the query builder
//! - **parser**: Parse user-typed filter values into enums
//! - **locale**: Spanish labels and messages
//! - **error**: Error types for filter parsing
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{FilterState, Status};
//!
//! let filters = FilterState::new()
//!     .with_name("rick")
//!     .with_status(Some(Status::Alive));
//!
//! for (key, value) in filters.query_pairs() {
//!     println!("{key}={value}");
//! }
//! ```

// Public modules
pub mod error;
pub mod filter;
pub mod locale;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use filter::FilterState;
pub use types::{
    // Type aliases and constants
    CharacterId,
    API_PAGE_SIZE,
    // Core types
    CharacterPage,
    CharacterRecord,
    NamedResource,
    PageInfo,
    // Enums
    Gender,
    Status,
};
