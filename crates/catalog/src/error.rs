//! Error types for the catalog crate.
//!
//! Filter values come from user input (CLI flags, interactive commands),
//! so parsing them is the only fallible operation here.

use thiserror::Error;

/// Errors that can occur while interpreting user-supplied filter values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A filter field had a value outside its fixed set
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Page numbers start at 1
    #[error("Invalid page number: {0}")]
    InvalidPage(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
