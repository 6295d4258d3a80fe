//! Core domain types for the character catalog.
//!
//! This module defines the records returned by the character API and the
//! pagination envelope that wraps them.
//! Key Rust concepts demonstrated here:
//! - Type aliases for domain clarity (CharacterId)
//! - Serde attributes to map wire names onto idiomatic Rust names
//! - Enums with a tolerant fallback variant
//! - Derive macros for common traits

use serde::{Deserialize, Serialize};

use crate::parser;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a character (1..=826 at the time of writing)
pub type CharacterId = u32;

/// Number of records the API returns per page
pub const API_PAGE_SIZE: usize = 20;

// =============================================================================
// Character Attributes
// =============================================================================

/// Life status of a character.
///
/// The API sends `"Alive"`, `"Dead"` and `"unknown"`. Anything else decodes
/// to `Unknown` so a new server-side value never breaks a whole page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Status {
    Alive,
    Dead,
    #[serde(rename = "unknown")]
    Unknown,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Alive, Status::Dead, Status::Unknown];

    /// Lowercase value expected by the `status` query parameter
    pub fn query_value(self) -> &'static str {
        match self {
            Status::Alive => "alive",
            Status::Dead => "dead",
            Status::Unknown => "unknown",
        }
    }
}

impl From<String> for Status {
    fn from(value: String) -> Self {
        parser::parse_status(&value).unwrap_or(Status::Unknown)
    }
}

/// Gender of a character, as reported by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Gender {
    Female,
    Male,
    Genderless,
    #[serde(rename = "unknown")]
    Unknown,
}

impl Gender {
    pub const ALL: [Gender; 4] = [
        Gender::Female,
        Gender::Male,
        Gender::Genderless,
        Gender::Unknown,
    ];

    /// Lowercase value expected by the `gender` query parameter
    pub fn query_value(self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
            Gender::Genderless => "genderless",
            Gender::Unknown => "unknown",
        }
    }
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        parser::parse_gender(&value).unwrap_or(Gender::Unknown)
    }
}

/// A named link to another API resource (origin or last known location)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    /// Empty when the API does not know the resource
    #[serde(default)]
    pub url: String,
}

// =============================================================================
// Character Record
// =============================================================================

/// A single character as returned by `GET /character`.
///
/// Records are immutable once fetched; the browser only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub id: CharacterId,
    pub name: String,
    pub status: Status,
    pub species: String,
    /// Sub-species or type; the wire name is `type`
    #[serde(rename = "type", default)]
    pub kind: String,
    pub gender: Gender,
    pub origin: NamedResource,
    pub location: NamedResource,
    /// URL of the 300x300 avatar
    pub image: String,
    /// URLs of every episode the character appears in
    #[serde(default)]
    pub episode: Vec<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub created: String,
}

impl CharacterRecord {
    /// Number of episodes the character appears in
    pub fn episode_count(&self) -> usize {
        self.episode.len()
    }
}

// =============================================================================
// Pagination Envelope
// =============================================================================

/// Server-reported pagination metadata.
///
/// Never computed locally: `count` and `pages` always come from the response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total number of records matching the filters
    pub count: u32,
    /// Total number of pages
    pub pages: u32,
    /// URL of the next page, `None` on the last page
    pub next: Option<String>,
    /// URL of the previous page, `None` on the first page
    pub prev: Option<String>,
}

impl PageInfo {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// The JSON envelope of a character listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterPage {
    pub info: PageInfo,
    pub results: Vec<CharacterRecord>,
}
