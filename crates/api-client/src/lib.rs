//! HTTP client for the Rick and Morty character API.
//!
//! This crate provides the fetch side of the browser. It handles:
//! - Building the `/character` URL from a FilterState
//! - Sending exactly one GET per load (no retries, no custom timeout)
//! - Decoding the `{ info, results }` envelope
//! - Classifying failures into `FetchError`

use anyhow::{bail, Context, Result};
use catalog::{CharacterPage, FilterState};
use reqwest::Url;
use tracing::{debug, info, warn};

pub mod error;
pub mod source;

pub use error::FetchError;
pub use source::CharacterSource;

/// Public API root used when no other base URL is configured
pub const DEFAULT_API_URL: &str = "https://rickandmortyapi.com/api";

/// User agent string for API requests
const USER_AGENT_VALUE: &str = concat!("personajes/", env!("CARGO_PKG_VERSION"));

/// Client for the character endpoint.
///
/// Cheap to clone: the inner `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "https://rickandmortyapi.com/api");
    ///   a trailing slash is optional. URLs without a path, such as
    ///   `data:` or `mailto:`, are rejected.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut root = base_url.trim_end_matches('/').to_string();
        root.push('/');
        let base_url = Url::parse(&root)
            .with_context(|| format!("Invalid API base URL: {}", base_url))?;
        if base_url.cannot_be_a_base() {
            bail!("API base URL cannot carry a path: {}", base_url);
        }

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT_VALUE)
            .build()
            .context("Creating HTTP client")?;

        info!("Using character API at {}", base_url);
        Ok(Self { client, base_url })
    }

    /// Build the request URL for a filter state.
    ///
    /// Query values are form-urlencoded, so `rick sanchez` is sent as
    /// `name=rick+sanchez`.
    pub fn character_url(&self, filter: &FilterState) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("character");
        }
        url.query_pairs_mut().extend_pairs(filter.query_pairs());
        url
    }

    /// Get the API root this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get_page(&self, filter: &FilterState) -> Result<CharacterPage, FetchError> {
        let url = self.character_url(filter);
        debug!("Fetching characters from {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!("Request failed before a response arrived: {}", e);
            FetchError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Character API answered {}", status);
            return Err(FetchError::from_status(status));
        }

        let page: CharacterPage = response.json().await?;
        debug!(
            "Received {} characters (page {} of {})",
            page.results.len(),
            filter.page,
            page.info.pages
        );
        Ok(page)
    }
}

impl CharacterSource for ApiClient {
    fn name(&self) -> &str {
        "ApiClient"
    }

    async fn fetch_page(&self, filter: &FilterState) -> Result<CharacterPage, FetchError> {
        self.get_page(filter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Gender, Status};

    #[test]
    fn test_client_creation() {
        let client = ApiClient::new(DEFAULT_API_URL).unwrap();
        assert_eq!(client.base_url().as_str(), "https://rickandmortyapi.com/api/");
        assert!(ApiClient::new("not a url").is_err());
    }

    #[test]
    fn test_rejects_base_without_path() {
        let err = ApiClient::new("data:text/plain,characters").unwrap_err();
        assert!(err.to_string().contains("cannot carry a path"));
        assert!(ApiClient::new("mailto:rick@citadel.example").is_err());
    }

    #[test]
    fn test_character_url_with_filters() {
        let client = ApiClient::new("https://rickandmortyapi.com/api/").unwrap();
        let filter = FilterState::new()
            .with_name("rick sanchez")
            .with_status(Some(Status::Dead))
            .with_gender(Some(Gender::Male))
            .with_page(2);

        assert_eq!(
            client.character_url(&filter).as_str(),
            "https://rickandmortyapi.com/api/character?page=2&name=rick+sanchez&status=dead&gender=male"
        );
    }

    #[test]
    fn test_character_url_without_filters() {
        let client = ApiClient::new(DEFAULT_API_URL).unwrap();
        let url = client.character_url(&FilterState::new());

        assert_eq!(url.path(), "/api/character");
        assert_eq!(url.query(), Some("page=1"));
    }
}
