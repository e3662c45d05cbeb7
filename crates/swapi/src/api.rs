//! REST client for the people listing.
//!
//! Issues a single `GET` against a fixed listing URL using [`reqwest`].
//! No retries and no client-side timeout are applied.

use rowboard_core::Character;
use serde::Deserialize;

/// Listing endpoint used when no override is configured.
pub const DEFAULT_PEOPLE_URL: &str = "https://swapi.py4e.com/api/people/";

/// Body of a successful listing response.
///
/// Only `results` is read; paging fields and anything else are ignored.
/// A body without `results` is an empty listing.
#[derive(Debug, Deserialize)]
pub struct PeopleResponse {
    #[serde(default)]
    pub results: Vec<Character>,
}

/// Errors from the people listing client.
#[derive(Debug, thiserror::Error)]
pub enum SwapiError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status code.
    #[error("Network response was not ok (HTTP {status})")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// HTTP client bound to one listing URL.
pub struct SwapiClient {
    client: reqwest::Client,
    people_url: String,
}

impl SwapiClient {
    /// Create a client for the given listing URL.
    pub fn new(people_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            people_url: people_url.into(),
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, people_url: impl Into<String>) -> Self {
        Self {
            client,
            people_url: people_url.into(),
        }
    }

    pub fn people_url(&self) -> &str {
        &self.people_url
    }

    /// Fetch the listing once.
    pub async fn fetch_people(&self) -> Result<PeopleResponse, SwapiError> {
        tracing::debug!(url = %self.people_url, "Requesting people listing");

        let response = self.client.get(&self.people_url).send().await?;
        let response = Self::ensure_success(response).await?;
        let people = response.json::<PeopleResponse>().await?;

        tracing::debug!(count = people.results.len(), "People listing received");
        Ok(people)
    }

    // ---- private helpers ----

    /// Turn a non-2xx response into [`SwapiError::ApiError`], keeping the
    /// body text for diagnostics.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, SwapiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(SwapiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

impl Default for SwapiClient {
    fn default() -> Self {
        Self::new(DEFAULT_PEOPLE_URL)
    }
}
