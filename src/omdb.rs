use async_trait::async_trait;
use reqwest::{Client, Error as ReqwestError};
use serde::Deserialize;
use thiserror::Error;

pub const OMDB_BASE_URL: &str = "https://www.omdbapi.com";

#[derive(Error, Debug)]
pub enum OmdbError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("API rate limit exceeded")]
    RateLimit,
    #[error("Invalid API key")]
    InvalidApiKey,
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Raw movie fields as OMDb sends them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MoviePayload {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Plot", default)]
    pub plot: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
}

/// Outcome of a by-title lookup.
///
/// OMDb signals "no such movie" in-band: a 200 response whose body
/// carries an `Error` key instead of movie fields.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(MoviePayload),
    NotFound(String),
}

/// Seam between the UI and the concrete OMDb client, so components and
/// tests can inject the lookup.
#[async_trait]
pub trait MovieLookup: Send + Sync {
    async fn find_by_title(&self, title: &str) -> Result<Lookup, OmdbError>;
}

pub struct OmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OmdbClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, OMDB_BASE_URL)
    }

    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.into(),
        }
    }
}

/// Split a 200 body into found/not-found on the presence of the
/// `Error` key.
fn classify_body(body: serde_json::Value) -> Result<Lookup, OmdbError> {
    if let Some(message) = body.get("Error").and_then(|e| e.as_str()) {
        return Ok(Lookup::NotFound(message.to_string()));
    }

    let payload: MoviePayload = serde_json::from_value(body)?;
    Ok(Lookup::Found(payload))
}

#[async_trait]
impl MovieLookup for OmdbClient {
    async fn find_by_title(&self, title: &str) -> Result<Lookup, OmdbError> {
        let url = format!("{}/", self.base_url);

        let params = [("apikey", self.api_key.as_str()), ("t", title)];

        let response = self
            .client
            .get(&url)
            .query(&params)
            .header("User-Agent", "marquee/0.1")
            .send()
            .await?;

        if response.status().is_success() {
            let body: serde_json::Value = response.json().await?;
            classify_body(body)
        } else if response.status() == 429 {
            Err(OmdbError::RateLimit)
        } else if response.status() == 401 {
            Err(OmdbError::InvalidApiKey)
        } else {
            Err(OmdbError::Request(
                response.error_for_status().unwrap_err(),
            ))
        }
    }
}
