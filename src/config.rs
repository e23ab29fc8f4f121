use tracing::warn;

use crate::omdb;

/// Application configuration
/// In debug builds: loads from .env file first, then the environment
/// In release builds: loads from the environment
#[derive(Clone, Debug)]
pub struct Config {
    /// OMDb API key. Lookups are rejected upstream without one.
    pub omdb_api_key: Option<String>,
    /// OMDb endpoint, overridable for tests
    pub omdb_base_url: String,
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                tracing::info!("Config: Dev mode activated - loaded .env file");
            }
        }

        Self::from_env()
    }

    fn from_env() -> Self {
        let omdb_api_key = std::env::var("MARQUEE_OMDB_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        let omdb_base_url = std::env::var("MARQUEE_OMDB_BASE_URL")
            .unwrap_or_else(|_| omdb::OMDB_BASE_URL.to_string());

        if omdb_api_key.is_none() {
            warn!("Config: No OMDb API key set, searches will fail upstream");
        }

        Self {
            omdb_api_key,
            omdb_base_url,
        }
    }
}
