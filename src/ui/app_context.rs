use std::sync::Arc;

use crate::config::Config;
use crate::omdb::{MovieLookup, OmdbClient};

#[derive(Clone)]
pub struct AppContext {
    pub lookup: Arc<dyn MovieLookup>,
    pub config: Config,
}

impl AppContext {
    pub fn from_env() -> Self {
        let config = Config::load();
        let client = OmdbClient::with_base_url(
            config.omdb_api_key.clone().unwrap_or_default(),
            config.omdb_base_url.clone(),
        );

        AppContext {
            lookup: Arc::new(client),
            config,
        }
    }
}
