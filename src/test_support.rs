// Test support utilities for both unit and integration tests

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::omdb::{Lookup, MovieLookup, OmdbError};

/// Scripted movie lookup for testing
///
/// Pops queued outcomes instead of calling OMDb, and records the titles
/// it was asked for.
pub struct MockMovieLookup {
    responses: Mutex<VecDeque<Result<Lookup, OmdbError>>>,
    requests: Mutex<Vec<String>>,
}

impl Default for MockMovieLookup {
    fn default() -> Self {
        MockMovieLookup {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }
}

impl MockMovieLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the outcome for the next lookup.
    pub fn enqueue(&self, response: Result<Lookup, OmdbError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Titles looked up so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl MovieLookup for MockMovieLookup {
    async fn find_by_title(&self, title: &str) -> Result<Lookup, OmdbError> {
        self.requests.lock().unwrap().push(title.to_string());

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Lookup::NotFound("no scripted response".to_string())))
    }
}
