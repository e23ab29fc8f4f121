use tracing::debug;

use crate::models::Movie;
use crate::omdb::Lookup;

/// State behind the find-movie form, kept out of the component so the
/// whole flow is testable without a running UI.
///
/// Every search is issued a monotonically increasing ticket. A response
/// only applies if its ticket is still the latest issued, so a slow
/// response can never overwrite the outcome of a search started after
/// it.
#[derive(Debug, Default)]
pub struct SearchForm {
    query: String,
    result: Option<Movie>,
    error: bool,
    in_flight: Option<u64>,
    next_ticket: u64,
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn result(&self) -> Option<&Movie> {
        self.result.as_ref()
    }

    /// True when the last completed search found nothing.
    pub fn error(&self) -> bool {
        self.error
    }

    /// True while the latest issued search is still outstanding.
    pub fn loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Only an empty query blocks submission.
    pub fn can_submit(&self) -> bool {
        !self.query.is_empty()
    }

    /// Typing clears the error indicator but never an existing preview.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.error = false;
    }

    /// Start a search for the current query. Returns the ticket and the
    /// title to look up, or None when the query is empty.
    pub fn begin_search(&mut self) -> Option<(u64, String)> {
        if self.query.is_empty() {
            return None;
        }

        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.in_flight = Some(ticket);
        debug!("Search {} started for '{}'", ticket, self.query);

        Some((ticket, self.query.clone()))
    }

    /// Apply a lookup outcome. Returns false when the ticket is stale,
    /// in which case nothing changes.
    ///
    /// A found movie replaces the preview and clears the error. A
    /// not-found outcome raises the error and deliberately leaves any
    /// earlier preview rendered underneath it.
    pub fn resolve(&mut self, ticket: u64, outcome: Lookup) -> bool {
        if ticket != self.next_ticket {
            debug!("Search {} resolved late, discarding", ticket);
            return false;
        }

        self.in_flight = None;
        match outcome {
            Lookup::Found(payload) => {
                self.result = Some(Movie::from(payload));
                self.error = false;
            }
            Lookup::NotFound(message) => {
                debug!("Search {} found nothing: {}", ticket, message);
                self.error = true;
            }
        }

        true
    }

    /// A search died below the not-found layer (transport, bad body).
    /// The busy indicator still has to come down; everything else stays.
    pub fn fail(&mut self, ticket: u64) {
        if ticket == self.next_ticket {
            self.in_flight = None;
        }
    }

    /// Hand the preview out for insertion into the catalog and reset
    /// the form. The error flag is left alone.
    pub fn take_result(&mut self) -> Option<Movie> {
        let movie = self.result.take()?;
        self.query.clear();
        Some(movie)
    }
}
