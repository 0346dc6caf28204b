//! `SearchCoordinator`: debounce with stale-completion protection.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::catalog::{CatalogStore, Track};

struct Pending {
    generation: u64,
    query: String,
    due: Instant,
}

/// Schedules a catalog lookup a settle delay after each submitted
/// query and guarantees the published results always correspond to the
/// most recently issued query.
///
/// Every `search` bumps a generation counter and replaces the pending
/// lookup wholesale; a completion only applies while its generation is
/// still current. A superseded lookup can therefore fire late without
/// clobbering fresher results.
pub struct SearchCoordinator {
    query: String,
    results: Vec<Track>,
    searching: bool,
    generation: u64,
    pending: Option<Pending>,
    settle: Duration,
}

impl SearchCoordinator {
    pub fn new(settle: Duration) -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            searching: false,
            generation: 0,
            pending: None,
            settle,
        }
    }

    /// The last submitted query, recorded immediately so callers can
    /// echo typed text without lag.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Results of the last lookup that completed.
    pub fn results(&self) -> &[Track] {
        &self.results
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    /// Record `query` and schedule its lookup after the settle delay.
    ///
    /// Returns the generation token identifying this request; any
    /// earlier pending lookup is superseded.
    pub fn search(&mut self, query: &str) -> u64 {
        self.query = query.to_string();
        self.searching = true;
        self.generation += 1;
        self.pending = Some(Pending {
            generation: self.generation,
            query: self.query.clone(),
            due: Instant::now() + self.settle,
        });
        self.generation
    }

    /// Apply the lookup for `generation` if it is still the latest
    /// request. Stale completions are discarded and report `false`.
    pub fn complete(&mut self, generation: u64, store: &CatalogStore) -> bool {
        if generation != self.generation {
            debug!(
                generation,
                current = self.generation,
                "discarding stale search completion"
            );
            return false;
        }
        let Some(pending) = self.pending.take() else {
            return false;
        };
        self.results = filter_tracks(store, &pending.query);
        self.searching = false;
        true
    }

    /// Complete the pending lookup once its settle deadline has passed.
    /// Driven from the event loop's idle arm.
    pub fn poll_due(&mut self, now: Instant, store: &CatalogStore) -> bool {
        match &self.pending {
            Some(p) if now >= p.due => {
                let generation = p.generation;
                self.complete(generation, store)
            }
            _ => false,
        }
    }
}

/// Case-insensitive substring match over title, artist, album and
/// genre. The empty query means "no filter" and matches everything.
fn filter_tracks(store: &CatalogStore, query: &str) -> Vec<Track> {
    let needle = query.to_lowercase();
    store
        .tracks()
        .iter()
        .filter(|t| {
            t.title.to_lowercase().contains(&needle)
                || t.artist.to_lowercase().contains(&needle)
                || t.album.to_lowercase().contains(&needle)
                || t.genre.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
