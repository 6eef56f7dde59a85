use crate::geocode::{GeocodeCandidate, GeocodeError, Geocoder};
use std::str::FromStr;

pub type SearchId = u64;

/// Lifecycle of one search: `Idle -> Pending -> {Found, NotFound, Failed} -> Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Pending,
    Found,
    NotFound,
    Failed,
}

/// What happens to the previous search marker when a new search succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMarkerPolicy {
    /// Every successful search leaves its marker on the map.
    #[default]
    Accumulate,
    /// Only the latest search marker is kept.
    ReplacePrevious,
}

impl FromStr for SearchMarkerPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "accumulate" => Ok(SearchMarkerPolicy::Accumulate),
            "replace" => Ok(SearchMarkerPolicy::ReplacePrevious),
            other => Err(format!("unknown search marker policy {other:?}")),
        }
    }
}

/// A submitted search whose lookup has not completed yet.
///
/// Resolving consumes it, so a search can complete at most once.
#[derive(Debug)]
#[must_use = "a pending search does nothing until it is resolved"]
pub struct PendingSearch {
    id: SearchId,
    query: String,
}

impl PendingSearch {
    pub(crate) fn new(id: SearchId, query: String) -> Self {
        Self { id, query }
    }

    pub fn id(&self) -> SearchId {
        self.id
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Runs the lookup. Only the first candidate is kept.
    pub async fn resolve(self, geocoder: &dyn Geocoder) -> SearchResolution {
        let outcome = match geocoder.lookup(&self.query).await {
            Ok(candidates) => match candidates.into_iter().next() {
                Some(first) => SearchOutcome::Found(first),
                None => SearchOutcome::NotFound,
            },
            Err(e) => SearchOutcome::Failed(e),
        };

        SearchResolution {
            id: self.id,
            query: self.query,
            outcome,
        }
    }
}

#[derive(Debug)]
pub enum SearchOutcome {
    Found(GeocodeCandidate),
    NotFound,
    Failed(GeocodeError),
}

/// A completed lookup, ready to be applied to the widget that issued it.
#[derive(Debug)]
pub struct SearchResolution {
    pub id: SearchId,
    pub query: String,
    pub outcome: SearchOutcome,
}

impl SearchResolution {
    pub fn state(&self) -> SearchState {
        match self.outcome {
            SearchOutcome::Found(_) => SearchState::Found,
            SearchOutcome::NotFound => SearchState::NotFound,
            SearchOutcome::Failed(_) => SearchState::Failed,
        }
    }
}
