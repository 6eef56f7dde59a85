//! Single-threaded driver for a mounted map.
//!
//! DOM events are handled one at a time. A search lookup runs as a local task
//! and is joined back on the same logical thread as every other event. Nothing
//! is cancelled: when searches overlap, whichever resolves last owns the
//! viewport.

use crate::geocode::Geocoder;
use crate::map::search::SearchId;
use crate::map::{Dispatch, DomEvent, MapWidget, PendingSearch, SearchResolution, SearchState};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinSet};
use tracing::debug;

pub struct MapPage {
    widget: MapWidget,
    geocoder: Arc<dyn Geocoder>,
    lookups: JoinSet<SearchResolution>,
}

impl MapPage {
    pub fn new(widget: MapWidget, geocoder: Arc<dyn Geocoder>) -> Self {
        Self {
            widget,
            geocoder,
            lookups: JoinSet::new(),
        }
    }

    pub fn widget(&self) -> &MapWidget {
        &self.widget
    }

    fn searching(&self) -> bool {
        self.widget.search_state() == SearchState::Pending
    }

    /// Dispatches one event and returns right away. If the event submitted a
    /// search, its lookup is spawned and the search id returned.
    ///
    /// Must be called inside a `tokio::task::LocalSet`.
    pub fn handle_event(&mut self, event: DomEvent) -> Option<SearchId> {
        match self.widget.dispatch(event) {
            Dispatch::Search(pending) => Some(self.spawn_lookup(pending)),
            Dispatch::Handled | Dispatch::Ignored => None,
        }
    }

    fn spawn_lookup(&mut self, pending: PendingSearch) -> SearchId {
        let id = pending.id();
        let geocoder = Arc::clone(&self.geocoder);
        self.lookups
            .spawn_local(async move { pending.resolve(geocoder.as_ref()).await });
        id
    }

    /// Waits for the next lookup to finish and applies it.
    /// `None` when nothing is outstanding.
    pub async fn next_completion(&mut self) -> Option<SearchState> {
        if !self.searching() {
            return None;
        }
        let joined = self.lookups.join_next().await?;
        Some(self.settle(joined))
    }

    fn settle(&mut self, joined: Result<SearchResolution, JoinError>) -> SearchState {
        match joined {
            Ok(resolution) => self.widget.apply(resolution),
            // The task panicked or was aborted, so its search never resolved.
            Err(e) => self.widget.abandon_search(&e.to_string()),
        }
    }

    /// Processes events until the stream closes and every outstanding search
    /// has been applied, then hands back the widget.
    pub async fn run(mut self, mut events: mpsc::UnboundedReceiver<DomEvent>) -> MapWidget {
        let mut events_open = true;

        while events_open || self.searching() {
            let searching = self.searching();
            tokio::select! {
                event = events.recv(), if events_open => match event {
                    Some(event) => {
                        self.handle_event(event);
                    }
                    None => {
                        debug!(
                            in_flight = self.widget.searches_in_flight(),
                            "event stream closed"
                        );
                        events_open = false;
                    }
                },
                Some(joined) = self.lookups.join_next(), if searching => {
                    self.settle(joined);
                }
                else => break,
            }
        }

        self.widget
    }
}
