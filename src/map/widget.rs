// src/map/widget.rs

use crate::domain::{Coordinate, Property, Viewport, DEFAULT_CENTER, DEFAULT_ZOOM, SEARCH_ZOOM};
use crate::geocode::Geocoder;
use crate::map::events::{Dispatch, DomEvent, EventTarget};
use crate::map::host::HostPage;
use crate::map::notify::Notification;
use crate::map::search::{
    PendingSearch, SearchId, SearchMarkerPolicy, SearchOutcome, SearchResolution, SearchState,
};
use crate::map::SearchControl;
use crate::templates::components::{property_popup, search_popup};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, info};

const OSM_TILES: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const OSM_ATTRIBUTION: &str =
    r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("map container #{0} not found")]
    MissingContainer(String),
    #[error("map container #{0} is not visible")]
    HiddenContainer(String),
    #[error("invalid tile layer: {0}")]
    TileLayer(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
    pub max_zoom: u8,
}

impl TileLayer {
    fn validate(&self) -> Result<(), MapError> {
        for placeholder in ["{z}", "{x}", "{y}"] {
            if !self.url_template.contains(placeholder) {
                return Err(MapError::TileLayer(format!(
                    "template {:?} lacks {placeholder}",
                    self.url_template
                )));
            }
        }
        Ok(())
    }
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            url_template: OSM_TILES.to_string(),
            attribution: OSM_ATTRIBUTION.to_string(),
            max_zoom: 18,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MapOptions {
    pub tile_layer: TileLayer,
    pub search_markers: SearchMarkerPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MarkerKind {
    Property { id: i64 },
    Search { search_id: SearchId },
}

/// A point on the map with its popup. Only the popup's open flag changes
/// after placement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: Coordinate,
    pub kind: MarkerKind,
    pub popup: String,
    pub popup_open: bool,
}

impl Marker {
    fn for_property(property: &Property) -> Self {
        Self {
            position: property.coordinate,
            kind: MarkerKind::Property { id: property.id },
            popup: property_popup(property).into_string(),
            popup_open: false,
        }
    }

    pub fn is_search(&self) -> bool {
        matches!(self.kind, MarkerKind::Search { .. })
    }
}

/// Everything the browser needs to draw the current map.
#[derive(Debug, Serialize)]
pub struct MapSnapshot<'a> {
    pub container_id: &'a str,
    pub viewport: Viewport,
    pub tile_layer: &'a TileLayer,
    pub markers: &'a [Marker],
}

type ClickHandler = Box<dyn FnMut(Coordinate)>;

pub struct MapWidget {
    container_id: String,
    viewport: Viewport,
    tile_layer: TileLayer,
    markers: Vec<Marker>,
    search_control: Option<SearchControl>,
    search_markers: SearchMarkerPolicy,
    click_handlers: Vec<ClickHandler>,
    notifications: Vec<Notification>,
    next_search_id: SearchId,
    in_flight: usize,
    last_search: Option<SearchState>,
}

impl MapWidget {
    /// Builds the map inside `container_id`, centered on Kathmandu, with one
    /// marker per property in feed order.
    pub fn initialize(
        host: &HostPage,
        container_id: &str,
        properties: &[Property],
        options: &MapOptions,
    ) -> Result<Self, MapError> {
        let container = host
            .element(container_id)
            .ok_or_else(|| MapError::MissingContainer(container_id.to_string()))?;
        if !container.visible {
            return Err(MapError::HiddenContainer(container_id.to_string()));
        }

        options.tile_layer.validate()?;

        let mut viewport = Viewport::default();
        viewport.set_view(DEFAULT_CENTER, DEFAULT_ZOOM, options.tile_layer.max_zoom);

        let markers: Vec<Marker> = properties.iter().map(Marker::for_property).collect();
        debug!(container_id, markers = markers.len(), "map initialized");

        Ok(Self {
            container_id: container_id.to_string(),
            viewport,
            tile_layer: options.tile_layer.clone(),
            markers,
            search_control: None,
            search_markers: options.search_markers,
            click_handlers: Vec::new(),
            notifications: Vec::new(),
            next_search_id: 1,
            in_flight: 0,
            last_search: None,
        })
    }

    /// Adds the top-left search box. Calling it again keeps the existing one.
    pub fn add_search_control(&mut self) {
        if self.search_control.is_none() {
            self.search_control = Some(SearchControl::new());
        }
    }

    pub fn search_control(&self) -> Option<&SearchControl> {
        self.search_control.as_ref()
    }

    /// Registers a handler for clicks on the map surface itself.
    pub fn on_click(&mut self, handler: impl FnMut(Coordinate) + 'static) {
        self.click_handlers.push(Box::new(handler));
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn tile_layer(&self) -> &TileLayer {
        &self.tile_layer
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Hands queued notifications to the host for display.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Searches submitted but not yet applied.
    pub fn searches_in_flight(&self) -> usize {
        self.in_flight
    }

    /// `Pending` while any search is outstanding, `Idle` otherwise.
    pub fn search_state(&self) -> SearchState {
        if self.in_flight > 0 {
            SearchState::Pending
        } else {
            SearchState::Idle
        }
    }

    /// Terminal state of the most recently applied search.
    pub fn last_search(&self) -> Option<SearchState> {
        self.last_search
    }

    pub fn snapshot(&self) -> MapSnapshot<'_> {
        MapSnapshot {
            container_id: &self.container_id,
            viewport: self.viewport,
            tile_layer: &self.tile_layer,
            markers: &self.markers,
        }
    }

    /// Routes one DOM event. Events aimed at the search control stop there and
    /// never reach the map surface's handlers.
    pub fn dispatch(&mut self, event: DomEvent) -> Dispatch {
        match event {
            DomEvent::Click {
                target: EventTarget::MapSurface,
                at,
            } => {
                self.close_popups();
                for handler in self.click_handlers.iter_mut() {
                    handler(at);
                }
                Dispatch::Handled
            }
            DomEvent::Click {
                target: EventTarget::Marker(index),
                ..
            } => {
                if self.open_popup(index) {
                    Dispatch::Handled
                } else {
                    Dispatch::Ignored
                }
            }
            DomEvent::Click {
                target: EventTarget::SearchControl,
                ..
            } => self.contained(),
            DomEvent::Input {
                target: EventTarget::SearchControl,
                value,
            } => match self.search_control.as_mut() {
                Some(control) => {
                    control.set_text(value);
                    Dispatch::Handled
                }
                None => Dispatch::Ignored,
            },
            DomEvent::KeyPress {
                target: EventTarget::SearchControl,
                key,
            } => {
                let query = match self.search_control.as_mut() {
                    Some(control) => control.key_press(&key),
                    None => return Dispatch::Ignored,
                };
                match query.and_then(|q| self.begin_search(&q)) {
                    Some(pending) => Dispatch::Search(pending),
                    None => Dispatch::Handled,
                }
            }
            DomEvent::Input { .. } | DomEvent::KeyPress { .. } => Dispatch::Ignored,
        }
    }

    fn contained(&self) -> Dispatch {
        if self.search_control.is_some() {
            Dispatch::Handled
        } else {
            Dispatch::Ignored
        }
    }

    /// Opens the popup of marker `index`, closing any other. False if no such marker.
    pub fn open_popup(&mut self, index: usize) -> bool {
        if index >= self.markers.len() {
            return false;
        }
        for (i, marker) in self.markers.iter_mut().enumerate() {
            marker.popup_open = i == index;
        }
        true
    }

    fn close_popups(&mut self) {
        for marker in self.markers.iter_mut() {
            marker.popup_open = false;
        }
    }

    /// Starts a search cycle for `query`. Blank queries start nothing.
    pub fn begin_search(&mut self, query: &str) -> Option<PendingSearch> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        let id = self.next_search_id;
        self.next_search_id += 1;
        self.in_flight += 1;

        debug!(search_id = id, query, "search submitted");
        Some(PendingSearch::new(id, query.to_string()))
    }

    /// Applies a completed lookup and returns its terminal state.
    ///
    /// A found place recenters the map at zoom 15 and drops an open marker on
    /// it; every other outcome leaves viewport and markers alone and queues a
    /// notification.
    pub fn apply(&mut self, resolution: SearchResolution) -> SearchState {
        self.in_flight = self.in_flight.saturating_sub(1);
        let state = resolution.state();

        match resolution.outcome {
            SearchOutcome::Found(hit) => {
                let at = hit.coordinate();
                self.viewport
                    .set_view(at, SEARCH_ZOOM, self.tile_layer.max_zoom);

                if self.search_markers == SearchMarkerPolicy::ReplacePrevious {
                    self.markers.retain(|m| !m.is_search());
                }
                self.close_popups();
                self.markers.push(Marker {
                    position: at,
                    kind: MarkerKind::Search {
                        search_id: resolution.id,
                    },
                    popup: search_popup(&hit.display_name).into_string(),
                    popup_open: true,
                });

                info!(
                    search_id = resolution.id,
                    query = %resolution.query,
                    lat = at.lat,
                    lng = at.lng,
                    "map recentered on search result"
                );
            }
            SearchOutcome::NotFound => {
                info!(search_id = resolution.id, query = %resolution.query, "location not found");
                self.notifications.push(Notification::not_found());
            }
            SearchOutcome::Failed(e) => {
                error!(
                    search_id = resolution.id,
                    query = %resolution.query,
                    error = %e,
                    "error searching location"
                );
                self.notifications.push(Notification::search_failed());
            }
        }

        self.last_search = Some(state);
        state
    }

    /// Settles a search whose lookup died without a result. The user gets
    /// the generic search error.
    pub fn abandon_search(&mut self, reason: &str) -> SearchState {
        self.in_flight = self.in_flight.saturating_sub(1);
        error!(reason, "search lookup aborted");
        self.notifications.push(Notification::search_failed());
        self.last_search = Some(SearchState::Failed);
        SearchState::Failed
    }

    /// Submit, look up, and apply in one go.
    pub async fn search_location(&mut self, geocoder: &dyn Geocoder, query: &str) -> SearchState {
        let Some(pending) = self.begin_search(query) else {
            return SearchState::Idle;
        };
        let resolution = pending.resolve(geocoder).await;
        self.apply(resolution)
    }
}

/// Mounts the map with its search box if the host provides the container.
///
/// A missing container means the page has no map, so nothing happens. Any
/// other initialization failure is logged and swallowed; the page carries on.
pub fn mount_map(
    host: &HostPage,
    container_id: &str,
    properties: &[Property],
    options: &MapOptions,
) -> Option<MapWidget> {
    if host.element(container_id).is_none() {
        debug!(container_id, "no map container on page");
        return None;
    }

    match MapWidget::initialize(host, container_id, properties, options) {
        Ok(mut map) => {
            map.add_search_control();
            Some(map)
        }
        Err(e) => {
            error!(error = %e, "error initializing map");
            None
        }
    }
}
