use serde::Serialize;

/// Kathmandu.
pub const DEFAULT_CENTER: Coordinate = Coordinate {
    lat: 27.7172,
    lng: 85.3240,
};
pub const DEFAULT_ZOOM: u8 = 12;
pub const SEARCH_ZOOM: u8 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Center and zoom of the map surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub center: Coordinate,
    pub zoom: u8,
}

impl Viewport {
    pub fn new(center: Coordinate, zoom: u8) -> Self {
        Self { center, zoom }
    }

    /// Moves the view; zoom is capped at `max_zoom`.
    pub fn set_view(&mut self, center: Coordinate, zoom: u8, max_zoom: u8) {
        self.center = center;
        self.zoom = zoom.min(max_zoom);
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_CENTER, DEFAULT_ZOOM)
    }
}
