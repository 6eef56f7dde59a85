pub mod property;
pub mod viewport;

pub use property::{parse_feed, sample_properties, Property};
pub use viewport::{Coordinate, Viewport, DEFAULT_CENTER, DEFAULT_ZOOM, SEARCH_ZOOM};
