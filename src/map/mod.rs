pub mod control;
pub mod events;
pub mod host;
pub mod notify;
pub mod search;
mod widget;

pub use control::{Key, SearchControl};
pub use events::{Dispatch, DomEvent, EventTarget};
pub use host::{HostPage, MAP_CONTAINER_ID};
pub use notify::{Notification, NotificationLevel};
pub use search::{PendingSearch, SearchMarkerPolicy, SearchOutcome, SearchResolution, SearchState};
pub use widget::{mount_map, MapError, MapOptions, MapWidget, Marker, MarkerKind, TileLayer};
