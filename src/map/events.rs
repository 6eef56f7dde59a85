use crate::domain::Coordinate;
use crate::map::control::Key;
use crate::map::search::PendingSearch;

/// Where a DOM event landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTarget {
    MapSurface,
    SearchControl,
    /// Index into the widget's marker list.
    Marker(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DomEvent {
    Click { target: EventTarget, at: Coordinate },
    KeyPress { target: EventTarget, key: Key },
    Input { target: EventTarget, value: String },
}

impl DomEvent {
    pub fn click_map(at: Coordinate) -> Self {
        DomEvent::Click {
            target: EventTarget::MapSurface,
            at,
        }
    }

    pub fn type_query(value: impl Into<String>) -> Self {
        DomEvent::Input {
            target: EventTarget::SearchControl,
            value: value.into(),
        }
    }

    pub fn press_enter() -> Self {
        DomEvent::KeyPress {
            target: EventTarget::SearchControl,
            key: Key::Enter,
        }
    }
}

/// Result of handing one event to the widget.
#[derive(Debug)]
pub enum Dispatch {
    /// The event submitted a search; the caller owns running the lookup.
    Search(PendingSearch),
    Handled,
    Ignored,
}
