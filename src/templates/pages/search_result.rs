use crate::map::{MapWidget, SearchState};
use crate::templates::components::notification;
use maud::{html, Markup, PreEscaped};

/// Fragment swapped into `#map-search-result` after a search settles.
pub fn search_result_fragment(map: &MapWidget, state: SearchState) -> Markup {
    let hit = map.markers().iter().rev().find(|m| m.is_search());

    html! {
        @match (state, hit) {
            (SearchState::Found, Some(marker)) => {
                div class="search-hit"
                    data-lat=(marker.position.lat)
                    data-lng=(marker.position.lng)
                    data-zoom=(map.viewport().zoom)
                {
                    (PreEscaped(&marker.popup))
                }
            }
            _ => {
                @for note in map.notifications() {
                    (notification(note))
                }
            }
        }
    }
}
