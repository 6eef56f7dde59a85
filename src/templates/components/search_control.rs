use crate::map::SearchControl;
use maud::{html, Markup};

pub fn search_control(control: &SearchControl) -> Markup {
    html! {
        div class="leaflet-control-search" data-position=(control.position()) {
            div class="map-search-box" {
                input
                    type="text"
                    id="map-search"
                    name="q"
                    placeholder=(control.placeholder())
                    value=(control.text())
                    autocomplete="off"
                    hx-get="/map/search"
                    hx-trigger="keyup[key=='Enter']"
                    hx-target="#map-search-result"
                    hx-swap="innerHTML";
            }
            div id="map-search-result" {}
        }
    }
}
