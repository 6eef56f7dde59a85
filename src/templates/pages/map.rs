// templates/pages/map.rs

use crate::map::MapWidget;
use crate::templates::components::{map_script, search_control};
use crate::templates::desktop_layout;
use maud::{html, Markup, PreEscaped};

/// Widget state as JSON, safe to inline in a `<script>` element.
pub fn map_bootstrap_json(map: &MapWidget) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(&map.snapshot())?;
    Ok(json.replace("</", "<\\/"))
}

/// The listing map. Without a mounted widget the rest of the page still renders.
pub fn map_page(map: Option<&MapWidget>) -> Result<Markup, serde_json::Error> {
    let bootstrap = map.map(map_bootstrap_json).transpose()?;

    Ok(desktop_layout(
        "Map",
        html! {
            section class="map-section" {
                h1 { "Find commercial space in Nepal" }

                @match (map, bootstrap) {
                    (Some(map), Some(json)) => {
                        div id=(map.container_id()) class="map-container" {
                            @if let Some(control) = map.search_control() {
                                (search_control(control))
                            }
                        }
                        script type="application/json" id="map-data" { (PreEscaped(json)) }
                        (map_script())
                    }
                    _ => {
                        p class="map-unavailable" { "The map is unavailable right now." }
                    }
                }
            }
        },
    ))
}
