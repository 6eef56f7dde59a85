use maud::{html, Markup, PreEscaped};

/// Draws the map from `#map-data` with Leaflet, pins the search box into the
/// map's control corner, and applies `.search-hit` fragments swapped in by htmx.
const MAP_SCRIPT: &str = r#"
document.addEventListener('DOMContentLoaded', function () {
    var data = document.getElementById('map-data');
    if (!data || typeof L === 'undefined') {
        return;
    }

    var state, map;
    try {
        state = JSON.parse(data.textContent);
        map = L.map(state.container_id).setView(
            [state.viewport.center.lat, state.viewport.center.lng],
            state.viewport.zoom
        );
        L.tileLayer(state.tile_layer.url_template, {
            attribution: state.tile_layer.attribution,
            maxZoom: state.tile_layer.max_zoom
        }).addTo(map);
    } catch (e) {
        console.error('Error initializing map:', e);
        return;
    }

    state.markers.forEach(function (m) {
        var marker = L.marker([m.position.lat, m.position.lng]).addTo(map).bindPopup(m.popup);
        if (m.popup_open) {
            marker.openPopup();
        }
    });

    var box = document.querySelector('.leaflet-control-search');
    if (box) {
        var SearchControl = L.Control.extend({
            options: { position: box.dataset.position || 'topleft' },
            onAdd: function () {
                L.DomEvent.disableClickPropagation(box);
                L.DomEvent.disableScrollPropagation(box);
                return box;
            }
        });
        map.addControl(new SearchControl());
    }

    document.body.addEventListener('htmx:afterSwap', function (evt) {
        var hit = evt.detail.target.querySelector('.search-hit');
        if (!hit) {
            return;
        }
        var at = [parseFloat(hit.dataset.lat), parseFloat(hit.dataset.lng)];
        map.setView(at, parseInt(hit.dataset.zoom, 10));
        L.marker(at).addTo(map).bindPopup(hit.innerHTML).openPopup();
        hit.hidden = true;
    });
});
"#;

pub fn map_script() -> Markup {
    html! {
        script { (PreEscaped(MAP_SCRIPT)) }
    }
}
