use crate::domain::Property;
use maud::{html, Markup};

/// Popup bound to a listing marker.
pub fn property_popup(property: &Property) -> Markup {
    html! {
        div class="map-popup" {
            img class="map-popup-image" src=(property.image) alt=(property.title);
            h4 class="map-popup-title" { (property.title) }
            p class="map-popup-location" { (property.location) }
            p class="map-popup-price" { (property.price) }
            p class="map-popup-type" { "Type: " (property.category) }
            @if property.is_premium {
                span class="badge badge-premium" { "Premium" }
            }
            a class="map-popup-link" href=(property.details_path()) { "View Details" }
        }
    }
}

/// Popup bound to the marker dropped by a location search.
pub fn search_popup(display_name: &str) -> Markup {
    html! {
        b { (display_name) }
    }
}
