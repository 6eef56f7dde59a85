use crate::domain::Property;
use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

pub fn property_detail_page(property: &Property) -> Markup {
    desktop_layout(
        &property.title,
        card(
            &property.title,
            html! {
                img class="property-image" src=(property.image) alt=(property.title);
                dl class="property-facts" {
                    dt { "Location" } dd { (property.location) }
                    dt { "Price" } dd { (property.price) }
                    dt { "Type" } dd { (property.category) }
                    dt { "Coordinates" }
                    dd { (format!("{:.4}, {:.4}", property.coordinate.lat, property.coordinate.lng)) }
                }
                @if property.is_premium {
                    span class="badge badge-premium" { "Premium" }
                }
                p { a href="/map" { "← Back to the map" } }
            },
        ),
    )
}
