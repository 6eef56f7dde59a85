// src/tests/map_tests/initialize_tests.rs

use crate::domain::{parse_feed, sample_properties, Coordinate, DEFAULT_CENTER};
use crate::map::{
    mount_map, HostPage, MapError, MapOptions, MapWidget, MarkerKind, TileLayer, MAP_CONTAINER_ID,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn places_one_marker_per_property_in_feed_order() {
    let props = sample_properties();
    let map = MapWidget::initialize(
        &HostPage::with_map_container(),
        MAP_CONTAINER_ID,
        &props,
        &MapOptions::default(),
    )
    .unwrap();

    assert_eq!(map.markers().len(), props.len());

    for (marker, prop) in map.markers().iter().zip(&props) {
        assert_eq!(marker.kind, MarkerKind::Property { id: prop.id });
        assert_eq!(marker.position, prop.coordinate);
        assert!(marker.popup.contains(&prop.title));
        assert!(marker.popup.contains(&prop.location));
        assert!(marker.popup.contains(&prop.price));
        assert!(marker.popup.contains(&format!("/properties/{}/", prop.id)));
        assert!(!marker.popup_open);
    }
}

#[test]
fn modern_office_space_from_feed() {
    let mut rng = StdRng::seed_from_u64(42);
    let props = parse_feed(
        r#"[{"id": 1, "title": "Modern Office Space", "location": "Kathmandu",
             "lat": 27.7172, "lng": 85.3240, "price": "NPR 50,000/month", "type": "Office"}]"#,
        &mut rng,
    )
    .unwrap();

    let map = MapWidget::initialize(
        &HostPage::with_map_container(),
        "map",
        &props,
        &MapOptions::default(),
    )
    .unwrap();

    assert_eq!(map.markers().len(), 1);
    let marker = &map.markers()[0];
    assert_eq!(marker.position, Coordinate::new(27.7172, 85.3240));
    assert!(marker.popup.contains("Modern Office Space"));
    assert!(marker.popup.contains(r#"href="/properties/1/""#));
}

#[test]
fn starts_on_kathmandu_at_zoom_twelve() {
    let map = MapWidget::initialize(
        &HostPage::with_map_container(),
        MAP_CONTAINER_ID,
        &[],
        &MapOptions::default(),
    )
    .unwrap();

    assert_eq!(map.viewport().center, DEFAULT_CENTER);
    assert_eq!(map.viewport().zoom, 12);
    assert!(map.markers().is_empty());
    assert!(map.search_control().is_none());
    assert_eq!(map.tile_layer().max_zoom, 18);
    assert!(map.tile_layer().url_template.contains("openstreetmap.org"));
}

#[test]
fn container_must_exist_and_be_visible() {
    let props = sample_properties();
    let opts = MapOptions::default();

    let missing = MapWidget::initialize(&HostPage::new(), MAP_CONTAINER_ID, &props, &opts);
    assert!(matches!(missing, Err(MapError::MissingContainer(id)) if id == "map"));

    let mut host = HostPage::new();
    host.add_element(MAP_CONTAINER_ID, false);
    let hidden = MapWidget::initialize(&host, MAP_CONTAINER_ID, &props, &opts);
    assert!(matches!(hidden, Err(MapError::HiddenContainer(_))));
}

#[test]
fn rejects_tile_template_without_placeholders() {
    let opts = MapOptions {
        tile_layer: TileLayer {
            url_template: "https://tiles.example.com/static.png".to_string(),
            ..TileLayer::default()
        },
        ..MapOptions::default()
    };

    let result = MapWidget::initialize(
        &HostPage::with_map_container(),
        MAP_CONTAINER_ID,
        &sample_properties(),
        &opts,
    );
    assert!(matches!(result, Err(MapError::TileLayer(_))));
}

#[test]
fn mount_does_nothing_without_container() {
    let mut host = HostPage::new();
    host.add_element("listing-grid", true);

    assert!(mount_map(&host, MAP_CONTAINER_ID, &sample_properties(), &MapOptions::default()).is_none());
}

#[test]
fn mount_swallows_initialization_errors() {
    let mut host = HostPage::new();
    host.add_element(MAP_CONTAINER_ID, false);

    assert!(mount_map(&host, MAP_CONTAINER_ID, &sample_properties(), &MapOptions::default()).is_none());
}

#[test]
fn mount_adds_search_control() {
    let map = mount_map(
        &HostPage::with_map_container(),
        MAP_CONTAINER_ID,
        &sample_properties(),
        &MapOptions::default(),
    )
    .unwrap();

    let control = map.search_control().unwrap();
    assert_eq!(control.position(), "topleft");
    assert_eq!(control.placeholder(), "Search location...");
    assert_eq!(map.markers().len(), 3);
}
