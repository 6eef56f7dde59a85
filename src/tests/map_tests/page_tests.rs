// src/tests/map_tests/page_tests.rs

use crate::domain::Coordinate;
use crate::map::{DomEvent, SearchState};
use crate::page::MapPage;
use crate::tests::utils::{
    candidate, mounted_map, thamel, FakeGeocoder, GatedGeocoder, PanickingGeocoder,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::LocalSet;

fn submit(page: &mut MapPage, query: &str) -> u64 {
    page.handle_event(DomEvent::type_query(query));
    page.handle_event(DomEvent::press_enter())
        .unwrap_or_else(|| panic!("{query:?} did not start a search"))
}

#[tokio::test]
async fn page_stays_interactive_while_search_is_pending() {
    LocalSet::new()
        .run_until(async {
            let geocoder = Arc::new(GatedGeocoder::new());
            let release = geocoder.gate("Thamel");
            let mut page = MapPage::new(mounted_map(), geocoder.clone());

            submit(&mut page, "Thamel");
            assert_eq!(page.widget().search_state(), SearchState::Pending);

            // Other events are still handled while the lookup is outstanding.
            page.handle_event(DomEvent::type_query("Patan"));
            assert_eq!(page.widget().search_control().unwrap().text(), "Patan");
            assert_eq!(page.widget().viewport().zoom, 12);

            release.send(vec![thamel()]).unwrap();
            assert_eq!(page.next_completion().await, Some(SearchState::Found));
            assert_eq!(page.widget().viewport().center, Coordinate::new(27.7150, 85.3100));
            assert_eq!(page.widget().search_state(), SearchState::Idle);
            assert_eq!(page.next_completion().await, None);
        })
        .await;
}

// Overlapping searches race: nothing is cancelled and the one that resolves
// last owns the viewport, even if it was submitted first.
#[tokio::test]
async fn overlapping_searches_last_to_resolve_wins() {
    LocalSet::new()
        .run_until(async {
            let geocoder = Arc::new(GatedGeocoder::new());
            let boudha = geocoder.gate("Boudha");
            let patan = geocoder.gate("Patan");
            let mut page = MapPage::new(mounted_map(), geocoder.clone());

            let first = submit(&mut page, "Boudha");
            let second = submit(&mut page, "Patan");
            assert!(second > first);
            assert_eq!(page.widget().searches_in_flight(), 2);

            patan.send(vec![candidate("27.6730", "85.3250", "Patan")]).unwrap();
            page.next_completion().await;
            assert_eq!(page.widget().viewport().center, Coordinate::new(27.6730, 85.3250));

            boudha.send(vec![candidate("27.7215", "85.3620", "Boudha")]).unwrap();
            page.next_completion().await;
            assert_eq!(page.widget().viewport().center, Coordinate::new(27.7215, 85.3620));

            let hits = page.widget().markers().iter().filter(|m| m.is_search()).count();
            assert_eq!(hits, 2);
            assert_eq!(page.widget().searches_in_flight(), 0);
        })
        .await;
}

#[tokio::test]
async fn run_drains_outstanding_searches_after_events_close() {
    LocalSet::new()
        .run_until(async {
            let (events, rx) = mpsc::unbounded_channel();
            events.send(DomEvent::type_query("Thamel")).unwrap();
            events.send(DomEvent::press_enter()).unwrap();
            events.send(DomEvent::type_query("")).unwrap();
            events.send(DomEvent::press_enter()).unwrap();
            drop(events);

            let geocoder = Arc::new(FakeGeocoder::hits(vec![thamel()]));
            let map = MapPage::new(mounted_map(), geocoder.clone()).run(rx).await;

            assert_eq!(geocoder.calls(), vec!["Thamel".to_string()]);
            assert_eq!(map.viewport().zoom, 15);
            assert_eq!(map.last_search(), Some(SearchState::Found));
            assert_eq!(map.search_state(), SearchState::Idle);
        })
        .await;
}

#[tokio::test]
async fn a_crashed_lookup_settles_as_a_failed_search() {
    LocalSet::new()
        .run_until(async {
            let mut page = MapPage::new(mounted_map(), Arc::new(PanickingGeocoder));
            let before = page.widget().markers().len();

            submit(&mut page, "Thamel");
            assert_eq!(page.widget().search_state(), SearchState::Pending);

            assert_eq!(page.next_completion().await, Some(SearchState::Failed));
            assert_eq!(page.widget().search_state(), SearchState::Idle);
            assert_eq!(page.widget().markers().len(), before);
            assert_eq!(page.widget().viewport().zoom, 12);
            assert_eq!(
                page.widget().notifications().last().map(|n| n.message.as_str()),
                Some("Error searching location. Please try again.")
            );
            assert_eq!(page.next_completion().await, None);
        })
        .await;
}

#[tokio::test]
async fn run_finishes_when_a_lookup_crashes() {
    LocalSet::new()
        .run_until(async {
            let (events, rx) = mpsc::unbounded_channel();
            events.send(DomEvent::type_query("Thamel")).unwrap();
            events.send(DomEvent::press_enter()).unwrap();
            drop(events);

            let map = MapPage::new(mounted_map(), Arc::new(PanickingGeocoder))
                .run(rx)
                .await;

            assert_eq!(map.last_search(), Some(SearchState::Failed));
            assert_eq!(map.search_state(), SearchState::Idle);
        })
        .await;
}
