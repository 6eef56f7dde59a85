use crate::errors::ServerError;
use crate::map::notify::{NOT_FOUND_MESSAGE, SEARCH_ERROR_MESSAGE};
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_app, thamel, FakeGeocoder, Reply};
use std::sync::Arc;

#[test]
fn search_returns_hit_fragment() {
    let geocoder = Arc::new(FakeGeocoder::hits(vec![thamel()]));
    let app = test_app(geocoder.clone());

    let mut resp = handle(get("/map/search?q=Thamel"), &app.state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains(r#"data-lat="27.715""#));
    assert!(body.contains(r#"data-lng="85.31""#));
    assert!(body.contains(r#"data-zoom="15""#));
    assert!(body.contains("<b>Thamel, Kathmandu</b>"));
    assert_eq!(geocoder.calls(), vec!["Thamel".to_string()]);
}

#[test]
fn search_query_is_url_decoded() {
    let geocoder = Arc::new(FakeGeocoder::hits(vec![thamel()]));
    let app = test_app(geocoder.clone());

    handle(get("/map/search?q=New+Road%2C+Kathmandu"), &app.state).unwrap();
    assert_eq!(geocoder.calls(), vec!["New Road, Kathmandu".to_string()]);
}

#[test]
fn empty_result_renders_not_found_notice() {
    let app = test_app(Arc::new(FakeGeocoder::hits(Vec::new())));

    let mut resp = handle(get("/map/search?q=Atlantis"), &app.state).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("notification-warning"));
    assert!(body.contains(NOT_FOUND_MESSAGE));
    assert!(!body.contains("search-hit"));
}

#[test]
fn geocoder_failure_renders_error_notice() {
    let app = test_app(Arc::new(FakeGeocoder::new(Reply::Network)));

    let mut resp = handle(get("/map/search?q=Thamel"), &app.state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("notification-error"));
    assert!(body.contains(SEARCH_ERROR_MESSAGE));
}

#[test]
fn blank_query_is_rejected() {
    let geocoder = Arc::new(FakeGeocoder::hits(vec![thamel()]));
    let app = test_app(geocoder.clone());

    for uri in ["/map/search", "/map/search?q=", "/map/search?q=%20%20"] {
        let err = handle(get(uri), &app.state).unwrap_err();
        assert!(matches!(err, ServerError::BadRequest(_)), "{uri}");
    }
    assert!(geocoder.calls().is_empty());
}
