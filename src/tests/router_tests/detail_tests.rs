use crate::errors::ServerError;
use crate::router::handle;
use crate::templates::html_error_response;
use crate::tests::utils::{body_string, get, test_app, FakeGeocoder};
use std::sync::Arc;

#[test]
fn popup_link_resolves_to_details_page() {
    let app = test_app(Arc::new(FakeGeocoder::hits(Vec::new())));
    let link = app.state.properties[1].details_path();

    let mut resp = handle(get(&link), &app.state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Retail Space in Thamel"));
    assert!(body.contains("NPR 75,000/month"));
    assert!(body.contains("Retail"));
}

#[test]
fn unknown_or_malformed_ids_are_not_found() {
    let app = test_app(Arc::new(FakeGeocoder::hits(Vec::new())));

    for path in ["/properties/42/", "/properties/abc/", "/properties/1"] {
        let err = handle(get(path), &app.state).unwrap_err();
        assert!(matches!(err, ServerError::NotFound), "{path} should be 404");
    }
}

#[test]
fn not_found_renders_error_page() {
    let mut resp = html_error_response(ServerError::NotFound);

    assert_eq!(resp.status(), 404);
    assert!(body_string(&mut resp).contains("Error 404"));
}
