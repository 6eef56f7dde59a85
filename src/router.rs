use crate::config::AppConfig;
use crate::domain::Property;
use crate::errors::ServerError;
use crate::geocode::Geocoder;
use crate::map::{mount_map, HostPage, MAP_CONTAINER_ID};
use crate::responses::{html_response, ResultResp};
use crate::templates::pages::{map_page, property_detail_page, search_result_fragment};
use astra::Request;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::error;

/// Shared by every worker thread. Map widgets themselves are per request.
pub struct AppState {
    pub config: AppConfig,
    pub properties: Vec<Property>,
    pub geocoder: Arc<dyn Geocoder>,
    /// Drives geocoder futures from the blocking worker threads.
    pub runtime: Handle,
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") | ("GET", "/map") => map_view(state),
        ("GET", "/map/search") => search(&req, state),
        ("GET", p) if p.starts_with("/properties/") => property_detail(p, state),
        _ => Err(ServerError::NotFound),
    }
}

fn map_view(state: &AppState) -> ResultResp {
    let host = HostPage::with_map_container();
    let widget = mount_map(&host, MAP_CONTAINER_ID, &state.properties, &state.config.map);

    let page = map_page(widget.as_ref()).map_err(|e| {
        error!(error = %e, "could not serialize map state");
        ServerError::InternalError
    })?;

    html_response(page)
}

fn search(req: &Request, state: &AppState) -> ResultResp {
    let params = parse_query(req);
    let query = params
        .get("q")
        .map(|q| q.trim())
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ServerError::BadRequest("missing search query".into()))?;

    let host = HostPage::with_map_container();
    let mut widget = mount_map(&host, MAP_CONTAINER_ID, &state.properties, &state.config.map)
        .ok_or(ServerError::InternalError)?;

    let outcome = state
        .runtime
        .block_on(widget.search_location(state.geocoder.as_ref(), query));

    html_response(search_result_fragment(&widget, outcome))
}

fn property_detail(path: &str, state: &AppState) -> ResultResp {
    let id = path
        .strip_prefix("/properties/")
        .and_then(|rest| rest.strip_suffix('/'))
        .and_then(|id| id.parse::<i64>().ok())
        .ok_or(ServerError::NotFound)?;

    let property = state
        .properties
        .iter()
        .find(|p| p.id == id)
        .ok_or(ServerError::NotFound)?;

    html_response(property_detail_page(property))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
