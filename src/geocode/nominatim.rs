// nominatim.rs
use crate::geocode::models::first_candidate;
use crate::geocode::{GeocodeCandidate, GeocodeError, Geocoder};
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_COUNTRY: &str = "Nepal";
pub const DEFAULT_USER_AGENT: &str = "listing_map/0.1 (property map search)";

#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    /// Search endpoint, e.g. "https://nominatim.openstreetmap.org/search"
    pub endpoint: String,
    /// Appended to every query as ", {country}".
    pub country: String,
    /// Nominatim's usage policy rejects requests without one.
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

pub struct NominatimClient {
    client: Client,
    endpoint: Url,
    country: String,
}

impl NominatimClient {
    pub fn new(cfg: &GeocoderConfig) -> Result<Self, GeocodeError> {
        let endpoint = Url::parse(&cfg.endpoint)
            .map_err(|e| GeocodeError::Config(format!("bad endpoint {:?}: {e}", cfg.endpoint)))?;

        let client = Client::builder()
            .user_agent(cfg.user_agent.as_str())
            .timeout(cfg.timeout)
            .build()
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            country: cfg.country.clone(),
        })
    }

    /// `{endpoint}?format=json&q={query}, {country}` with the query form-encoded.
    pub fn search_url(&self, query: &str) -> Url {
        let q = format!("{}, {}", query.trim(), self.country);
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("q", &q);
        url
    }
}

#[async_trait]
impl Geocoder for NominatimClient {
    async fn lookup(&self, query: &str) -> Result<Vec<GeocodeCandidate>, GeocodeError> {
        let url = self.search_url(query);
        let start = Instant::now();

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%status, query, "geocoder rejected lookup");
            return Err(GeocodeError::Status(status.as_u16()));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        let first = first_candidate(&body)?;

        debug!(
            query,
            found = first.is_some(),
            elapsed = ?start.elapsed(),
            "geocoder lookup finished"
        );

        Ok(first.into_iter().collect())
    }
}
