mod geocode_error;
mod models;
mod nominatim;

use async_trait::async_trait;

pub use geocode_error::GeocodeError;
pub use models::GeocodeCandidate;
pub use nominatim::{GeocoderConfig, NominatimClient};

/// Free-text place lookup. Implementations must not block the caller.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Candidates in the service's ranking order; empty when nothing matched.
    /// Callers only use the first, so implementations may stop there.
    async fn lookup(&self, query: &str) -> Result<Vec<GeocodeCandidate>, GeocodeError>;
}
