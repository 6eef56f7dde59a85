use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Geocoder returned HTTP {0}")]
    Status(u16),
    #[error("Geocoder response parse error: {0}")]
    Parse(String),
    #[error("Geocoder configuration error: {0}")]
    Config(String),
}
