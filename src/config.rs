// src/config.rs
use crate::domain::{parse_feed, sample_properties, Property};
use crate::geocode::GeocoderConfig;
use crate::map::{MapOptions, SearchMarkerPolicy};
use std::fmt::Display;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is invalid: {msg}")]
    Invalid { var: &'static str, msg: String },
    #[error("could not read property feed {path:?}: {source}")]
    FeedIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("property feed {path:?} is malformed: {source}")]
    FeedParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Startup settings, read from the environment.
///
/// | variable                | default                                      |
/// |-------------------------|----------------------------------------------|
/// | `MAP_BIND_ADDR`         | `127.0.0.1:3000`                             |
/// | `MAP_MAX_WORKERS`       | `8`                                          |
/// | `MAP_SEARCH_MARKERS`    | `accumulate` (or `replace`)                  |
/// | `GEOCODER_URL`          | `https://nominatim.openstreetmap.org/search` |
/// | `GEOCODER_COUNTRY`      | `Nepal`                                      |
/// | `GEOCODER_USER_AGENT`   | `listing_map/0.1 (property map search)`      |
/// | `GEOCODER_TIMEOUT_SECS` | `10`                                         |
/// | `PROPERTY_FEED`         | unset: built-in sample listings              |
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub geocoder: GeocoderConfig,
    pub map: MapOptions,
    pub property_feed: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from any variable source.
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let geocoder_defaults = GeocoderConfig::default();

        let bind_addr: SocketAddr =
            parse_var(&get, "MAP_BIND_ADDR", "127.0.0.1:3000".parse().ok())?;
        let max_workers: usize = parse_var(&get, "MAP_MAX_WORKERS", Some(8))?;
        if max_workers == 0 {
            return Err(ConfigError::Invalid {
                var: "MAP_MAX_WORKERS",
                msg: "must be at least 1".into(),
            });
        }

        let search_markers = match get("MAP_SEARCH_MARKERS") {
            Some(raw) => raw
                .parse::<SearchMarkerPolicy>()
                .map_err(|msg| ConfigError::Invalid {
                    var: "MAP_SEARCH_MARKERS",
                    msg,
                })?,
            None => SearchMarkerPolicy::default(),
        };

        let timeout_secs: u64 = parse_var(
            &get,
            "GEOCODER_TIMEOUT_SECS",
            Some(geocoder_defaults.timeout.as_secs()),
        )?;

        Ok(Self {
            bind_addr,
            max_workers,
            geocoder: GeocoderConfig {
                endpoint: get("GEOCODER_URL").unwrap_or(geocoder_defaults.endpoint),
                country: get("GEOCODER_COUNTRY").unwrap_or(geocoder_defaults.country),
                user_agent: get("GEOCODER_USER_AGENT").unwrap_or(geocoder_defaults.user_agent),
                timeout: Duration::from_secs(timeout_secs),
            },
            map: MapOptions {
                search_markers,
                ..MapOptions::default()
            },
            property_feed: get("PROPERTY_FEED")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    /// Reads the listing feed, or the built-in samples when none is configured.
    pub fn load_properties(&self) -> Result<Vec<Property>, ConfigError> {
        let Some(path) = &self.property_feed else {
            return Ok(sample_properties());
        };

        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::FeedIo {
            path: path.clone(),
            source,
        })?;

        parse_feed(&json, &mut rand::thread_rng()).map_err(|source| ConfigError::FeedParse {
            path: path.clone(),
            source,
        })
    }
}

fn parse_var<F, T>(get: &F, var: &'static str, default: Option<T>) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match get(var) {
        Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            var,
            msg: format!("{raw:?}: {e}"),
        }),
        None => default.ok_or_else(|| ConfigError::Invalid {
            var,
            msg: "missing".into(),
        }),
    }
}
