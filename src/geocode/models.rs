use crate::domain::Coordinate;
use crate::geocode::GeocodeError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

// [
//   {
//     "place_id": 123,
//     "lat": "27.7150",
//     "lon": "85.3100",
//     "display_name": "Thamel, Kathmandu, ...",
//     "importance": 0.41,
//     ...
//   }
// ]

/// One search hit. Nominatim sends `lat`/`lon` as strings; numbers are accepted too.
/// Any other field on the hit is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeocodeCandidate {
    #[serde(deserialize_with = "number_or_string")]
    pub lat: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub lon: f64,
    pub display_name: String,
}

impl GeocodeCandidate {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}

/// Reads a search response and keeps only its top-ranked hit.
///
/// The body must be a JSON array. Entries after the first are never
/// inspected, so a malformed tail cannot spoil a good first hit.
pub fn first_candidate(body: &[u8]) -> Result<Option<GeocodeCandidate>, GeocodeError> {
    let entries: Vec<Value> =
        serde_json::from_slice(body).map_err(|e| GeocodeError::Parse(e.to_string()))?;

    let Some(first) = entries.into_iter().next() else {
        return Ok(None);
    };

    let candidate =
        GeocodeCandidate::deserialize(first).map_err(|e| GeocodeError::Parse(e.to_string()))?;

    if !candidate.coordinate().is_valid() {
        return Err(GeocodeError::Parse(format!(
            "coordinate out of range for {:?}",
            candidate.display_name
        )));
    }

    Ok(Some(candidate))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid coordinate {s:?}: {e}"))),
    }
}
