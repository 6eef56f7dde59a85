// src/domain/property.rs

use crate::domain::viewport::{Coordinate, DEFAULT_CENTER};
use rand::Rng;
use serde::Deserialize;

pub const DEFAULT_IMAGE: &str = "/static/images/default-property.jpg";

/// Largest offset (in degrees) applied to listings that share a coordinate.
const STACK_JITTER: f64 = 0.01;

/// A listing as the map renders it. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: i64,
    pub title: String,
    pub location: String,
    pub coordinate: Coordinate,
    pub price: String,
    pub category: String,
    pub image: String,
    pub is_premium: bool,
}

impl Property {
    /// Path the host router resolves to the details page.
    pub fn details_path(&self) -> String {
        format!("/properties/{}/", self.id)
    }
}

/// One record of the listing feed, as delivered by the host.
/// Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedRecord {
    pub id: i64,
    pub title: String,
    pub location: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub price: String,
    #[serde(rename = "type")]
    pub category: String,
    pub image: Option<String>,
    pub is_premium: Option<bool>,
}

/// Turns raw feed records into map-ready properties, keeping feed order.
///
/// Records without coordinates fall back to the default center. A record that
/// lands exactly on a coordinate already taken by an earlier record gets a small
/// random offset so both markers stay clickable.
pub fn normalize_feed<R: Rng>(records: Vec<FeedRecord>, rng: &mut R) -> Vec<Property> {
    let mut placed: Vec<Coordinate> = Vec::with_capacity(records.len());
    let mut properties = Vec::with_capacity(records.len());

    for record in records {
        let mut coordinate = match (record.lat, record.lng) {
            (Some(lat), Some(lng)) => Coordinate::new(lat, lng),
            _ => DEFAULT_CENTER,
        };

        if placed.contains(&coordinate) {
            coordinate = Coordinate::new(
                coordinate.lat + rng.gen_range(-STACK_JITTER..=STACK_JITTER),
                coordinate.lng + rng.gen_range(-STACK_JITTER..=STACK_JITTER),
            );
        }
        placed.push(coordinate);

        properties.push(Property {
            id: record.id,
            title: record.title,
            location: record.location,
            coordinate,
            price: record.price,
            category: record.category,
            image: record
                .image
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_IMAGE.to_string()),
            is_premium: record.is_premium.unwrap_or(false),
        });
    }

    properties
}

/// Parses a JSON array of feed records.
pub fn parse_feed<R: Rng>(json: &str, rng: &mut R) -> Result<Vec<Property>, serde_json::Error> {
    let records: Vec<FeedRecord> = serde_json::from_str(json)?;
    Ok(normalize_feed(records, rng))
}

/// The listings shipped with the default deployment.
pub fn sample_properties() -> Vec<Property> {
    let sample = |id, title: &str, location: &str, lat, lng, price: &str, category: &str| Property {
        id,
        title: title.to_string(),
        location: location.to_string(),
        coordinate: Coordinate::new(lat, lng),
        price: price.to_string(),
        category: category.to_string(),
        image: DEFAULT_IMAGE.to_string(),
        is_premium: false,
    };

    vec![
        sample(1, "Modern Office Space", "Kathmandu", 27.7172, 85.3240, "NPR 50,000/month", "Office"),
        sample(2, "Retail Space in Thamel", "Thamel, Kathmandu", 27.7150, 85.3100, "NPR 75,000/month", "Retail"),
        sample(3, "Industrial Warehouse", "Patan, Lalitpur", 27.6730, 85.3250, "NPR 200,000/month", "Industrial"),
    ]
}
