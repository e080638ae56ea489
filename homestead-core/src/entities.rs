//! Core entity structures

use crate::{FavoriteId, ListingStatus, PropertyId, PropertyType, Timestamp};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Geographic position of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Neighborhood scores shown on the detail page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighborhoodStats {
    pub schools_rating: f64,
    pub crime_score: f64,
    pub walkability_score: f64,
}

/// PropertyRecord - a single listing in the catalog.
/// Read-only once loaded; the query engine never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    #[serde(rename = "Id")]
    pub id: PropertyId,
    pub title: String,
    pub price: f64,
    pub property_type: PropertyType,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub square_feet: f64,
    pub address: String,
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub status: ListingStatus,
    pub listing_date: Timestamp,
    #[serde(default)]
    pub year_built: Option<u32>,
    #[serde(default)]
    pub lot_size: Option<f64>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub neighborhood_stats: Option<NeighborhoodStats>,
}

impl PropertyRecord {
    /// Whether the listing carries a feature with exactly this name.
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }

    /// Price per square foot, when square footage is known.
    pub fn price_per_square_foot(&self) -> Option<f64> {
        if self.square_feet > 0.0 {
            Some(self.price / self.square_feet)
        } else {
            None
        }
    }
}

/// FavoriteRecord - a saved reference from the user to a listing.
/// References the property by id; it does not own the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRecord {
    #[serde(rename = "Id")]
    pub id: FavoriteId,
    pub property_id: PropertyId,
    pub added_date: Timestamp,
    pub notes: String,
}

impl FavoriteRecord {
    /// Create a favorite stamped with the current time.
    pub fn new(id: FavoriteId, property_id: PropertyId, notes: impl Into<String>) -> Self {
        Self {
            id,
            property_id,
            added_date: Utc::now(),
            notes: notes.into(),
        }
    }
}
