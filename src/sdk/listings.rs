//! Food listing shapes as the ShareBite API returns them.

use crate::sdk::geo::{distance_between, format_distance_km, Coordinate, GeoError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// `[longitude, latitude]`, GeoJSON order.
    pub coordinates: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodListing {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub food_name: String,
    pub posted_by: String,
    #[serde(default)]
    pub servings: u32,
    // Timestamps are passed through as the API formats them.
    #[serde(default)]
    pub best_before: Option<serde_json::Value>,
    #[serde(default)]
    pub posted_on: Option<serde_json::Value>,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub location: Option<GeoPoint>,
}

impl FoodListing {
    /// Listing position; index 1 is latitude, index 0 longitude.
    pub fn coordinate(&self) -> Option<Result<Coordinate, GeoError>> {
        self.location
            .as_ref()
            .map(|point| Coordinate::from_lon_lat(point.coordinates))
    }

    pub fn distance_km(&self, from: Coordinate) -> Option<f64> {
        match self.coordinate()? {
            Ok(at) => Some(distance_between(from, at)),
            Err(e) => {
                log::warn!("Listing \"{}\" has an unusable location: {}", self.food_name, e);
                None
            }
        }
    }

    /// Card label such as `"850 m"`, or `"Unknown"` without a usable location.
    pub fn distance_label(&self, from: Coordinate) -> String {
        self.distance_km(from)
            .map(format_distance_km)
            .unwrap_or_else(|| "Unknown".to_string())
    }
}

/// Case-insensitive match on food name or poster. An empty query keeps everything.
pub fn filter_listings<'a>(listings: &'a [FoodListing], query: &str) -> Vec<&'a FoodListing> {
    let needle = query.trim().to_lowercase();
    listings
        .iter()
        .filter(|listing| {
            needle.is_empty()
                || listing.food_name.to_lowercase().contains(&needle)
                || listing.posted_by.to_lowercase().contains(&needle)
        })
        .collect()
}

/// New listing payload for `addFood`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFood {
    pub food_name: String,
    pub servings: u32,
    /// Hours until the food should be collected.
    pub best_before: u32,
    pub longitude: f64,
    pub latitude: f64,
}

impl NewFood {
    pub fn new(food_name: String, servings: u32, best_before: u32, at: Coordinate) -> Self {
        Self {
            food_name,
            servings,
            best_before,
            longitude: at.longitude(),
            latitude: at.latitude(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyQuery {
    pub longitude: f64,
    pub latitude: f64,
    pub radius_km: f64,
}

impl NearbyQuery {
    pub fn new(at: Coordinate, radius_km: f64) -> Self {
        Self {
            longitude: at.longitude(),
            latitude: at.latitude(),
            radius_km,
        }
    }
}
