//! Display state a map view derives from a buyer/seller pair.

use crate::sdk::geo::{distance_between, format_distance_km, midpoint, zoom_for, Coordinate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerRole {
    Buyer,
    Seller,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Marker {
    pub role: MarkerRole,
    pub position: Coordinate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapFrame {
    pub center: Coordinate,
    pub zoom: u8,
    pub markers: [Marker; 2],
}

impl MapFrame {
    pub fn new(buyer: Coordinate, seller: Coordinate) -> Self {
        Self {
            center: midpoint(buyer, seller),
            zoom: zoom_for(buyer, seller),
            markers: [
                Marker {
                    role: MarkerRole::Buyer,
                    position: buyer,
                },
                Marker {
                    role: MarkerRole::Seller,
                    position: seller,
                },
            ],
        }
    }

    pub fn buyer(&self) -> Coordinate {
        self.markers[0].position
    }

    pub fn seller(&self) -> Coordinate {
        self.markers[1].position
    }

    pub fn straight_line_label(&self) -> String {
        format_distance_km(distance_between(self.buyer(), self.seller()))
    }

    /// Hand-off link to Google Maps directions, buyer first.
    pub fn directions_url(&self) -> String {
        format!(
            "https://www.google.com/maps/dir/{}/{}",
            self.buyer(),
            self.seller()
        )
    }
}
