use crate::sdk::geo::{distance_between, format_distance_km, format_distance_m, Coordinate};
use crate::sdk::geo::distance::round_to_one_decimal;
use super::error::RoutingError;
use serde::Serialize;

pub const DEFAULT_INSTRUCTION: &str = "Continue straight";
pub const FALLBACK_MESSAGE: &str = "Unable to fetch route";
pub const FALLBACK_NOTICE: &str = "Showing direct route";

/// Buyer (origin) to seller/listing (destination).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteRequest {
    pub origin: Coordinate,
    pub destination: Coordinate,
}

impl RouteRequest {
    pub fn new(origin: Coordinate, destination: Coordinate) -> Self {
        Self {
            origin,
            destination,
        }
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.destination, self.origin)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStep {
    pub instruction: String,
    pub distance_meters: f64,
}

impl RouteStep {
    pub fn new(instruction: Option<String>, distance_meters: f64) -> Self {
        let instruction = instruction
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| DEFAULT_INSTRUCTION.to_string());
        Self {
            instruction,
            distance_meters,
        }
    }

    pub fn distance_label(&self) -> String {
        format_distance_m(self.distance_meters)
    }
}

/// A route as the directions provider described it, already in
/// latitude-first order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRoute {
    pub polyline: Vec<Coordinate>,
    pub distance_meters: f64,
    pub duration_seconds: f64,
    pub steps: Vec<RouteStep>,
}

fn is_length(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

impl ProviderRoute {
    /// Rejects routes that cannot be rendered: fewer than two points, or
    /// negative / non-finite distances and durations.
    pub fn validate(self) -> Result<Self, RoutingError> {
        if self.polyline.len() < 2 {
            return Err(RoutingError::ProviderResponseInvalid(format!(
                "route geometry has {} point(s)",
                self.polyline.len()
            )));
        }
        if !is_length(self.distance_meters) {
            return Err(RoutingError::ProviderResponseInvalid(format!(
                "route distance {}",
                self.distance_meters
            )));
        }
        if !is_length(self.duration_seconds) {
            return Err(RoutingError::ProviderResponseInvalid(format!(
                "route duration {}",
                self.duration_seconds
            )));
        }
        if let Some(step) = self.steps.iter().find(|step| !is_length(step.distance_meters)) {
            return Err(RoutingError::ProviderResponseInvalid(format!(
                "step distance {}",
                step.distance_meters
            )));
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    pub polyline: Vec<Coordinate>,
    pub distance_km: Option<f64>,
    pub duration_minutes: Option<u32>,
    pub steps: Vec<RouteStep>,
    pub used_fallback: bool,
    pub error_message: Option<String>,
}

impl RouteResult {
    /// A distance that rounds to 0.0 km is left absent so labels use the
    /// straight line instead. Duration keeps plain rounding and may be 0.
    pub fn from_provider(route: ProviderRoute) -> Self {
        let distance_km = round_to_one_decimal(route.distance_meters / 1000.0);
        Self {
            polyline: route.polyline,
            distance_km: (distance_km > 0.0).then_some(distance_km),
            duration_minutes: Some((route.duration_seconds / 60.0).round() as u32),
            steps: route.steps,
            used_fallback: false,
            error_message: None,
        }
    }

    /// Straight line between the two endpoints, flagged as degraded.
    pub fn fallback(request: &RouteRequest) -> Self {
        Self {
            polyline: vec![request.origin, request.destination],
            distance_km: None,
            duration_minutes: None,
            steps: Vec::new(),
            used_fallback: true,
            error_message: Some(FALLBACK_MESSAGE.to_string()),
        }
    }

    // `polyline` always holds at least two points, so first/last are present.
    pub fn origin(&self) -> Option<Coordinate> {
        self.polyline.first().copied()
    }

    pub fn destination(&self) -> Option<Coordinate> {
        self.polyline.last().copied()
    }

    pub fn straight_line_km(&self) -> Option<f64> {
        Some(distance_between(self.origin()?, self.destination()?))
    }

    /// Provider distance when known, otherwise the straight-line substitute.
    pub fn distance_label(&self) -> Option<String> {
        self.distance_km
            .or_else(|| self.straight_line_km())
            .map(format_distance_km)
    }

    pub fn duration_label(&self) -> Option<String> {
        self.duration_minutes.map(|minutes| format!("{minutes} min"))
    }

    pub fn notice(&self) -> Option<&'static str> {
        self.used_fallback.then_some(FALLBACK_NOTICE)
    }
}
