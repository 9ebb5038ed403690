use crate::sdk::geo::Coordinate;
use crate::sdk::routing::error::RoutingError;
use crate::sdk::routing::route::{ProviderRoute, RouteStep};
use serde::Deserialize;

// --- GeoJSON shapes returned by the ORS directions endpoint ---

#[derive(Deserialize, Debug)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub features: Vec<Feature>,
}
#[derive(Deserialize, Debug)]
pub struct Feature {
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: Properties,
}
#[derive(Deserialize, Debug)]
pub struct Geometry {
    // [lon, lat] or [lon, lat, elevation]
    pub coordinates: Vec<Vec<f64>>,
}
#[derive(Deserialize, Debug, Default)]
pub struct Properties {
    #[serde(default)]
    pub segments: Vec<Segment>,
}
#[derive(Deserialize, Debug)]
pub struct Segment {
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub steps: Vec<Step>,
}
#[derive(Deserialize, Debug)]
pub struct Step {
    #[serde(default)]
    pub instruction: Option<String>,
    #[serde(default)]
    pub distance: f64,
}

fn invalid(reason: impl Into<String>) -> RoutingError {
    RoutingError::ProviderResponseInvalid(reason.into())
}

fn to_coordinate(position: &[f64]) -> Result<Coordinate, RoutingError> {
    match position {
        [lon, lat, ..] => Coordinate::from_lon_lat([*lon, *lat])
            .map_err(|e| invalid(format!("bad position {position:?}: {e}"))),
        _ => Err(invalid(format!("position with {} values", position.len()))),
    }
}

impl TryFrom<DirectionsResponse> for ProviderRoute {
    type Error = RoutingError;

    /// Takes the first feature and swaps its `[lon, lat]` positions into
    /// latitude-first coordinates.
    fn try_from(response: DirectionsResponse) -> Result<Self, Self::Error> {
        let feature = response
            .features
            .into_iter()
            .next()
            .ok_or_else(|| invalid("no route features"))?;

        let polyline = feature
            .geometry
            .coordinates
            .iter()
            .map(|position| to_coordinate(position))
            .collect::<Result<Vec<_>, _>>()?;
        if polyline.len() < 2 {
            return Err(invalid(format!(
                "route geometry has {} point(s)",
                polyline.len()
            )));
        }

        let segment = feature
            .properties
            .segments
            .into_iter()
            .next()
            .ok_or_else(|| invalid("route has no segments"))?;
        if !segment.distance.is_finite() || segment.distance < 0.0 {
            return Err(invalid(format!("segment distance {}", segment.distance)));
        }
        if !segment.duration.is_finite() || segment.duration < 0.0 {
            return Err(invalid(format!("segment duration {}", segment.duration)));
        }

        let steps = segment
            .steps
            .into_iter()
            .map(|step| {
                if !step.distance.is_finite() || step.distance < 0.0 {
                    return Err(invalid(format!("step distance {}", step.distance)));
                }
                Ok(RouteStep::new(step.instruction, step.distance))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ProviderRoute {
            polyline,
            distance_meters: segment.distance,
            duration_seconds: segment.duration,
            steps,
        })
    }
}
