//! Pure distance and map-framing math. No I/O, safe to call from any thread.

pub mod coordinate;
pub mod distance;

pub use coordinate::{Coordinate, GeoError};
pub use distance::{
    distance_between, format_distance_km, format_distance_m, midpoint, zoom_for, EARTH_RADIUS_KM,
};
