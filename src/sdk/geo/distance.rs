use super::coordinate::Coordinate;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers (haversine).
pub fn distance_between(a: Coordinate, b: Coordinate) -> f64 {
    if a == b {
        return 0.0;
    }
    let lat1 = a.latitude().to_radians();
    let lat2 = b.latitude().to_radians();
    let d_lat = (b.latitude() - a.latitude()).to_radians();
    let d_lon = (b.longitude() - a.longitude()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Display label for a distance: whole meters under 1 km, otherwise
/// kilometers with one decimal.
pub fn format_distance_km(km: f64) -> String {
    if km < 1.0 {
        format!("{} m", (km * 1000.0).round() as i64)
    } else {
        format!("{:.1} km", km)
    }
}

pub fn format_distance_m(meters: f64) -> String {
    format_distance_km(meters / 1000.0)
}

/// Map zoom level derived from the larger of the two axis deltas.
/// Always in `8..=15`.
pub fn zoom_for(a: Coordinate, b: Coordinate) -> u8 {
    let lat_diff = (a.latitude() - b.latitude()).abs();
    let lon_diff = (a.longitude() - b.longitude()).abs();
    let max_diff = lat_diff.max(lon_diff);

    if max_diff < 0.01 {
        15
    } else if max_diff < 0.05 {
        13
    } else if max_diff < 0.1 {
        12
    } else if max_diff < 0.5 {
        10
    } else {
        8
    }
}

/// Planar average of both axes. Only meant for framing a map view.
pub fn midpoint(a: Coordinate, b: Coordinate) -> Coordinate {
    Coordinate::new(
        (a.latitude() + b.latitude()) / 2.0,
        (a.longitude() + b.longitude()) / 2.0,
    )
    // The mean of two in-range values is itself in range.
    .unwrap_or(a)
}

pub(crate) fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
