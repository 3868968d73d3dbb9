// Distance calculation utilities

use crate::models::Coordinate;
use geo::Point;

/// Mean Earth radius used by the haversine formula
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Unrounded haversine distance between two points in kilometres
pub fn haversine_km(a: Point<f64>, b: Point<f64>) -> f64 {
    let d_lat = (b.y() - a.y()).to_radians();
    let d_lon = (b.x() - a.x()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.y().to_radians().cos() * b.y().to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Great-circle distance between two coordinates, rounded to 0.1 km
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let km = haversine_km(a.into(), b.into());
    (km * 10.0 + 0.5).floor() / 10.0
}

/// Renders short distances in metres and longer ones in kilometres
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{}m", (km * 1000.0).round() as i64)
    } else {
        format!("{}km", km)
    }
}
