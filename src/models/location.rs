// Location models for messes and search origins

use geo::Point;
use serde::{Deserialize, Serialize};

/// A WGS84 coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate from latitude and longitude
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Checks that latitude lies in [-90, 90] and longitude in [-180, 180]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Great-circle distance to another coordinate in kilometres
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        crate::utils::distance::distance_km(*self, *other)
    }
}

// geo orders points as (x = longitude, y = latitude)
impl From<Coordinate> for Point<f64> {
    fn from(c: Coordinate) -> Self {
        Point::new(c.longitude, c.latitude)
    }
}

/// Coordinate plus the postal address of a mess
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(flatten)]
    pub coordinate: Coordinate,
    pub address: String,
    pub city: String,
    pub area: String,
    pub pincode: String,
}

impl Location {
    pub fn new<S: Into<String>>(coordinate: Coordinate, area: S) -> Self {
        Self {
            coordinate,
            address: String::new(),
            city: String::new(),
            area: area.into(),
            pincode: String::new(),
        }
    }

    pub fn with_address<S: Into<String>>(mut self, address: S, city: S, pincode: S) -> Self {
        self.address = address.into();
        self.city = city.into();
        self.pincode = pincode.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_validity() {
        assert!(Coordinate::new(18.5204, 73.8567).is_valid());
        assert!(Coordinate::new(-90.0, 180.0).is_valid());
        assert!(!Coordinate::new(90.5, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, -180.1).is_valid());
    }

    #[test]
    fn test_distance_to() {
        let a = Coordinate::new(18.5204, 73.8567);
        let b = Coordinate::new(18.5362, 73.8847);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_point_conversion_orders_longitude_first() {
        let point: Point<f64> = Coordinate::new(18.5, 73.8).into();
        assert_eq!(point.x(), 73.8);
        assert_eq!(point.y(), 18.5);
    }

    #[test]
    fn test_location_flattens_coordinate() {
        let location = Location::new(Coordinate::new(18.5, 73.8), "Kothrud").with_address(
            "12 Paud Road",
            "Pune",
            "411038",
        );
        let json = serde_json::to_value(&location).unwrap();
        assert_eq!(json["latitude"], 18.5);
        assert_eq!(json["area"], "Kothrud");
        assert_eq!(json["pincode"], "411038");
    }
}
