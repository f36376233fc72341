use serde::{Deserialize, Serialize};

/// Mean earth radius in meters, as used by the haversine distance below.
const EARTH_RADIUS: f64 = 6_371_000.0;

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }

    /// Calculates the great-circle distance to another LatLng in meters,
    /// using the Haversine formula
    pub fn distance_to(&self, other: &LatLng) -> f64 {
        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lng = (other.lng - self.lng).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS * c
    }

    /// Wraps longitude to [-180, 180] range
    pub fn wrap_lng(lng: f64) -> f64 {
        let wrapped = lng % 360.0;
        if wrapped > 180.0 {
            wrapped - 360.0
        } else if wrapped < -180.0 {
            wrapped + 360.0
        } else {
            wrapped
        }
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Linear unit a measured distance is reported in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceUnit {
    Kilometers,
    Meters,
    Miles,
    NauticalMiles,
}

impl DistanceUnit {
    /// Abbreviated suffix appended to formatted labels
    pub fn abbreviation(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Meters => "m",
            DistanceUnit::Miles => "mi",
            DistanceUnit::NauticalMiles => "nm",
        }
    }

    /// Converts a distance in meters into this unit
    pub fn from_meters(&self, meters: f64) -> f64 {
        match self {
            DistanceUnit::Kilometers => meters / 1000.0,
            DistanceUnit::Meters => meters,
            DistanceUnit::Miles => meters / 1609.344,
            DistanceUnit::NauticalMiles => meters / 1852.0,
        }
    }
}

impl Default for DistanceUnit {
    fn default() -> Self {
        DistanceUnit::Kilometers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_lng_creation() {
        let coord = LatLng::new(40.7128, -74.0060);
        assert_eq!(coord.lat, 40.7128);
        assert_eq!(coord.lng, -74.0060);
        assert!(coord.is_valid());
    }

    #[test]
    fn test_invalid_coordinates() {
        assert!(!LatLng::new(95.0, 0.0).is_valid());
        assert!(!LatLng::new(0.0, 181.0).is_valid());
        assert!(LatLng::new(-90.0, -180.0).is_valid());
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let equator = LatLng::new(0.0, 0.0);
        let one_up = LatLng::new(1.0, 0.0);
        let distance = equator.distance_to(&one_up);

        // One degree of latitude is ~111.19 km on the mean-radius sphere
        assert!((distance - 111_194.9).abs() < 1.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let nyc = LatLng::new(40.7128, -74.0060);
        let la = LatLng::new(34.0522, -118.2437);
        assert!((nyc.distance_to(&la) - la.distance_to(&nyc)).abs() < 1e-6);
        assert!(nyc.distance_to(&la) > 3_900_000.0);
    }

    #[test]
    fn test_wrap_lng() {
        assert_eq!(LatLng::wrap_lng(190.0), -170.0);
        assert_eq!(LatLng::wrap_lng(-190.0), 170.0);
        assert_eq!(LatLng::wrap_lng(45.0), 45.0);
    }

    #[test]
    fn test_unit_conversion() {
        assert_eq!(DistanceUnit::Kilometers.from_meters(1500.0), 1.5);
        assert_eq!(DistanceUnit::Meters.from_meters(1500.0), 1500.0);
        assert!((DistanceUnit::Miles.from_meters(1609.344) - 1.0).abs() < 1e-12);
        assert!((DistanceUnit::NauticalMiles.from_meters(1852.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_unit_abbreviations() {
        assert_eq!(DistanceUnit::Kilometers.abbreviation(), "km");
        assert_eq!(DistanceUnit::Miles.abbreviation(), "mi");
        assert_eq!(DistanceUnit::default(), DistanceUnit::Kilometers);
    }
}
