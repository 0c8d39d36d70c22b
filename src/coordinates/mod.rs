//! Observer locations and sky coordinate records
//!
//! All angles are in degrees.

pub mod angle;

use serde::{Deserialize, Serialize};

/// Where the observer stands on the body's surface
///
/// Longitude is measured positive WEST. No range validation is performed:
/// out-of-range values flow through the trigonometry and yield implausible
/// results rather than errors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverLocation {
    /// Latitude, positive north
    pub latitude: f64,
    /// Longitude, positive west
    pub longitude: f64,
}

impl ObserverLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Create a location from an east-positive longitude
    pub fn from_east_longitude(latitude: f64, east_longitude: f64) -> Self {
        Self::new(latitude, -east_longitude)
    }

    /// Whether the coordinates lie within the physical latitude and longitude ranges
    pub fn is_physical(&self) -> bool {
        self.latitude.abs() <= 90.0 && self.longitude.abs() <= 180.0
    }
}

/// Equatorial coordinates of the Sun seen from a body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equatorial {
    /// Right ascension in `(-180, 180]`
    pub right_ascension: f64,
    /// Declination
    pub declination: f64,
}

/// Horizontal coordinates of the Sun for an observer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Horizontal {
    /// Azimuth in `(-180, 180]`, zero towards the south
    pub azimuth: f64,
    /// Altitude above the horizon in `[-90, 90]`
    pub altitude: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_east_longitude_flips_sign() {
        let loc = ObserverLocation::from_east_longitude(52.0, 5.0);
        assert_eq!(loc.longitude, -5.0);
        assert_eq!(loc.latitude, 52.0);
    }

    #[test]
    fn test_is_physical() {
        assert!(ObserverLocation::new(52.0, -5.0).is_physical());
        assert!(ObserverLocation::new(-90.0, 180.0).is_physical());
        assert!(!ObserverLocation::new(91.0, 0.0).is_physical());
        assert!(!ObserverLocation::new(0.0, 184.6).is_physical());
    }
}
