//! Full sky position snapshot of the Sun seen from a body

use crate::bodies::{Body, IntoBody};
use crate::coordinates::{Equatorial, Horizontal, ObserverLocation};
use crate::equatorial::{declination, hour_angle, right_ascension, sidereal_time};
use crate::horizontal::{altitude, azimuth};
use crate::orbit::{ecliptic_longitude, equation_of_center, mean_anomaly, true_anomaly};
use crate::Result;
use serde::Serialize;

/// Every intermediate angle of the position pipeline at one instant, in degrees
///
/// Each field holds exactly what the corresponding public function returns,
/// including its wrapping policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SkyPosition {
    pub body: Body,
    pub jd: f64,
    pub observer: ObserverLocation,
    pub mean_anomaly: f64,
    pub equation_of_center: f64,
    pub true_anomaly: f64,
    pub ecliptic_longitude: f64,
    pub right_ascension: f64,
    pub declination: f64,
    pub sidereal_time: f64,
    pub hour_angle: f64,
    pub azimuth: f64,
    pub altitude: f64,
}

impl SkyPosition {
    /// Compute the snapshot for `body` at Julian day `jd`
    pub fn compute(jd: f64, body: impl IntoBody, observer: ObserverLocation) -> Result<Self> {
        let body = body.into_body()?;
        let (lat, lon) = (observer.latitude, observer.longitude);

        Ok(Self {
            body,
            jd,
            observer,
            mean_anomaly: mean_anomaly(jd, body)?,
            equation_of_center: equation_of_center(jd, body)?,
            true_anomaly: true_anomaly(jd, body)?,
            ecliptic_longitude: ecliptic_longitude(jd, body)?,
            right_ascension: right_ascension(jd, body)?,
            declination: declination(jd, body)?,
            sidereal_time: sidereal_time(jd, body, lon)?,
            hour_angle: hour_angle(jd, body, lon)?,
            azimuth: azimuth(jd, body, lat, lon)?,
            altitude: altitude(jd, body, lat, lon)?,
        })
    }

    pub fn equatorial(&self) -> Equatorial {
        Equatorial {
            right_ascension: self.right_ascension,
            declination: self.declination,
        }
    }

    pub fn horizontal(&self) -> Horizontal {
        Horizontal {
            azimuth: self.azimuth,
            altitude: self.altitude,
        }
    }

    /// Whether the Sun's centre is above the body's rise/set altitude
    pub fn is_daylight(&self) -> bool {
        self.altitude > self.body.parameters().horizon_elevation
    }
}
