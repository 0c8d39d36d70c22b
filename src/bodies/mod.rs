//! Solar system bodies and their orbital/rotational parameter table
//!
//! Every calculation in this crate is parameterised by a [`Body`], which selects
//! one row of a constant [`BodyParameters`] table. The coefficients follow the
//! low-precision planetary models published by Jürgen Giesen: a linear mean
//! anomaly, a six-term equation of center, a linear sidereal time and the
//! transit correction terms used by the event solver.

use crate::{CelestiaError, Result};
use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// The planets for which parameters are tabulated
///
/// The discriminant is the body's public index: 0 = Mercury through 5 = Saturn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Body {
    Mercury = 0,
    Venus = 1,
    Earth = 2,
    Mars = 3,
    Jupiter = 4,
    Saturn = 5,
}

impl Body {
    /// All bodies in index order
    pub const ALL: [Body; 6] = [
        Body::Mercury,
        Body::Venus,
        Body::Earth,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
    ];

    /// Look up a body by its public index
    pub fn from_index(index: i32) -> Result<Body> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Body::ALL.get(i).copied())
            .ok_or_else(|| CelestiaError::InvalidBody(index.to_string()))
    }

    /// The body's public index
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Get the body's name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Earth => "Earth",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
        }
    }

    /// The constant parameter row for this body
    pub fn parameters(&self) -> &'static BodyParameters {
        &BODY_PARAMETERS[self.index()]
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

lazy_static! {
    /// Map from lowercase body names to bodies
    static ref BODY_NAMES: HashMap<String, Body> = {
        let mut m = HashMap::new();
        for body in Body::ALL {
            m.insert(body.name().to_lowercase(), body);
        }
        m
    };
}

impl FromStr for Body {
    type Err = CelestiaError;

    /// Parse a case-insensitive body name or a decimal body index
    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        if let Ok(index) = key.parse::<i32>() {
            return Body::from_index(index);
        }
        BODY_NAMES
            .get(&key.to_lowercase())
            .copied()
            .ok_or_else(|| CelestiaError::InvalidBody(key.to_string()))
    }
}

impl TryFrom<i32> for Body {
    type Error = CelestiaError;

    fn try_from(index: i32) -> Result<Self> {
        Body::from_index(index)
    }
}

/// Anything that can select a row of the body table
///
/// Public operations accept either a typed [`Body`] or a raw selector (index or
/// name); raw selectors that do not name one of the six bodies fail with
/// [`CelestiaError::InvalidBody`].
pub trait IntoBody {
    fn into_body(self) -> Result<Body>;
}

impl IntoBody for Body {
    fn into_body(self) -> Result<Body> {
        Ok(self)
    }
}

impl IntoBody for &Body {
    fn into_body(self) -> Result<Body> {
        Ok(*self)
    }
}

impl IntoBody for i32 {
    fn into_body(self) -> Result<Body> {
        Body::from_index(self)
    }
}

impl IntoBody for usize {
    fn into_body(self) -> Result<Body> {
        Body::ALL
            .get(self)
            .copied()
            .ok_or_else(|| CelestiaError::InvalidBody(self.to_string()))
    }
}

impl IntoBody for &str {
    fn into_body(self) -> Result<Body> {
        self.parse()
    }
}

/// Constant orbital and rotational parameters of one body
///
/// All angles are in degrees and all rates in degrees per day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyParameters {
    /// Mean anomaly at J2000
    pub mean_anomaly_0: f64,
    /// Mean anomaly rate
    pub mean_anomaly_1: f64,
    /// Angle between the body's equator and its orbital plane
    pub obliquity: f64,
    /// Longitude of perihelion
    pub perihelion_longitude: f64,
    /// Equation of center coefficients for sin(M) .. sin(6M)
    pub center_coeffs: [f64; 6],
    /// Sidereal time at J2000 on the prime meridian
    pub sidereal_time_0: f64,
    /// Sidereal time rate
    pub sidereal_time_1: f64,
    /// Transit phase offset, in days
    pub transit_j0: f64,
    /// Transit correction amplitude for sin(M), in days
    pub transit_j1: f64,
    /// Transit correction amplitude for sin(2L), in days
    pub transit_j2: f64,
    /// Length of the mean solar day, in Earth days (negative for retrograde rotation)
    pub transit_j3: f64,
    /// Altitude of the Sun's centre at apparent rise and set
    pub horizon_elevation: f64,
    /// Apparent diameter of the solar disk seen from the body
    pub sun_angular_diameter: f64,
}

/// The parameter table, indexed by [`Body::index`]
pub static BODY_PARAMETERS: [BodyParameters; 6] = [
    // Mercury
    BodyParameters {
        mean_anomaly_0: 174.7948,
        mean_anomaly_1: 4.09233445,
        obliquity: 0.0351,
        perihelion_longitude: 230.3265,
        center_coeffs: [23.4400, 2.9818, 0.5255, 0.1058, 0.0241, 0.0055],
        sidereal_time_0: 132.3282,
        sidereal_time_1: 6.1385025,
        transit_j0: 45.3497,
        transit_j1: 11.4556,
        transit_j2: 0.0000,
        transit_j3: 175.9386,
        horizon_elevation: -0.69,
        sun_angular_diameter: 1.38,
    },
    // Venus
    BodyParameters {
        mean_anomaly_0: 50.4161,
        mean_anomaly_1: 1.60213034,
        obliquity: 2.6376,
        perihelion_longitude: 73.7576,
        center_coeffs: [0.7758, 0.0033, 0.0000, 0.0000, 0.0000, 0.0000],
        sidereal_time_0: 104.9067,
        sidereal_time_1: -1.4813688,
        transit_j0: 52.1268,
        transit_j1: -0.2516,
        transit_j2: 0.0099,
        transit_j3: -116.7505,
        horizon_elevation: -0.37,
        sun_angular_diameter: 0.74,
    },
    // Earth
    BodyParameters {
        mean_anomaly_0: 357.5291,
        mean_anomaly_1: 0.98560028,
        obliquity: 23.4393,
        perihelion_longitude: 102.9373,
        center_coeffs: [1.9148, 0.0200, 0.0003, 0.0000, 0.0000, 0.0000],
        sidereal_time_0: 280.1470,
        sidereal_time_1: 360.9856235,
        transit_j0: 0.0009,
        transit_j1: 0.0053,
        transit_j2: -0.0068,
        transit_j3: 1.0000,
        horizon_elevation: -0.83,
        sun_angular_diameter: 0.53,
    },
    // Mars
    BodyParameters {
        mean_anomaly_0: 19.3730,
        mean_anomaly_1: 0.52402068,
        obliquity: 25.1918,
        perihelion_longitude: 71.0041,
        center_coeffs: [10.6912, 0.6228, 0.0503, 0.0046, 0.0005, 0.0000],
        sidereal_time_0: 313.3827,
        sidereal_time_1: 350.89198226,
        transit_j0: 0.9047,
        transit_j1: 0.0305,
        transit_j2: -0.0082,
        transit_j3: 1.027491,
        horizon_elevation: -0.17,
        sun_angular_diameter: 0.35,
    },
    // Jupiter
    BodyParameters {
        mean_anomaly_0: 20.0202,
        mean_anomaly_1: 0.08308529,
        obliquity: 3.1189,
        perihelion_longitude: 237.1015,
        center_coeffs: [5.5549, 0.1683, 0.0071, 0.0003, 0.0000, 0.0000],
        sidereal_time_0: 145.9722,
        sidereal_time_1: 870.5360000,
        transit_j0: 0.3345,
        transit_j1: 0.0064,
        transit_j2: 0.0000,
        transit_j3: 0.4135778,
        horizon_elevation: -0.05,
        sun_angular_diameter: 0.10,
    },
    // Saturn
    BodyParameters {
        mean_anomaly_0: 317.0207,
        mean_anomaly_1: 0.03344414,
        obliquity: 26.7285,
        perihelion_longitude: 99.4587,
        center_coeffs: [6.3585, 0.2204, 0.0106, 0.0006, 0.0000, 0.0000],
        sidereal_time_0: 174.3508,
        sidereal_time_1: 810.7939024,
        transit_j0: 0.0766,
        transit_j1: 0.0078,
        transit_j2: -0.0040,
        transit_j3: 0.4440276,
        horizon_elevation: -0.03,
        sun_angular_diameter: 0.06,
    },
];
