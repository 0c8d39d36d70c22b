//! Celestia: low-precision positions of the Sun seen from the planets
//!
//! This crate computes where the Sun stands in the sky of Mercury, Venus,
//! Earth, Mars, Jupiter or Saturn at a given Julian day and observer location,
//! and solves for the instants of solar transit, sunrise and sunset there.
//!
//! The models are closed-form: a linear mean anomaly, a six-term equation of
//! center and a linear sidereal time per body. There is no precession,
//! nutation or refraction model beyond a fixed rise/set altitude per body.
//!
//! ```rust
//! use celestia::bodies::Body;
//! use celestia::horizontal::altitude;
//!
//! // Sun altitude over Mars, latitude 14.6 S, longitude 184.6 W
//! let h = altitude(2453097.0, Body::Mars, -14.6, 184.6).unwrap();
//! assert!(h > 60.0 && h < 61.0);
//! ```

use thiserror::Error;

pub mod almanac;
pub mod bodies;
pub mod constants;
pub mod coordinates;
pub mod equatorial;
pub mod horizontal;
pub mod orbit;
pub mod positions;
pub mod time;

// Re-export commonly used types
pub use almanac::{Almanac, DailyEvents, Event, SolverConfig};
pub use bodies::{Body, BodyParameters, IntoBody};
pub use coordinates::ObserverLocation;
pub use positions::SkyPosition;

/// Main error type for the celestia library
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CelestiaError {
    /// The body selector names none of the tabulated bodies
    #[error("Invalid body: {0} (expected 0-5 or Mercury, Venus, Earth, Mars, Jupiter, Saturn)")]
    InvalidBody(String),
}

/// Result type for celestia operations
pub type Result<T> = std::result::Result<T, CelestiaError>;
