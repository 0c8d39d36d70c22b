//! # Angle Reduction Policies
//!
//! The position pipeline does not reduce every angle into one canonical range.
//! Each function documents which of the policies below it applies, and callers
//! must not assume a uniform range:
//!
//! - [`reduce_turn`]: Euclidean remainder into `[0, 360)`. Used for mean anomaly.
//! - [`reduce_above_turn`]: only values greater than 360 are reduced; values at
//!   or below 360 (including negative ones) are returned untouched. Used for
//!   ecliptic longitude and sidereal time.
//! - [`normalize_half_turn`]: a single ±360 correction into `[-180, 180]`. Used
//!   on hour angles inside the rise/set refinement.
//!
//! ## Examples
//!
//! ```rust
//! use celestia::coordinates::angle::{normalize_half_turn, reduce_above_turn, reduce_turn};
//!
//! assert_eq!(reduce_turn(-90.0), 270.0);
//! assert_eq!(reduce_above_turn(450.0), 90.0);
//! assert_eq!(reduce_above_turn(-450.0), -450.0);
//! assert_eq!(normalize_half_turn(270.0), -90.0);
//! ```

use crate::constants::FULL_TURN;

/// Reduces an angle into `[0, 360)` degrees
///
/// For non-negative input this is bit-identical to the truncating remainder
/// `angle % 360.0`.
pub fn reduce_turn(angle: f64) -> f64 {
    let reduced = angle.rem_euclid(FULL_TURN);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if reduced >= FULL_TURN {
        0.0
    } else {
        reduced
    }
}

/// Subtracts whole turns only while the angle exceeds 360 degrees
///
/// The result lies in `(-inf, 360]`. Negative input is never normalised, and an
/// angle of exactly 360 is kept as is.
pub fn reduce_above_turn(angle: f64) -> f64 {
    let mut angle = angle;
    while angle > FULL_TURN {
        angle %= FULL_TURN;
    }
    angle
}

/// Brings an angle into `[-180, 180]` with at most one correction of a full turn
///
/// Angles further than one turn outside the range are only partially corrected.
pub fn normalize_half_turn(angle: f64) -> f64 {
    if angle > 180.0 {
        angle - FULL_TURN
    } else if angle < -180.0 {
        angle + FULL_TURN
    } else {
        angle
    }
}
