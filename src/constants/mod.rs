//! Constants module for the position and event calculations

use std::f64::consts::PI;

// Time constants
/// J2000.0 epoch as Julian date
pub const J2000: f64 = 2_451_545.0;
/// Seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;
/// Minutes in a day
pub const MINUTES_PER_DAY: f64 = 1_440.0;
/// Hours in a day
pub const HOURS_PER_DAY: f64 = 24.0;
/// Seconds in a Julian year (365.25 days)
pub const SECONDS_PER_JULIAN_YEAR: f64 = 31_557_600.0;
/// Seconds in a Julian century
pub const SECONDS_PER_JULIAN_CENTURY: f64 = 3_155_695_200.0;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Degrees in a full turn
pub const FULL_TURN: f64 = 360.0;

// Calendar constants
/// First day of Gregorian calendar in Julian day number (1582-10-15)
pub const GREGORIAN_START: i32 = 2_299_161;
