//! Time module: conversions between civil date-times and Julian days
//!
//! Julian days here follow the astronomical convention that the day number
//! changes at noon UTC, so civil midday falls on an integer plus zero and
//! midnight on an integer plus one half.
//!
//! The UTC offset of a date-time is folded into the Julian day by ADDING it to
//! the local clock reading, as in `jd = local calendar day + (hour - 12)/24 +
//! minute/1440 + second/86400 + offset/86400`. Callers who need a strict UT
//! Julian day should convert to UTC first.

pub mod calendar;

use crate::constants::{
    GREGORIAN_START, HOURS_PER_DAY, MINUTES_PER_DAY, SECONDS_PER_DAY, SECONDS_PER_JULIAN_CENTURY,
    SECONDS_PER_JULIAN_YEAR,
};
use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, Offset, TimeZone, Timelike, Utc};
use thiserror::Error;

/// Error type for time operations
#[derive(Debug, Error, PartialEq)]
pub enum TimeError {
    #[error("Parsing error: {0}")]
    ParseError(String),

    #[error("Time out of range: {0}")]
    OutOfRange(String),
}

/// Result type for time operations
pub type Result<T> = std::result::Result<T, TimeError>;

/// Transforms a date-time into a Julian day
///
/// Whole seconds only; sub-second precision is dropped.
pub fn to_julian_day<Tz: TimeZone>(dt: &DateTime<Tz>) -> f64 {
    let day_number = calendar::compute_julian_day(i64::from(dt.year()), dt.month(), dt.day());

    let h = (i64::from(dt.hour()) - 12) as f64 / HOURS_PER_DAY;
    let m = f64::from(dt.minute()) / MINUTES_PER_DAY;
    let s = f64::from(dt.second()) / SECONDS_PER_DAY;
    let z = f64::from(dt.offset().fix().local_minus_utc()) / SECONDS_PER_DAY;

    day_number as f64 + h + m + s + z
}

/// Transforms a Julian day into its day of the year (1 = January 1st)
pub fn to_solar_day(jd: f64) -> u32 {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;

    let a = if z < f64::from(GREGORIAN_START) {
        z
    } else {
        let alpha = ((z - 1867216.25) / 36524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = (b - d - (30.6001 * e).floor() + f) as i64;
    let month = (if e < 14.0 { e - 1.0 } else { e - 13.0 }) as i64;
    let year = (if month > 2 { c - 4716.0 } else { c - 4715.0 }) as i64;

    let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
    let k = if leap { 1 } else { 2 };

    (275 * month / 9 - k * ((month + 9) / 12) + day - 30) as u32
}

/// Transforms a Julian day to Julian centuries
pub fn to_julian_century(jd: f64) -> f64 {
    jd * SECONDS_PER_JULIAN_YEAR / SECONDS_PER_JULIAN_CENTURY
}

/// Transforms a Julian day back into a UTC date-time, to the millisecond
pub fn jd_to_datetime(jd: f64) -> Result<DateTime<Utc>> {
    // Far outside chrono's year range; also bounds the integer calendar arithmetic.
    if !jd.is_finite() || jd.abs() > 1e10 {
        return Err(TimeError::OutOfRange(format!("Julian day {}", jd)));
    }

    let (number, fraction) = calendar::split_julian_date(jd);
    let (year, month, day) = calendar::compute_calendar_date(number, None);

    let midnight = i32::try_from(year)
        .ok()
        .and_then(|y| NaiveDate::from_ymd_opt(y, month, day))
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| TimeError::OutOfRange(format!("Julian day {}", jd)))?;

    let millis = (fraction * SECONDS_PER_DAY * 1000.0).round() as i64;
    Ok(Utc.from_utc_datetime(&(midnight + Duration::milliseconds(millis))))
}

/// Parse an RFC 3339 date-time such as `2004-04-01T12:00:00+02:00`
pub fn parse_datetime(text: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(text.trim())
        .map_err(|e| TimeError::ParseError(format!("{}: {}", text, e)))
}
