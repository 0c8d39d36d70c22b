//! Calendar date and Julian day number conversion functions
//!
//! Integer Julian day numbers label the day that begins at noon UTC; the
//! fractional Julian days used elsewhere in the crate start at midnight on the
//! previous half day.

/// Convert Julian day integer to calendar date (year, month, day)
///
/// Uses the proleptic Gregorian calendar unless `julian_before` is set to a
/// specific Julian day, in which case the Julian calendar is used for dates
/// older than that.
pub fn compute_calendar_date(jd_integer: i64, julian_before: Option<i64>) -> (i64, u32, u32) {
    let use_gregorian = match julian_before {
        None => true,
        Some(jb) => jd_integer >= jb,
    };

    // See the Explanatory Supplement to the Astronomical Almanac 15.11.
    let f = jd_integer + 1401;
    let f = if use_gregorian {
        f + ((4 * jd_integer + 274277) / 146097 * 3 / 4 - 38)
    } else {
        f
    };

    let e = 4 * f + 3;
    let g = (e % 1461) / 4;
    let h = 5 * g + 2;
    let day = (h % 153) / 5 + 1;
    let month = (h / 153 + 2) % 12 + 1;
    let year = e / 1461 - 4716 + (12 + 2 - month) / 12;

    (year, month as u32, day as u32)
}

/// Convert (year, month, day) to Julian day integer
///
/// Uses the proleptic Gregorian calendar; integer division truncates toward
/// zero (Fliegel and Van Flandern).
pub fn compute_julian_day(year: i64, month: u32, day: u32) -> i64 {
    let month = i64::from(month);
    let janfeb = month < 3;

    1461 * (year + 4800 - if janfeb { 1 } else { 0 }) / 4
        + 367 * (month - 2 + if janfeb { 12 } else { 0 }) / 12
        - 3 * ((year + 4900 - if janfeb { 1 } else { 0 }) / 100) / 4
        - 32075
        + i64::from(day)
}

/// Split a fractional Julian day into its day number and the fraction of the
/// day elapsed since midnight
pub fn split_julian_date(jd: f64) -> (i64, f64) {
    let shifted = jd + 0.5;
    let number = shifted.floor();
    (number as i64, shifted - number)
}

/// Format a Julian date as a calendar date string (YYYY-MM-DD)
pub fn format_date(jd: f64) -> String {
    let (number, _) = split_julian_date(jd);
    let (year, month, day) = compute_calendar_date(number, None);
    format!("{:04}-{:02}-{:02}", year, month, day)
}
