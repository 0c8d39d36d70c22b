//! Horizontal coordinates of the Sun for an observer on a body

use crate::bodies::IntoBody;
use crate::constants::{DEG2RAD, RAD2DEG};
use crate::coordinates::Horizontal;
use crate::equatorial::{declination, hour_angle};
use crate::Result;

/// Azimuth (A): direction along the horizon, zero towards the south, in
/// `(-180, 180]` degrees
///
/// `lat` is positive north, `lon` positive west.
pub fn azimuth(jd: f64, body: impl IntoBody, lat: f64, lon: f64) -> Result<f64> {
    let body = body.into_body()?;
    let d = declination(jd, body)? * DEG2RAD;
    let h = hour_angle(jd, body, lon)? * DEG2RAD;
    let lat = lat * DEG2RAD;

    Ok(h.sin().atan2(h.cos() * lat.sin() - d.tan() * lat.cos()) * RAD2DEG)
}

/// Altitude (h): height above the horizon, in `[-90, 90]` degrees
pub fn altitude(jd: f64, body: impl IntoBody, lat: f64, lon: f64) -> Result<f64> {
    let body = body.into_body()?;
    let d = declination(jd, body)? * DEG2RAD;
    let h = hour_angle(jd, body, lon)? * DEG2RAD;
    let lat = lat * DEG2RAD;

    Ok((lat.sin() * d.sin() + lat.cos() * d.cos() * h.cos()).asin() * RAD2DEG)
}

/// Both horizontal coordinates at once
pub fn horizontal(jd: f64, body: impl IntoBody, lat: f64, lon: f64) -> Result<Horizontal> {
    let body = body.into_body()?;
    Ok(Horizontal {
        azimuth: azimuth(jd, body, lat, lon)?,
        altitude: altitude(jd, body, lat, lon)?,
    })
}
