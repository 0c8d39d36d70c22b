//! Equatorial coordinates of the Sun seen from a body, and the body's rotation
//!
//! Right ascension and declination follow from the ecliptic longitude and the
//! body's obliquity; sidereal time and hour angle add the observer's meridian.

use crate::bodies::IntoBody;
use crate::constants::{DEG2RAD, J2000, RAD2DEG};
use crate::coordinates::angle::reduce_above_turn;
use crate::coordinates::Equatorial;
use crate::orbit::ecliptic_longitude;
use crate::Result;

/// Obliquity of the ecliptic (e): the angle between the ecliptic and the
/// celestial equator of the body, in degrees
pub fn obliquity_ecliptic(body: impl IntoBody) -> Result<f64> {
    Ok(body.into_body()?.parameters().obliquity)
}

/// Longitude of perihelion (P): longitude of the ascending node plus the
/// argument of periapsis, in degrees
pub fn perihelion_longitude(body: impl IntoBody) -> Result<f64> {
    Ok(body.into_body()?.parameters().perihelion_longitude)
}

/// Right ascension (a) of the Sun, in `(-180, 180]` degrees
///
/// `a = atan2(sin(l) cos(e), cos(l))`. Not wrapped into `[0, 360)`.
pub fn right_ascension(jd: f64, body: impl IntoBody) -> Result<f64> {
    let body = body.into_body()?;
    let l = ecliptic_longitude(jd, body)? * DEG2RAD;
    let e = obliquity_ecliptic(body)? * DEG2RAD;

    Ok((l.sin() * e.cos()).atan2(l.cos()) * RAD2DEG)
}

/// Declination (d) of the Sun, in degrees
///
/// `d = atan(sin(l) sin(e))`.
pub fn declination(jd: f64, body: impl IntoBody) -> Result<f64> {
    let body = body.into_body()?;
    let l = ecliptic_longitude(jd, body)? * DEG2RAD;
    let e = obliquity_ecliptic(body)? * DEG2RAD;

    Ok((l.sin() * e.sin()).atan() * RAD2DEG)
}

/// Both equatorial coordinates at once
pub fn equatorial(jd: f64, body: impl IntoBody) -> Result<Equatorial> {
    let body = body.into_body()?;
    Ok(Equatorial {
        right_ascension: right_ascension(jd, body)?,
        declination: declination(jd, body)?,
    })
}

/// Sidereal time (theta) at the observer's meridian, in degrees
///
/// `lon` is measured positive west. Reduced only while it exceeds 360, so the
/// result may be negative.
pub fn sidereal_time(jd: f64, body: impl IntoBody, lon: f64) -> Result<f64> {
    let p = body.into_body()?.parameters();
    let theta = p.sidereal_time_0 + p.sidereal_time_1 * (jd - J2000) - lon;
    Ok(reduce_above_turn(theta))
}

/// Hour angle (H): how far the Sun has moved past the observer's meridian,
/// in degrees
///
/// `H = theta - a`, unwrapped.
pub fn hour_angle(jd: f64, body: impl IntoBody, lon: f64) -> Result<f64> {
    let body = body.into_body()?;
    let theta = sidereal_time(jd, body, lon)?;
    let a = right_ascension(jd, body)?;
    Ok(theta - a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::Body;
    use crate::CelestiaError;
    use approx::assert_relative_eq;

    const JD: f64 = 2453097.0;

    #[test]
    fn test_table_lookups_ignore_time() {
        assert_eq!(obliquity_ecliptic(Body::Earth).unwrap(), 23.4393);
        assert_eq!(obliquity_ecliptic(Body::Mars).unwrap(), 25.1918);
        assert_eq!(perihelion_longitude(Body::Earth).unwrap(), 102.9373);
        assert_eq!(perihelion_longitude(Body::Mars).unwrap(), 71.0041);
    }

    #[test]
    fn test_right_ascension_and_declination_mars() {
        assert_relative_eq!(
            right_ascension(JD, Body::Mars).unwrap(),
            11.860588414833234,
            epsilon = 1e-10
        );
        assert_relative_eq!(
            declination(JD, Body::Mars).unwrap(),
            5.496702418591823,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_equatorial_matches_components() {
        let eq = equatorial(JD, Body::Earth).unwrap();
        assert_eq!(eq.right_ascension, right_ascension(JD, Body::Earth).unwrap());
        assert_eq!(eq.declination, declination(JD, Body::Earth).unwrap());
    }

    #[test]
    fn test_sidereal_time() {
        assert_relative_eq!(
            sidereal_time(JD, Body::Earth, -5.0).unwrap(),
            14.834671999909915,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            sidereal_time(JD, Body::Mars, 184.6).unwrap(),
            33.13916751998477,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_sidereal_time_keeps_negative_values() {
        // Venus rotates retrograde: the linear model goes negative after J2000.
        let theta = sidereal_time(J2000 + 1000.0, Body::Venus, 0.0).unwrap();
        assert_relative_eq!(theta, 104.9067 - 1481.3688, epsilon = 1e-9);
    }

    #[test]
    fn test_hour_angle_is_sidereal_minus_right_ascension() {
        for body in Body::ALL {
            let h = hour_angle(JD, body, -5.0).unwrap();
            let theta = sidereal_time(JD, body, -5.0).unwrap();
            let a = right_ascension(JD, body).unwrap();
            assert_eq!(h, theta - a);
        }
    }

    #[test]
    fn test_invalid_body() {
        let err = CelestiaError::InvalidBody("12".to_string());
        assert_eq!(obliquity_ecliptic(12), Err(err.clone()));
        assert_eq!(perihelion_longitude(12), Err(err.clone()));
        assert_eq!(right_ascension(JD, 12), Err(err.clone()));
        assert_eq!(declination(JD, 12), Err(err.clone()));
        assert_eq!(sidereal_time(JD, 12, 34.7), Err(err.clone()));
        assert_eq!(hour_angle(JD, 12, 34.7), Err(err));
    }
}
