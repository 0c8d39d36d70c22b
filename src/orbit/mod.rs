//! Orbital position of a body: mean anomaly through ecliptic longitude
//!
//! These are pure functions of a Julian day and a body. The ecliptic longitude
//! is that of the Sun as seen from the body, i.e. the heliocentric longitude of
//! the body plus 180 degrees.

use crate::bodies::IntoBody;
use crate::constants::{DEG2RAD, J2000};
use crate::coordinates::angle::{reduce_above_turn, reduce_turn};
use crate::Result;

/// Mean anomaly (M): the position the body would have relative to its
/// perihelion if its orbit were a circle, in `[0, 360)` degrees
pub fn mean_anomaly(jd: f64, body: impl IntoBody) -> Result<f64> {
    let p = body.into_body()?.parameters();
    Ok(reduce_turn(p.mean_anomaly_0 + p.mean_anomaly_1 * (jd - J2000)))
}

/// Equation of center (C): the angular difference between the true position on
/// the elliptical orbit and the uniform-motion position, in degrees
///
/// Evaluated as `c1 sin(M) + c2 sin(2M) + ... + c6 sin(6M)`. Not wrapped.
pub fn equation_of_center(jd: f64, body: impl IntoBody) -> Result<f64> {
    let body = body.into_body()?;
    let m = mean_anomaly(jd, body)? * DEG2RAD;
    let c = &body.parameters().center_coeffs;

    Ok(c[0] * m.sin()
        + c[1] * (2.0 * m).sin()
        + c[2] * (3.0 * m).sin()
        + c[3] * (4.0 * m).sin()
        + c[4] * (5.0 * m).sin()
        + c[5] * (6.0 * m).sin())
}

/// True anomaly (v = M + C), unwrapped
pub fn true_anomaly(jd: f64, body: impl IntoBody) -> Result<f64> {
    let body = body.into_body()?;
    let m = mean_anomaly(jd, body)?;
    let c = equation_of_center(jd, body)?;
    Ok(m + c)
}

/// Ecliptic longitude (l) of the Sun seen from the body, in degrees
///
/// `l = M + perihelion + 180 + C`, reduced only while it exceeds 360. The result
/// lies in `(-360, 360]`; callers needing `[0, 360)` must reduce it themselves.
pub fn ecliptic_longitude(jd: f64, body: impl IntoBody) -> Result<f64> {
    let body = body.into_body()?;
    let m = mean_anomaly(jd, body)?;
    let w = body.parameters().perihelion_longitude;
    let c = equation_of_center(jd, body)?;

    let mean_longitude = m + w + 180.0;
    Ok(reduce_above_turn(mean_longitude + c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::Body;
    use crate::CelestiaError;
    use approx::assert_relative_eq;

    const JD: f64 = 2453097.0;

    #[test]
    fn test_mean_anomaly_earth() {
        assert_relative_eq!(
            mean_anomaly(JD, Body::Earth).unwrap(),
            87.18073456000002,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_mean_anomaly_before_j2000_is_reduced() {
        // The raw linear model is negative here.
        let m = mean_anomaly(2400000.0, Body::Earth).unwrap();
        assert!((0.0..360.0).contains(&m));
        assert_relative_eq!(m, 314.7626674, epsilon = 1e-6);
    }

    #[test]
    fn test_equation_of_center_mars() {
        assert_relative_eq!(
            equation_of_center(JD, Body::Mars).unwrap(),
            9.409206613394835,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_true_anomaly_is_exact_sum() {
        for body in Body::ALL {
            let v = true_anomaly(JD, body).unwrap();
            let m = mean_anomaly(JD, body).unwrap();
            let c = equation_of_center(JD, body).unwrap();
            assert_eq!(v, m + c);
        }
    }

    #[test]
    fn test_ecliptic_longitude_reduction() {
        // Mercury: M + P + 180 + C is above 360 and gets reduced.
        let l = ecliptic_longitude(JD, Body::Mercury).unwrap();
        assert_relative_eq!(l, 116.61055411150653, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_body_propagates() {
        let err = CelestiaError::InvalidBody("12".to_string());
        assert_eq!(mean_anomaly(JD, 12), Err(err.clone()));
        assert_eq!(equation_of_center(JD, 12), Err(err.clone()));
        assert_eq!(true_anomaly(JD, 12), Err(err.clone()));
        assert_eq!(ecliptic_longitude(JD, 12), Err(err));
    }
}
