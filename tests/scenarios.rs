//! Reference scenarios for Earth and Mars at Julian day 2453097.0
//! (2004-04-01 12:00 UTC), plus properties that hold for every body.

use approx::assert_relative_eq;
use rstest::rstest;

use celestia::almanac::{solve_sunrise, solve_sunset, solve_transit, Almanac, Event};
use celestia::bodies::Body;
use celestia::equatorial::{
    declination, hour_angle, obliquity_ecliptic, perihelion_longitude, right_ascension,
    sidereal_time,
};
use celestia::horizontal::{altitude, azimuth};
use celestia::orbit::{ecliptic_longitude, equation_of_center, mean_anomaly, true_anomaly};
use celestia::time::{jd_to_datetime, parse_datetime, to_julian_day};
use celestia::{CelestiaError, ObserverLocation, SkyPosition};

const JD: f64 = 2453097.0;

/// Angles agree to well below the last printed digit of the references
const ANGLE_EPS: f64 = 1e-9;
/// Instants agree to a few milliseconds
const JD_EPS: f64 = 1e-7;

#[rstest]
#[case(Body::Earth, 87.18073456000002, 1.9141507379386618, 89.09488529793867)]
#[case(Body::Mars, 112.65309536000007, 9.409206613394835, 122.0623019733949)]
fn orbit_reference(
    #[case] body: Body,
    #[case] m: f64,
    #[case] c: f64,
    #[case] v: f64,
) {
    assert_relative_eq!(mean_anomaly(JD, body).unwrap(), m, epsilon = ANGLE_EPS);
    assert_relative_eq!(equation_of_center(JD, body).unwrap(), c, epsilon = ANGLE_EPS);
    assert_relative_eq!(true_anomaly(JD, body).unwrap(), v, epsilon = ANGLE_EPS);
}

#[rstest]
#[case(Body::Earth, 12.032185297938668, 11.064870715700355, 4.740184662324431)]
#[case(Body::Mars, 13.066401973394875, 11.860588414833234, 5.496702418591823)]
fn equatorial_reference(
    #[case] body: Body,
    #[case] l: f64,
    #[case] a: f64,
    #[case] d: f64,
) {
    assert_relative_eq!(ecliptic_longitude(JD, body).unwrap(), l, epsilon = ANGLE_EPS);
    assert_relative_eq!(right_ascension(JD, body).unwrap(), a, epsilon = ANGLE_EPS);
    assert_relative_eq!(declination(JD, body).unwrap(), d, epsilon = ANGLE_EPS);
}

#[rstest]
#[case(Body::Earth, -5.0, 14.834671999909915, 3.76980128420956)]
#[case(Body::Mars, 184.6, 33.13916751998477, 21.278579105151533)]
fn rotation_reference(
    #[case] body: Body,
    #[case] lon: f64,
    #[case] theta: f64,
    #[case] h: f64,
) {
    assert_relative_eq!(sidereal_time(JD, body, lon).unwrap(), theta, epsilon = ANGLE_EPS);
    assert_relative_eq!(hour_angle(JD, body, lon).unwrap(), h, epsilon = ANGLE_EPS);
}

#[rstest]
#[case(Body::Earth, 52.0, -5.0, 5.109917114922145, 42.63670285961314)]
#[case(Body::Mars, -14.6, 184.6, 132.10875118644827, 60.861557344577825)]
fn horizontal_reference(
    #[case] body: Body,
    #[case] lat: f64,
    #[case] lon: f64,
    #[case] az: f64,
    #[case] alt: f64,
) {
    assert_relative_eq!(azimuth(JD, body, lat, lon).unwrap(), az, epsilon = ANGLE_EPS);
    assert_relative_eq!(altitude(JD, body, lat, lon).unwrap(), alt, epsilon = ANGLE_EPS);
}

#[rstest]
#[case(Body::Earth, 52.0, -5.0, 2453096.9895304884, 2453096.7190208086, 2453097.2600402692)]
#[case(Body::Mars, -14.6, 184.6, 2453096.939282806, 2453096.686034785, 2453097.192530769)]
fn event_reference(
    #[case] body: Body,
    #[case] lat: f64,
    #[case] lon: f64,
    #[case] transit: f64,
    #[case] sunrise: f64,
    #[case] sunset: f64,
) {
    assert_relative_eq!(solve_transit(JD, body, lon).unwrap(), transit, epsilon = JD_EPS);
    assert_relative_eq!(solve_sunrise(JD, body, lat, lon).unwrap(), sunrise, epsilon = JD_EPS);
    assert_relative_eq!(solve_sunset(JD, body, lat, lon).unwrap(), sunset, epsilon = JD_EPS);

    let day = Almanac::new(body, ObserverLocation::new(lat, lon))
        .unwrap()
        .day(JD)
        .unwrap();
    assert_eq!(day.transit, Event::Occurs(solve_transit(JD, body, lon).unwrap()));
    assert_eq!(day.sunrise, Event::Occurs(solve_sunrise(JD, body, lat, lon).unwrap()));
    assert_eq!(day.sunset, Event::Occurs(solve_sunset(JD, body, lat, lon).unwrap()));
}

#[rstest]
fn mean_anomaly_in_range(
    #[values(Body::Mercury, Body::Venus, Body::Earth, Body::Mars, Body::Jupiter, Body::Saturn)]
    body: Body,
    #[values(0.0, 1721423.5, 2400000.0, 2451545.0, 2453097.0, 2488069.5, 3000000.25)] jd: f64,
) {
    let m = mean_anomaly(jd, body).unwrap();
    assert!((0.0..360.0).contains(&m), "{} at {}: {}", body, jd, m);
}

#[rstest]
fn table_lookups_independent_of_time(
    #[values(Body::Mercury, Body::Venus, Body::Earth, Body::Mars, Body::Jupiter, Body::Saturn)]
    body: Body,
) {
    let params = body.parameters();
    assert_eq!(obliquity_ecliptic(body).unwrap(), params.obliquity);
    assert_eq!(perihelion_longitude(body).unwrap(), params.perihelion_longitude);
}

#[rstest]
fn exact_identities(
    #[values(Body::Mercury, Body::Venus, Body::Earth, Body::Mars, Body::Jupiter, Body::Saturn)]
    body: Body,
    #[values(2451545.0, 2453097.0, 2460000.5)] jd: f64,
) {
    let v = true_anomaly(jd, body).unwrap();
    assert_eq!(v, mean_anomaly(jd, body).unwrap() + equation_of_center(jd, body).unwrap());

    let h = hour_angle(jd, body, 34.7).unwrap();
    let theta = sidereal_time(jd, body, 34.7).unwrap();
    assert_eq!(h, theta - right_ascension(jd, body).unwrap());

    let l = ecliptic_longitude(jd, body).unwrap();
    assert!(l > -360.0 && l <= 360.0);
}

#[test]
fn invalid_body_everywhere() {
    let err = || Err(CelestiaError::InvalidBody("12".to_string()));

    assert_eq!(mean_anomaly(JD, 12), err());
    assert_eq!(equation_of_center(JD, 12), err());
    assert_eq!(true_anomaly(JD, 12), err());
    assert_eq!(ecliptic_longitude(JD, 12), err());
    assert_eq!(obliquity_ecliptic(12), err());
    assert_eq!(perihelion_longitude(12), err());
    assert_eq!(right_ascension(JD, 12), err());
    assert_eq!(declination(JD, 12), err());
    assert_eq!(sidereal_time(JD, 12, -5.0), err());
    assert_eq!(hour_angle(JD, 12, -5.0), err());
    assert_eq!(azimuth(JD, 12, 52.0, -5.0), err());
    assert_eq!(altitude(JD, 12, 52.0, -5.0), err());
    assert_eq!(solve_transit(JD, 12, -5.0), err());
    assert_eq!(solve_sunrise(JD, 12, 52.0, -5.0), err());
    assert_eq!(solve_sunset(JD, 12, 52.0, -5.0), err());
}

#[test]
fn bodies_by_name_and_index_agree() {
    assert_eq!(
        mean_anomaly(JD, "Earth").unwrap(),
        mean_anomaly(JD, 2).unwrap()
    );
    assert_eq!(
        solve_transit(JD, "mars", 184.6).unwrap(),
        solve_transit(JD, Body::Mars, 184.6).unwrap()
    );
}

#[test]
fn calendar_input_to_events() {
    // Noon UTC on 2004-04-01 is the reference Julian day.
    let dt = parse_datetime("2004-04-01T12:00:00Z").unwrap();
    let jd = to_julian_day(&dt);
    assert_eq!(jd, JD);

    let sunrise = solve_sunrise(jd, Body::Earth, 52.0, -5.0).unwrap();
    let utc = jd_to_datetime(sunrise).unwrap();
    assert_eq!(utc.format("%Y-%m-%d %H").to_string(), "2004-04-01 05");
}

#[test]
fn snapshot_serializes() {
    let pos = SkyPosition::compute(JD, Body::Earth, ObserverLocation::new(52.0, -5.0)).unwrap();
    let json = serde_json::to_value(pos).unwrap();
    assert_eq!(json["body"], "Earth");
    assert_relative_eq!(
        json["altitude"].as_f64().unwrap(),
        42.63670285961314,
        epsilon = ANGLE_EPS
    );
}
