//! Transit, sunrise and sunset of the Sun seen from a body
//!
//! Each event starts from a closed-form estimate which is then corrected by a
//! fixed-point iteration on the hour angle, using the body's mean solar day as
//! the correction scale. By default the iteration stops once two successive
//! estimates print identically with six fractional digits (sub-second
//! precision), or after [`DEFAULT_MAX_ITERATIONS`] corrections.
//!
//! The `solve_*` functions mirror the plain numeric interface: a body that
//! never rises or sets yields NaN, and an iteration that does not settle
//! yields its last estimate. [`Almanac`] reports the same computations as
//! typed [`Event`]s instead.
//!
//! ```rust
//! use celestia::almanac::{solve_sunrise, solve_transit};
//! use celestia::bodies::Body;
//!
//! let transit = solve_transit(2453097.0, Body::Earth, -5.0).unwrap();
//! let sunrise = solve_sunrise(2453097.0, Body::Earth, 52.0, -5.0).unwrap();
//! assert!(sunrise < transit);
//! ```

pub mod convergence;

pub use convergence::{Convergence, SolverConfig, DEFAULT_MAX_ITERATIONS};

use crate::bodies::{Body, IntoBody};
use crate::constants::{DEG2RAD, FULL_TURN, J2000, RAD2DEG};
use crate::coordinates::angle::normalize_half_turn;
use crate::coordinates::ObserverLocation;
use crate::equatorial::{declination, hour_angle};
use crate::orbit::{ecliptic_longitude, mean_anomaly};
use crate::Result;
use log::{debug, trace, warn};
use serde::Serialize;

/// Outcome of solving for one event
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Event {
    /// The event happens at this Julian day
    Occurs(f64),
    /// The Sun stays above the horizon all day (no rise or set)
    AlwaysAbove,
    /// The Sun stays below the horizon all day (no rise or set)
    AlwaysBelow,
    /// The refinement did not settle within the iteration cap
    Unconverged { last: f64, iterations: usize },
}

impl Event {
    /// The Julian day of the event, if it occurs
    pub fn jd(&self) -> Option<f64> {
        match self {
            Event::Occurs(jd) => Some(*jd),
            _ => None,
        }
    }
}

/// Horizon crossing to solve for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Crossing {
    Rise,
    Set,
}

impl Crossing {
    fn label(&self) -> &'static str {
        match self {
            Crossing::Rise => "sunrise",
            Crossing::Set => "sunset",
        }
    }
}

/// Result of a refinement loop
#[derive(Debug, Clone, Copy)]
struct Refinement {
    value: f64,
    iterations: usize,
    converged: bool,
}

impl Refinement {
    fn into_event(self) -> Event {
        if self.converged && self.value.is_finite() {
            Event::Occurs(self.value)
        } else {
            Event::Unconverged {
                last: self.value,
                iterations: self.iterations,
            }
        }
    }
}

/// Apply `step` until the configured stopping rule is met or the cap is hit
fn refine<F>(label: &str, initial: f64, config: &SolverConfig, mut step: F) -> Result<Refinement>
where
    F: FnMut(f64) -> Result<f64>,
{
    let mut tracker = config.convergence.tracker(initial);
    let mut estimate = initial;

    for iteration in 1..=config.max_iterations {
        estimate = step(estimate)?;
        trace!("{} iteration {}: {}", label, iteration, estimate);
        if tracker.settled(estimate) {
            debug!("{} settled after {} iterations at {}", label, iteration, estimate);
            return Ok(Refinement {
                value: estimate,
                iterations: iteration,
                converged: true,
            });
        }
    }

    warn!(
        "{} did not settle within {} iterations, last estimate {}",
        label, config.max_iterations, estimate
    );
    Ok(Refinement {
        value: estimate,
        iterations: config.max_iterations,
        converged: false,
    })
}

/// Closed-form first estimate of the transit nearest to `jd`
fn transit_estimate(jd: f64, body: Body, lon: f64) -> Result<f64> {
    let p = body.parameters();
    let l = ecliptic_longitude(jd, body)?;
    let m = mean_anomaly(jd, body)?;

    // Whole solar days since the body's reference phase, rounded half up.
    let n_x = (jd - J2000 - p.transit_j0) / p.transit_j3 - lon / FULL_TURN;
    let n = if n_x - n_x.floor() >= 0.5 {
        n_x.ceil()
    } else {
        n_x.floor()
    };

    Ok(jd
        + p.transit_j3 * (n - n_x)
        + p.transit_j1 * (m * DEG2RAD).sin()
        + p.transit_j2 * (2.0 * l * DEG2RAD).sin())
}

fn refine_transit(jd: f64, body: Body, lon: f64, config: &SolverConfig) -> Result<Refinement> {
    let j3 = body.parameters().transit_j3;
    let initial = transit_estimate(jd, body, lon)?;

    refine("transit", initial, config, |j_transit| {
        let h = hour_angle(j_transit, body, lon)?;
        Ok(j_transit - (h / FULL_TURN) * j3)
    })
}

/// Argument of the arccosine giving the horizon-crossing hour angle
///
/// `((sin(h0) - sin(lat) sin(d)) / cos(lat)) * cos(d)`, evaluated strictly left
/// to right: `cos(d)` multiplies the quotient rather than joining the divisor.
fn horizon_crossing_cosine(jd: f64, body: Body, lat: f64) -> Result<f64> {
    let h0 = body.parameters().horizon_elevation * DEG2RAD;
    let d = declination(jd, body)? * DEG2RAD;
    let lat = lat * DEG2RAD;

    Ok((h0.sin() - lat.sin() * d.sin()) / lat.cos() * d.cos())
}

/// Hour angle magnitude at which the Sun crosses the rise/set altitude, in
/// degrees
///
/// NaN when the Sun never reaches that altitude on this day.
pub fn horizon_hour_angle(jd: f64, body: impl IntoBody, lat: f64) -> Result<f64> {
    let body = body.into_body()?;
    Ok(horizon_crossing_cosine(jd, body, lat)?.acos() * RAD2DEG)
}

fn refine_crossing(
    jd: f64,
    body: Body,
    lat: f64,
    lon: f64,
    crossing: Crossing,
    config: &SolverConfig,
) -> Result<Refinement> {
    let h_cross = horizon_hour_angle(jd, body, lat)?;
    if !h_cross.is_finite() {
        warn!(
            "no {} for {} at latitude {} on {}",
            crossing.label(),
            body,
            lat,
            jd
        );
    }

    let j3 = body.parameters().transit_j3;
    let j_transit = refine_transit(jd, body, lon, config)?.value;

    match crossing {
        Crossing::Rise => {
            let initial = j_transit - (h_cross / FULL_TURN) * j3;
            refine(crossing.label(), initial, config, |j_rise| {
                let h = normalize_half_turn(hour_angle(j_rise, body, lon)?);
                Ok(j_rise - ((h + h_cross) / FULL_TURN) * j3)
            })
        }
        Crossing::Set => {
            let initial = j_transit + (h_cross / FULL_TURN) * j3;
            refine(crossing.label(), initial, config, |j_set| {
                let h = normalize_half_turn(hour_angle(j_set, body, lon)?);
                Ok(j_set - ((h - h_cross) / FULL_TURN) * j3)
            })
        }
    }
}

fn crossing_event(
    jd: f64,
    body: Body,
    observer: &ObserverLocation,
    crossing: Crossing,
    config: &SolverConfig,
) -> Result<Event> {
    let cosine = horizon_crossing_cosine(jd, body, observer.latitude)?;
    if cosine < -1.0 {
        return Ok(Event::AlwaysAbove);
    }
    if cosine > 1.0 {
        return Ok(Event::AlwaysBelow);
    }

    let refinement = refine_crossing(
        jd,
        body,
        observer.latitude,
        observer.longitude,
        crossing,
        config,
    )?;
    Ok(refinement.into_event())
}

/// Transit: the moment the Sun crosses the observer's meridian (hour angle 0),
/// as a Julian day
///
/// `lon` is positive west.
pub fn solve_transit(jd: f64, body: impl IntoBody, lon: f64) -> Result<f64> {
    let body = body.into_body()?;
    Ok(refine_transit(jd, body, lon, &SolverConfig::default())?.value)
}

/// Sunrise: the moment the top of the solar disk touches the horizon in the
/// morning, allowing for refraction and disk size, as a Julian day
///
/// NaN if the Sun does not rise or set on this day.
pub fn solve_sunrise(jd: f64, body: impl IntoBody, lat: f64, lon: f64) -> Result<f64> {
    let body = body.into_body()?;
    let config = SolverConfig::default();
    Ok(refine_crossing(jd, body, lat, lon, Crossing::Rise, &config)?.value)
}

/// Sunset: the moment the top of the solar disk touches the horizon in the
/// evening, as a Julian day
///
/// NaN if the Sun does not rise or set on this day.
pub fn solve_sunset(jd: f64, body: impl IntoBody, lat: f64, lon: f64) -> Result<f64> {
    let body = body.into_body()?;
    let config = SolverConfig::default();
    Ok(refine_crossing(jd, body, lat, lon, Crossing::Set, &config)?.value)
}

/// Time between sunrise and sunset, in days of the Julian calendar
pub fn day_length(jd: f64, body: impl IntoBody, lat: f64, lon: f64) -> Result<f64> {
    let body = body.into_body()?;
    Ok(solve_sunset(jd, body, lat, lon)? - solve_sunrise(jd, body, lat, lon)?)
}

/// All three events of one day
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyEvents {
    pub body: Body,
    pub observer: ObserverLocation,
    pub transit: Event,
    pub sunrise: Event,
    pub sunset: Event,
}

impl DailyEvents {
    /// Sunset minus sunrise, when both occur
    pub fn day_length(&self) -> Option<f64> {
        Some(self.sunset.jd()? - self.sunrise.jd()?)
    }
}

/// Event solver bound to one body and observer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Almanac {
    body: Body,
    observer: ObserverLocation,
    config: SolverConfig,
}

impl Almanac {
    /// Create an almanac with the default solver configuration
    pub fn new(body: impl IntoBody, observer: ObserverLocation) -> Result<Self> {
        Ok(Self {
            body: body.into_body()?,
            observer,
            config: SolverConfig::default(),
        })
    }

    /// Replace the solver configuration
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn body(&self) -> Body {
        self.body
    }

    pub fn observer(&self) -> &ObserverLocation {
        &self.observer
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solar transit nearest to `jd`
    pub fn transit_event(&self, jd: f64) -> Result<Event> {
        let refinement = refine_transit(jd, self.body, self.observer.longitude, &self.config)?;
        Ok(refinement.into_event())
    }

    /// Sunrise preceding the transit nearest to `jd`
    pub fn sunrise_event(&self, jd: f64) -> Result<Event> {
        crossing_event(jd, self.body, &self.observer, Crossing::Rise, &self.config)
    }

    /// Sunset following the transit nearest to `jd`
    pub fn sunset_event(&self, jd: f64) -> Result<Event> {
        crossing_event(jd, self.body, &self.observer, Crossing::Set, &self.config)
    }

    /// Transit, sunrise and sunset around `jd`
    pub fn day(&self, jd: f64) -> Result<DailyEvents> {
        Ok(DailyEvents {
            body: self.body,
            observer: self.observer,
            transit: self.transit_event(jd)?,
            sunrise: self.sunrise_event(jd)?,
            sunset: self.sunset_event(jd)?,
        })
    }
}
