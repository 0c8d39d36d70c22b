//! Celestia command line tool
//!
//! Prints the Sun's position in the sky of a planet, or the day's transit,
//! sunrise and sunset, for one observer.
//!
//! Usage:
//!   cargo run --bin celestia -- position --body earth --date 2004-04-01T12:00:00Z --lat 52 --lon -5
//!   cargo run --bin celestia -- events --body mars --jd 2453097.0 --lat -14.6 --lon 184.6
//!   cargo run --bin celestia -- bodies

use clap::{ArgAction, Args, Parser, Subcommand};
use log::{debug, LevelFilter};

use celestia::almanac::{Almanac, Convergence, DailyEvents, Event, SolverConfig};
use celestia::bodies::{Body, BODY_PARAMETERS};
use celestia::coordinates::ObserverLocation;
use celestia::positions::SkyPosition;
use celestia::time::{jd_to_datetime, parse_datetime, to_julian_day};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Sun position and daily events seen from the planets
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Print JSON instead of text
    #[arg(long, action = ArgAction::SetTrue, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sun position in the sky at one instant
    Position(Target),
    /// Transit, sunrise and sunset around one instant
    Events {
        #[command(flatten)]
        target: Target,

        /// Give up refining an event after this many corrections
        #[arg(long)]
        max_iterations: Option<usize>,

        /// Stop refining once successive estimates differ by at most this many days
        #[arg(long)]
        epsilon: Option<f64>,
    },
    /// List the body parameter table
    Bodies,
}

/// Body, instant and observer shared by the subcommands
#[derive(Args, Debug)]
struct Target {
    /// Body name or index (0 = Mercury .. 5 = Saturn)
    #[arg(short, long, default_value = "earth")]
    body: Body,

    /// RFC 3339 date-time; defaults to now
    #[arg(short, long, conflicts_with = "jd")]
    date: Option<String>,

    /// Julian day, instead of --date
    #[arg(long, allow_negative_numbers = true)]
    jd: Option<f64>,

    /// Observer latitude in degrees, positive north
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    lat: f64,

    /// Observer longitude in degrees, positive WEST
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    lon: f64,
}

impl Target {
    fn julian_day(&self) -> Result<f64> {
        let jd = match (self.jd, &self.date) {
            (Some(jd), _) => jd,
            (None, Some(date)) => to_julian_day(&parse_datetime(date)?),
            (None, None) => to_julian_day(&chrono::Utc::now()),
        };
        debug!("resolved instant to Julian day {}", jd);
        Ok(jd)
    }

    fn observer(&self) -> ObserverLocation {
        ObserverLocation::new(self.lat, self.lon)
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

/// Prints a section header with a title and separator line
fn print_section_header(title: &str) {
    println!("\n{}:", title);
    println!("-------------------------------------------------------");
}

/// Helper to print named values in a formatted way
fn print_named_value(name: &str, value: impl std::fmt::Display) {
    println!("{:<20} {}", format!("{}:", name), value);
}

/// Julian day with its UTC rendering
fn describe_jd(jd: f64) -> String {
    match jd_to_datetime(jd) {
        Ok(dt) => format!("{:.6} ({})", jd, dt.format("%Y-%m-%d %H:%M:%S UTC")),
        Err(_) => format!("{:.6}", jd),
    }
}

fn describe_event(event: &Event) -> String {
    match event {
        Event::Occurs(jd) => describe_jd(*jd),
        Event::AlwaysAbove => "none (Sun stays above the horizon)".to_string(),
        Event::AlwaysBelow => "none (Sun stays below the horizon)".to_string(),
        Event::Unconverged { last, iterations } => format!(
            "not settled after {} iterations (last estimate {})",
            iterations,
            describe_jd(*last)
        ),
    }
}

fn display_position(pos: &SkyPosition) {
    print_section_header(&format!("Sun seen from {}", pos.body));
    print_named_value("Julian day", describe_jd(pos.jd));
    print_named_value(
        "Observer",
        format!("lat {:.4}, lon {:.4} W", pos.observer.latitude, pos.observer.longitude),
    );

    print_section_header("Orbit");
    print_named_value("Mean anomaly", format!("{:.6}°", pos.mean_anomaly));
    print_named_value("Equation of center", format!("{:.6}°", pos.equation_of_center));
    print_named_value("True anomaly", format!("{:.6}°", pos.true_anomaly));
    print_named_value("Ecliptic longitude", format!("{:.6}°", pos.ecliptic_longitude));

    print_section_header("Sky");
    print_named_value("Right ascension", format!("{:.6}°", pos.right_ascension));
    print_named_value("Declination", format!("{:.6}°", pos.declination));
    print_named_value("Sidereal time", format!("{:.6}°", pos.sidereal_time));
    print_named_value("Hour angle", format!("{:.6}°", pos.hour_angle));
    print_named_value("Azimuth", format!("{:.6}°", pos.azimuth));
    print_named_value("Altitude", format!("{:.6}°", pos.altitude));
}

fn display_events(events: &DailyEvents) {
    print_section_header(&format!("Sun events on {}", events.body));
    print_named_value("Transit", describe_event(&events.transit));
    print_named_value("Sunrise", describe_event(&events.sunrise));
    print_named_value("Sunset", describe_event(&events.sunset));
    if let Some(length) = events.day_length() {
        print_named_value("Day length", format!("{:.4} h", length * 24.0));
    }
}

fn display_bodies() {
    print_section_header("Body parameters");
    println!(
        "{:<3} {:<8} {:>10} {:>12} {:>9} {:>10} {:>12} {:>7}",
        "#", "Body", "M0", "M1", "Obliq.", "Perihel.", "Solar day", "h0"
    );
    for body in Body::ALL {
        let p = body.parameters();
        println!(
            "{:<3} {:<8} {:>10.4} {:>12.8} {:>9.4} {:>10.4} {:>12.6} {:>7.2}",
            body.index(),
            body.name(),
            p.mean_anomaly_0,
            p.mean_anomaly_1,
            p.obliquity,
            p.perihelion_longitude,
            p.transit_j3,
            p.horizon_elevation
        );
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match &cli.command {
        Command::Position(target) => {
            let pos = SkyPosition::compute(target.julian_day()?, target.body, target.observer())?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&pos)?);
            } else {
                display_position(&pos);
            }
        }
        Command::Events {
            target,
            max_iterations,
            epsilon,
        } => {
            let mut config = SolverConfig::default();
            if let Some(max) = max_iterations {
                config = config.with_max_iterations(*max);
            }
            if let Some(eps) = epsilon {
                config = config.with_convergence(Convergence::Epsilon(*eps));
            }
            debug!("solver configuration: {:?}", config);

            let almanac = Almanac::new(target.body, target.observer())?.with_config(config);
            let events = almanac.day(target.julian_day()?)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&events)?);
            } else {
                display_events(&events);
            }
        }
        Command::Bodies => {
            if cli.json {
                let rows: Vec<_> = Body::ALL.iter().zip(BODY_PARAMETERS.iter()).collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                display_bodies();
            }
        }
    }

    Ok(())
}
