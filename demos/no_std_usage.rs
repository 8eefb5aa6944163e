//! Example demonstrating usage without std/chrono dependencies.
//!
//! Everything used here is available with `default-features = false, features = ["libm"]`:
//! plain numeric inputs, no allocation, no time zone handling. A tracker controller would
//! call this from its update loop with the time read from its RTC.

use sun_track::{GeoLocation, Horizon, Instant, Options, compute_position, rise_transit_set};

/// Target orientation of a two-axis tracker, in degrees.
struct TrackerTarget {
    azimuth: f64,
    elevation: f64,
}

enum TrackerMode {
    Night,
    Parked,
    Tracking(TrackerTarget),
}

fn tracker_mode(instant: &Instant, location: &GeoLocation) -> TrackerMode {
    let options = Options::default()
        .with_degrees(true)
        .with_north_equals_zero(true);
    let position = compute_position(instant, location, &options);

    if !position.is_sun_up() {
        return TrackerMode::Night;
    }
    // Park below the mechanical limit of 5°
    if position.altitude_refracted() <= 5.0 {
        return TrackerMode::Parked;
    }
    TrackerMode::Tracking(TrackerTarget {
        azimuth: position.azimuth(),
        elevation: position.altitude_refracted(),
    })
}

fn main() {
    // Vienna: 48.21°N, 16.37°E
    let location = GeoLocation::from_degrees(16.37, 48.21);

    println!("Tracker targets for Vienna on 2024-06-21 (UT):");
    for hour in (2..=20).step_by(2) {
        let instant = Instant::new(2024, 6, 21, hour, 0, 0.0);
        match tracker_mode(&instant, &location) {
            TrackerMode::Tracking(target) => println!(
                "  {hour:02}:00  azimuth {:7.3}°  elevation {:6.3}°",
                target.azimuth, target.elevation
            ),
            TrackerMode::Parked => println!("  {hour:02}:00  parked"),
            TrackerMode::Night => println!("  {hour:02}:00  night"),
        }
    }

    let limit = Horizon::custom_degrees(5.0).unwrap_or_default();
    let outcome = rise_transit_set(
        &Instant::new(2024, 6, 21, 0, 0, 0.0),
        &location,
        limit,
        &Options::default().with_degrees(true),
    );
    if let Some(result) = outcome.result() {
        println!(
            "\nTracking window: {:.3} h to {:.3} h UT",
            result.rise_time.hours(),
            result.set_time.hours()
        );
    }
}
