//! # Sun Track
//!
//! Fast, accurate solar position and rise/set calculations for solar trackers.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The position of the Sun is computed with low-order closed-form series: a simplified
//! solar theory for the ecliptic longitude, plus nutation, aberration, parallax and
//! atmospheric refraction. Accuracy is better than 0.01° over a few centuries around
//! 2000, at a fraction of the cost of full theories, which suits controllers that update a
//! tracker every few seconds on low-power hardware.
//!
//! ## Features
//!
//! - Multiple configurations: `std` or `no_std`, with or without `chrono`, math via native or `libm`
//! - Allocation-free: every call works on stack values only
//! - Thread-safe: stateless, no global data
//! - Garbage in, garbage out: the core never validates or fails; checked constructors
//!   (`try_new`) are available for untrusted input
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Enable `DateTime<Tz>` conversion helpers
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono (most convenient)
//! sun-track = "0.1"
//!
//! # Minimal std (no chrono, smallest dependency tree)
//! sun-track = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (tracker firmware)
//! sun-track = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## References
//!
//! - Meeus, J. (1998). Astronomical Algorithms, 2nd ed. Willmann-Bell.
//! - van der Sluys, M.; van Kan, P.; Reintjes, J. SolTrack: a free, fast and accurate
//!   routine to compute the position of the Sun. <http://soltrack.sourceforge.net>
//!
//! ## Quick Start
//!
//! ### Solar Position
//! ```rust
//! use sun_track::{compute_position, GeoLocation, Instant, Options};
//!
//! // Arnhem, the Netherlands
//! let location = GeoLocation::from_degrees(5.950270, 51.987380);
//! let instant = Instant::new(2045, 7, 16, 6, 2, 49.217348);
//! let options = Options::default()
//!     .with_degrees(true)
//!     .with_north_equals_zero(true);
//!
//! let position = compute_position(&instant, &location, &options);
//! println!("Azimuth: {:.3}°", position.azimuth());
//! println!("Altitude: {:.3}°", position.altitude_refracted());
//! ```
//!
//! ### Solar Position (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use sun_track::{compute_position, GeoLocation, Instant, Options};
//! use chrono::{DateTime, FixedOffset};
//!
//! let datetime = "2026-06-21T12:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let position = compute_position(
//!     &Instant::from_datetime(&datetime),
//!     &GeoLocation::from_degrees(16.37, 48.21), // Vienna
//!     &Options::all(),
//! );
//!
//! println!("Distance: {:.6} AU", position.distance().unwrap());
//! # }
//! ```
//!
//! ### Rise, Transit and Set
//! ```rust
//! use sun_track::{rise_transit_set, GeoLocation, Horizon, Instant, Options, RiseSetOutcome};
//!
//! let date = Instant::new(2026, 6, 21, 0, 0, 0.0);
//! let location = GeoLocation::from_degrees(-122.4194, 37.7749); // San Francisco
//! let options = Options::default().with_degrees(true).with_north_equals_zero(true);
//!
//! match rise_transit_set(&date, &location, Horizon::SunriseSunset, &options) {
//!     RiseSetOutcome::Found(result) => {
//!         println!("Sunrise: {:.4} h UT", result.rise_time.hours());
//!         println!("Transit: {:.4} h UT", result.transit_time.hours());
//!         println!("Sunset: {:.4} h UT", result.set_time.hours());
//!     }
//!     RiseSetOutcome::NotFound(reason) => println!("No sunrise/sunset: {reason:?}"),
//! }
//! ```
//!
//! ## Pipeline
//!
//! 1. [`time`]: calendar instant to Julian Day and time arguments
//! 2. [`longitude`]: ecliptic longitude, distance, obliquity and nutation
//! 3. [`coordinates`]: equatorial and horizontal coordinates, parallax, refraction
//! 4. [`conventions`]: azimuth origin and angular units
//!
//! [`riseset`] drives the same pipeline iteratively.
//!
//! ## Coordinate System
//!
//! - **Azimuth**: 0 = South, measured towards the West (astronomical); 0 = North,
//!   measured clockwise with [`Options::use_north_equals_zero`]
//! - **Altitude**: 0 = horizon, +90° = zenith
//! - **Units**: radians unless [`Options::use_degrees`] is set

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("either the `std` or the `libm` feature must be enabled");

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::position::{compute_position, compute_position_from_julian_day};
pub use crate::riseset::{rise_transit_set, rise_transit_set_with};
pub use crate::time::{Instant, julian_day};
pub use crate::types::{
    Atmosphere, GeoLocation, Horizon, HoursUt, NotFound, Options, RiseSetOutcome,
    RiseSetResult, SolarPosition, SolverSettings, Transit,
};

// Pipeline stages
pub mod conventions;
pub mod coordinates;
pub mod longitude;
pub mod position;
pub mod riseset;
pub mod time;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_types_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<Instant>();
        assert_send_sync::<GeoLocation>();
        assert_send_sync::<Options>();
        assert_send_sync::<SolarPosition>();
        assert_send_sync::<RiseSetOutcome>();
        assert_send_sync::<Error>();
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_chrono_and_numeric_inputs_agree() {
        use chrono::{DateTime, FixedOffset, TimeZone, Utc};

        let datetime_fixed = "2023-06-21T12:00:00-07:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let datetime_utc = Utc.with_ymd_and_hms(2023, 6, 21, 19, 0, 0).unwrap();
        let location = GeoLocation::from_degrees(-122.4194, 37.7749);
        let options = Options::all();

        let position1 =
            compute_position(&Instant::from_datetime(&datetime_fixed), &location, &options);
        let position2 =
            compute_position(&Instant::from_datetime(&datetime_utc), &location, &options);
        let position3 =
            compute_position(&Instant::new(2023, 6, 21, 19, 0, 0.0), &location, &options);

        assert_eq!(position1, position2);
        assert_eq!(position2, position3);

        assert!((0.0..360.0).contains(&position1.azimuth()));
        assert!(position1.altitude_refracted() > 0.0);
    }
}
