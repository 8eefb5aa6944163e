//! Apparent geocentric ecliptic longitude of the Sun, with distance, obliquity and nutation.
//!
//! Low-order series after Meeus, "Astronomical Algorithms", ch. 22 and 25, with all
//! coefficients expressed in radians. Accuracy is a few arcseconds over the 21st century.

#![allow(clippy::unreadable_literal)]

use crate::math::{cos, normalize_radians, sin};
use crate::time::TimeArguments;

/// Mean Earth-Sun distance in AU, used when the true distance is not requested.
pub const MEAN_DISTANCE: f64 = 1.0000010178;

/// Ecliptic position of the Sun and the series quantities shared with later stages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPosition {
    /// Apparent ecliptic longitude in [0, 2π), referred to the true equinox of date
    pub longitude: f64,
    /// Earth-Sun distance in AU
    pub distance: f64,
    /// True obliquity of the ecliptic (radians)
    pub obliquity: f64,
    /// Nutation in longitude (radians)
    pub nutation_in_longitude: f64,
}

/// Computes the apparent ecliptic longitude of the Sun.
///
/// Without `compute_distance` the distance is [`MEAN_DISTANCE`]; the aberration term
/// then uses that value too.
///
/// # Example
/// ```
/// # use sun_track::{longitude::compute_longitude, time::TimeArguments};
/// let args = TimeArguments::from_julian_day(2_451_545.0);
/// let ecliptic = compute_longitude(&args, true);
/// assert!((ecliptic.longitude.to_degrees() - 280.37).abs() < 0.01);
/// assert!((ecliptic.distance - 0.9833).abs() < 0.0001);
/// ```
#[must_use]
pub fn compute_longitude(args: &TimeArguments, compute_distance: bool) -> EclipticPosition {
    let t = args.t;
    let t2 = args.t2;

    // Mean longitude and mean anomaly
    let l0 = 4.895063168 + 628.331966786 * t + 5.291838e-6 * t2;
    let m = 6.240060141 + 628.301955152 * t - 2.682571e-6 * t2;

    let eccentricity = 0.016708634 - 0.000042037 * t - 0.0000001267 * t2;

    // Equation of centre
    let c = (3.34161088e-2 - 8.40725e-5 * t - 2.443e-7 * t2) * sin(m)
        + (3.489437e-4 - 1.76278e-6 * t) * sin(2.0 * m)
        + 5.044e-6 * sin(3.0 * m);

    let true_longitude = l0 + c;
    let true_anomaly = m + c;

    let distance = if compute_distance {
        1.000001018 * (1.0 - eccentricity * eccentricity)
            / (1.0 + eccentricity * cos(true_anomaly))
    } else {
        MEAN_DISTANCE
    };

    // Longitude of the Moon's ascending node and mean longitude of the Moon
    let omega = 2.1824390725 - 33.7570464271 * t
        + 3.622256e-5 * t2
        + 3.7337958e-8 * args.t3
        - 2.879321e-10 * t2 * t2;
    let lm = 3.8103417 + 8399.709113 * t;

    let nutation_in_longitude = -8.338795e-5 * sin(omega) - 6.39954e-6 * sin(2.0 * l0)
        - 1.115e-6 * sin(2.0 * lm)
        + 1.018e-6 * sin(2.0 * omega);

    let aberration = -9.93087e-5 / distance;

    let longitude = normalize_radians(true_longitude + aberration + nutation_in_longitude);

    let mean_obliquity =
        0.409092804222 - 2.26965525e-4 * t - 2.86e-9 * t2 + 8.78967e-9 * args.t3;
    let nutation_in_obliquity = 4.46e-5 * cos(omega)
        + 2.76e-6 * cos(2.0 * l0)
        + 4.848e-7 * cos(2.0 * lm)
        - 4.36e-7 * cos(2.0 * omega);

    EclipticPosition {
        longitude,
        distance,
        obliquity: mean_obliquity + nutation_in_obliquity,
        nutation_in_longitude,
    }
}
