//! Coordinate transformations: ecliptic to equatorial, equatorial to horizontal (with
//! parallax and refraction), and horizontal back to equatorial.
//!
//! Cosines of latitude-like angles are taken as `sqrt(1 - sin²)`, which is valid because
//! those angles lie in [-π/2, π/2].

#![allow(clippy::unreadable_literal)]

use crate::math::{asin, atan2, cos, normalize_radians, sin, sqrt, tan};
use crate::time::TimeArguments;
use crate::types::{GeoLocation, SolarPosition};

/// Equatorial radius of the Earth in cm
const EARTH_RADIUS_CM: f64 = 6.3781370e8;

/// Astronomical unit in cm
const AU_CM: f64 = 1.49597870700e13;

/// Converts ecliptic longitude to equatorial coordinates (ecliptic latitude taken as zero).
///
/// Returns `(right_ascension, declination)`; right ascension is in (-π, π] and is not
/// normalized.
#[must_use]
pub fn ecliptic_to_equatorial(longitude: f64, obliquity: f64) -> (f64, f64) {
    let sin_longitude = sin(longitude);
    let right_ascension = atan2(cos(obliquity) * sin_longitude, cos(longitude));
    let declination = asin(sin(obliquity) * sin_longitude);
    (right_ascension, declination)
}

/// Computes the apparent Greenwich sidereal time in radians.
///
/// The result is not reduced to [0, 2π); it grows by about 2π per day.
#[must_use]
pub fn apparent_sidereal_time(
    args: &TimeArguments,
    nutation_in_longitude: f64,
    obliquity: f64,
) -> f64 {
    let gmst = 4.89496121273579229 + 6.3003880989849575 * args.days_since_j2000
        + 6.77070812713916e-6 * args.t2
        - 4.5087296615715e-10 * args.t2 * args.t;
    gmst + nutation_in_longitude * cos(obliquity)
}

/// Converts equatorial coordinates to horizontal ones, without parallax or refraction.
///
/// Returns `(azimuth, altitude)` with the azimuth in [0, 2π), measured from the South
/// towards the West.
#[must_use]
pub fn equatorial_to_horizontal_raw(
    latitude: f64,
    longitude: f64,
    right_ascension: f64,
    declination: f64,
    sidereal_time: f64,
) -> (f64, f64) {
    let hour_angle = sidereal_time + longitude - right_ascension;
    let sin_hour_angle = sin(hour_angle);
    let cos_hour_angle = cos(hour_angle);

    let sin_declination = sin(declination);
    let cos_declination = sqrt(1.0 - sin_declination * sin_declination);
    let tan_declination = sin_declination / cos_declination;

    let sin_latitude = sin(latitude);
    let cos_latitude = sqrt(1.0 - sin_latitude * sin_latitude);

    let azimuth = normalize_radians(atan2(
        sin_hour_angle,
        cos_hour_angle * sin_latitude - tan_declination * cos_latitude,
    ));
    let altitude =
        asin(sin_latitude * sin_declination + cos_latitude * cos_declination * cos_hour_angle);

    (azimuth, altitude)
}

/// Atmospheric refraction in radians for a geometric altitude in radians.
///
/// Calibrated for 101.0 kPa and 283.0 K.
#[must_use]
pub fn refraction(altitude: f64) -> f64 {
    2.9670597e-4 / tan(altitude + 3.137559e-3 / (altitude + 8.91863e-2))
}

/// Horizontal parallax correction for an observed altitude, in radians.
#[must_use]
pub fn parallax(altitude: f64, distance: f64) -> f64 {
    asin(EARTH_RADIUS_CM / (distance * AU_CM)) * cos(altitude)
}

/// Fills the horizontal coordinates of `position` from its equatorial ones.
///
/// Expects right ascension, declination, obliquity, nutation, distance and the time
/// arguments to be set. Stores the apparent sidereal time, the parallax-corrected
/// altitude, the azimuth and the refraction-corrected altitude. Parallax is applied
/// before refraction.
pub fn equatorial_to_horizontal(location: &GeoLocation, position: &mut SolarPosition) {
    let args = TimeArguments {
        julian_day: position.julian_day,
        days_since_j2000: position.days_since_j2000,
        t: position.julian_century,
        t2: position.julian_century_squared,
        t3: position.julian_century_cubed,
    };
    position.apparent_sidereal_time =
        apparent_sidereal_time(&args, position.nutation_in_longitude, position.obliquity);

    let (azimuth, geometric_altitude) = equatorial_to_horizontal_raw(
        location.latitude,
        location.longitude,
        position.right_ascension,
        position.declination,
        position.apparent_sidereal_time,
    );

    let altitude = geometric_altitude - parallax(geometric_altitude, position.distance);

    let scale = location
        .atmosphere
        .map_or(1.0, |atmosphere| atmosphere.refraction_scale());

    position.altitude = altitude;
    position.azimuth_refracted = azimuth;
    position.altitude_refracted = altitude + refraction(altitude) * scale;
}

/// Converts horizontal coordinates back to equatorial ones.
///
/// The azimuth must be measured from the South. Returns `(hour_angle, declination)` with
/// the hour angle in [0, 2π).
#[must_use]
pub fn horizontal_to_equatorial(latitude: f64, azimuth: f64, altitude: f64) -> (f64, f64) {
    let sin_altitude = sin(altitude);
    let cos_altitude = sqrt(1.0 - sin_altitude * sin_altitude);
    let tan_altitude = sin_altitude / cos_altitude;

    let sin_latitude = sin(latitude);
    let cos_latitude = sqrt(1.0 - sin_latitude * sin_latitude);

    let sin_azimuth = sin(azimuth);
    let cos_azimuth = cos(azimuth);

    let hour_angle = normalize_radians(atan2(
        sin_azimuth,
        cos_azimuth * sin_latitude + tan_altitude * cos_latitude,
    ));
    let declination =
        asin(sin_latitude * sin_altitude - cos_latitude * cos_altitude * cos_azimuth);

    (hour_angle, declination)
}
