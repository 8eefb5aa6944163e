//! Solar position pipeline.
//!
//! Julian Day, ecliptic longitude, equatorial coordinates, horizontal coordinates with
//! parallax and refraction, optional back-conversion to equatorial coordinates, and finally
//! the output conventions. Allocation-free and without shared state.

use crate::Instant;
use crate::conventions::{convert_radians_to_degrees, use_north_equals_zero};
use crate::coordinates::{
    ecliptic_to_equatorial, equatorial_to_horizontal, horizontal_to_equatorial,
};
use crate::longitude::compute_longitude;
use crate::time::{TimeArguments, julian_day};
use crate::types::{GeoLocation, Options, SolarPosition};

/// Computes the position of the Sun for a UT instant and location.
///
/// No input is validated; see [`Instant::try_new`] and [`GeoLocation::try_new`] for
/// checked construction.
///
/// # Example
/// ```
/// use sun_track::{compute_position, GeoLocation, Instant, Options};
///
/// let instant = Instant::new(2045, 7, 16, 6, 2, 49.217348);
/// let arnhem = GeoLocation::from_degrees(5.950270, 51.987380);
/// let options = Options::default().with_degrees(true).with_north_equals_zero(true);
///
/// let position = compute_position(&instant, &arnhem, &options);
/// assert!((position.azimuth() - 80.333).abs() < 0.001);
/// assert!((position.altitude_refracted() - 19.743).abs() < 0.001);
/// ```
#[must_use]
pub fn compute_position(
    instant: &Instant,
    location: &GeoLocation,
    options: &Options,
) -> SolarPosition {
    compute_position_from_julian_day(julian_day(instant), location, options)
}

/// Computes the position of the Sun for a Julian Day (UT) and location.
#[must_use]
pub fn compute_position_from_julian_day(
    julian_day: f64,
    location: &GeoLocation,
    options: &Options,
) -> SolarPosition {
    let args = TimeArguments::from_julian_day(julian_day);
    let ecliptic = compute_longitude(&args, options.compute_distance);
    let (right_ascension, declination) =
        ecliptic_to_equatorial(ecliptic.longitude, ecliptic.obliquity);

    let mut position = SolarPosition {
        julian_day: args.julian_day,
        days_since_j2000: args.days_since_j2000,
        julian_century: args.t,
        julian_century_squared: args.t2,
        julian_century_cubed: args.t3,
        ecliptic_longitude: ecliptic.longitude,
        distance: ecliptic.distance,
        obliquity: ecliptic.obliquity,
        nutation_in_longitude: ecliptic.nutation_in_longitude,
        right_ascension,
        declination,
        has_distance: options.compute_distance,
        has_refraction_equatorial: options.compute_refraction_equatorial,
        ..SolarPosition::default()
    };

    equatorial_to_horizontal(location, &mut position);

    if options.compute_refraction_equatorial {
        let (hour_angle, declination) = horizontal_to_equatorial(
            location.latitude,
            position.azimuth_refracted,
            position.altitude_refracted,
        );
        position.hour_angle_refracted = hour_angle;
        position.declination_refracted = declination;
    }

    if options.use_north_equals_zero {
        use_north_equals_zero(&mut position, options.compute_refraction_equatorial);
    }
    if options.use_degrees {
        convert_radians_to_degrees(&mut position, options.compute_refraction_equatorial);
    }

    position
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TWO_PI;

    fn arnhem() -> GeoLocation {
        GeoLocation::from_degrees(5.950270, 51.987380)
    }

    fn reference_instant() -> Instant {
        Instant::new(2045, 7, 16, 6, 2, 49.217348)
    }

    #[test]
    fn test_reference_position_in_degrees() {
        let position = compute_position(&reference_instant(), &arnhem(), &Options::all());

        assert!((position.julian_day() - 2_468_177.751_958_534_1).abs() < 1e-9);
        assert!((position.ecliptic_longitude() - 114.141_731_352_4).abs() < 1e-6);
        assert!((position.right_ascension() - 116.035_135_509_7).abs() < 1e-6);
        assert!((position.declination() - 21.280_146_984_0).abs() < 1e-6);
        assert!((position.altitude() - 19.696_348_409_6).abs() < 1e-6);
        assert!((position.azimuth() - 80.333_283_510_4).abs() < 1e-6);
        assert!((position.altitude_refracted() - 19.742_774_054_8).abs() < 1e-6);
        assert!((position.hour_angle_refracted().unwrap() - 95.142_773_570_1).abs() < 1e-6);
        assert!((position.declination_refracted().unwrap() - 21.313_647_811_3).abs() < 1e-6);
        assert!((position.distance().unwrap() - 1.016_405_795_146).abs() < 1e-10);
    }

    #[test]
    fn test_radians_south_convention() {
        let degrees = compute_position(&reference_instant(), &arnhem(), &Options::all());
        let radians = compute_position(
            &reference_instant(),
            &arnhem(),
            &Options::default()
                .with_refraction_equatorial(true)
                .with_distance(true),
        );

        let expected_azimuth = (degrees.azimuth() + 180.0).to_radians();
        assert!((radians.azimuth() - expected_azimuth).abs() < 1e-12);
        assert!(
            (radians.altitude_refracted().to_degrees() - degrees.altitude_refracted()).abs() < 1e-9
        );
        assert!((0.0..TWO_PI).contains(&radians.hour_angle_refracted().unwrap()));
    }

    #[test]
    fn test_unrequested_outputs_are_absent() {
        let position = compute_position(&reference_instant(), &arnhem(), &Options::default());
        assert_eq!(position.distance(), None);
        assert_eq!(position.hour_angle_refracted(), None);
        assert_eq!(position.declination_refracted(), None);

        // Mean distance shifts the position by far less than the series accuracy
        let with_distance = compute_position(
            &reference_instant(),
            &arnhem(),
            &Options::default().with_distance(true),
        );
        assert!((position.azimuth() - with_distance.azimuth()).abs() < 1e-5);
        assert!((position.altitude() - with_distance.altitude()).abs() < 1e-5);
    }

    #[test]
    fn test_julian_day_entry_point_matches() {
        let options = Options::all();
        let from_instant = compute_position(&reference_instant(), &arnhem(), &options);
        let from_jd =
            compute_position_from_julian_day(reference_instant().julian_day(), &arnhem(), &options);
        assert_eq!(from_instant, from_jd);
    }

    #[test]
    fn test_intermediates_stay_in_radians() {
        let position = compute_position(&reference_instant(), &arnhem(), &Options::all());
        assert!((position.obliquity() - 0.409).abs() < 0.001);
        assert!(position.nutation_in_longitude().abs() < 1e-4);
        assert!(position.apparent_sidereal_time() > TWO_PI);
    }
}
