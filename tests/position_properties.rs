//! Invariants of the position pipeline over a spread of dates and locations.

use approx::assert_abs_diff_eq;
use std::f64::consts::{FRAC_PI_2, TAU};
use sun_track::coordinates::{equatorial_to_horizontal_raw, horizontal_to_equatorial};
use sun_track::{
    Atmosphere, GeoLocation, Instant, Options, compute_position, compute_position_from_julian_day,
};

/// Deterministic spread of (Julian Day, location) pairs covering 1900-2200 and all latitudes.
fn sample_inputs() -> Vec<(f64, GeoLocation)> {
    let mut state: u64 = 0x5eed_1234;
    let mut next = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (state >> 11) as f64 / (1u64 << 53) as f64
    };

    (0..500)
        .map(|_| {
            let julian_day = 2_415_020.5 + next() * 109_573.0;
            let longitude = (next() * 2.0 - 1.0) * 180.0;
            let latitude = (next() * 2.0 - 1.0) * 89.9;
            (julian_day, GeoLocation::from_degrees(longitude, latitude))
        })
        .collect()
}

#[test]
fn test_repeated_calls_are_identical() {
    let instant = Instant::new(2031, 11, 2, 15, 44, 7.25);
    let location = GeoLocation::from_degrees(-70.6693, -33.4489);

    for options in [Options::default(), Options::all()] {
        let first = compute_position(&instant, &location, &options);
        let second = compute_position(&instant, &location, &options);
        assert_eq!(first, second);
        assert_eq!(first.azimuth().to_bits(), second.azimuth().to_bits());
        assert_eq!(
            first.altitude_refracted().to_bits(),
            second.altitude_refracted().to_bits()
        );
    }
}

#[test]
fn test_output_ranges() {
    let south_radians = Options::default()
        .with_refraction_equatorial(true)
        .with_distance(true);
    let north_degrees = Options::all();

    for (julian_day, location) in sample_inputs() {
        let position = compute_position_from_julian_day(julian_day, &location, &south_radians);
        assert!((0.0..TAU).contains(&position.azimuth()));
        assert!((0.0..TAU).contains(&position.hour_angle_refracted().unwrap()));
        assert!((0.0..TAU).contains(&position.ecliptic_longitude()));
        assert!(position.declination().abs() <= FRAC_PI_2);
        assert!(position.declination().abs() < 0.41);
        assert!(position.declination_refracted().unwrap().abs() <= FRAC_PI_2);
        assert!(position.altitude().abs() <= FRAC_PI_2);

        let distance = position.distance().unwrap();
        assert!(
            (0.983..=1.017).contains(&distance),
            "distance {distance} out of range at JD {julian_day}"
        );

        let position = compute_position_from_julian_day(julian_day, &location, &north_degrees);
        assert!((0.0..360.0).contains(&position.azimuth()));
        assert!((0.0..360.0).contains(&position.hour_angle_refracted().unwrap()));
        assert!(position.right_ascension() > -180.0 && position.right_ascension() <= 180.0);
        assert!(position.altitude().abs() <= 90.0);
        assert!(position.declination_refracted().unwrap().abs() <= 90.0);
    }
}

#[test]
fn test_refraction_raises_the_sun() {
    for (julian_day, location) in sample_inputs() {
        let position = compute_position_from_julian_day(julian_day, &location, &Options::default());
        // Refraction lifts the apparent Sun near and above the horizon
        if position.altitude() > 0.0 {
            assert!(position.altitude_refracted() > position.altitude());
            assert!(position.altitude_refracted() - position.altitude() < 0.01);
        }
    }
}

#[test]
fn test_equatorial_horizontal_round_trip() {
    for (julian_day, location) in sample_inputs() {
        let position = compute_position_from_julian_day(julian_day, &location, &Options::default());

        let (azimuth, altitude) = equatorial_to_horizontal_raw(
            location.latitude,
            location.longitude,
            position.right_ascension(),
            position.declination(),
            position.apparent_sidereal_time(),
        );
        let (hour_angle, declination) =
            horizontal_to_equatorial(location.latitude, azimuth, altitude);

        let right_ascension = position.apparent_sidereal_time() + location.longitude - hour_angle;
        let difference = (right_ascension - position.right_ascension() + std::f64::consts::PI)
            .rem_euclid(TAU)
            - std::f64::consts::PI;

        assert_abs_diff_eq!(difference, 0.0, epsilon = 1e-8);
        assert_abs_diff_eq!(declination, position.declination(), epsilon = 1e-8);
    }
}

#[test]
fn test_refraction_equatorial_tracks_geometric_position() {
    let options = Options::default().with_refraction_equatorial(true);

    for (julian_day, location) in sample_inputs() {
        let position = compute_position_from_julian_day(julian_day, &location, &options);
        if position.altitude() < 0.1 {
            continue;
        }
        // Refraction and parallax shift the declination by well under a degree in daylight
        let shift = position.declination_refracted().unwrap() - position.declination();
        assert!(shift.abs() < 0.01, "shift {shift} at JD {julian_day}");
    }
}

#[test]
fn test_atmosphere_scaling() {
    let instant = Instant::new(2024, 12, 21, 8, 30, 0.0);
    let location = GeoLocation::from_degrees(5.950270, 51.987380);
    let options = Options::default().with_degrees(true);

    let default_air = compute_position(&instant, &location, &options);
    let standard_air = compute_position(
        &instant,
        &location.with_atmosphere(Atmosphere::standard()),
        &options,
    );
    let cold_air = compute_position(
        &instant,
        &location.with_atmosphere(Atmosphere::new(103.0, 253.0).unwrap()),
        &options,
    );

    assert_eq!(default_air, standard_air);
    assert_eq!(default_air.altitude(), cold_air.altitude());
    assert_eq!(default_air.azimuth(), cold_air.azimuth());

    // Denser air bends more
    let default_refraction = default_air.altitude_refracted() - default_air.altitude();
    let cold_refraction = cold_air.altitude_refracted() - cold_air.altitude();
    assert!(cold_refraction > default_refraction);
}

#[test]
fn test_unvalidated_input_is_defined() {
    let location = GeoLocation::from_degrees(5.950270, 51.987380);
    let options = Options::all();

    // Month 13 is January of the next year
    let overflow = compute_position(&Instant::new(2023, 13, 5, 12, 0, 0.0), &location, &options);
    let january = compute_position(&Instant::new(2024, 1, 5, 12, 0, 0.0), &location, &options);
    assert_abs_diff_eq!(overflow.julian_day(), january.julian_day(), epsilon = 1e-9);
    assert_abs_diff_eq!(overflow.azimuth(), january.azimuth(), epsilon = 1e-6);

    // Out-of-range coordinates still produce finite numbers
    let nonsense = compute_position(
        &Instant::new(2024, 2, 31, 25, 61, 75.0),
        &GeoLocation::new(10.0, 2.0),
        &options,
    );
    assert!(nonsense.julian_day().is_finite());
    assert!(nonsense.azimuth().is_finite());
    assert!(nonsense.altitude_refracted().is_finite());

    // The checked constructors reject the same input
    assert!(Instant::try_new(2024, 2, 31, 25, 61, 75.0).is_err());
    assert!(GeoLocation::try_new(10.0, 2.0).is_err());
}
