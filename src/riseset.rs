//! Rise, transit and set times of the Sun.
//!
//! Iterative search driven by the position pipeline. Starting from the Sun's position at
//! 0h UT, each event time is estimated from the hour angle at which the Sun crosses the
//! meridian (transit) or the altitude threshold (rise, set), then refined by re-evaluating
//! the position at the estimated time until the correction drops below the tolerance.
//!
//! Times are returned as hours since 0h UT of the requested date. Each initial estimate is
//! reduced to one revolution of the Earth, and a converged rise or set is only accepted
//! within [-12 h, 36 h) and when the Sun crosses the threshold in the right direction
//! (ascending at rise, descending at set). For observers far from Greenwich the "set" of
//! a UT date can therefore precede its "rise".

use crate::Instant;
use crate::math::{PI, R2D, TWO_PI, acos, asin, atan2, cos, fold_pi, normalize_radians, sin, tan};
use crate::position::compute_position_from_julian_day;
use crate::time::julian_day;
use crate::types::{
    GeoLocation, Horizon, HoursUt, NotFound, Options, RiseSetOutcome, RiseSetResult,
    SolverSettings, Transit,
};

/// Sidereal days per solar day (epoch 2000)
const SIDEREAL_RATE: f64 = 1.002_737_909_350_795;

/// Accepted rise and set times, in radians of Earth rotation since 0h UT (-12 h to 36 h)
const EVENT_WINDOW: (f64, f64) = (-PI, 3.0 * PI);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    Transit,
    Rise,
    Set,
}

/// State at the last evaluation of a converged search.
#[derive(Debug, Clone, Copy)]
struct Converged {
    /// Event time in radians of Earth rotation since 0h UT
    time: f64,
    hour_angle: f64,
    altitude: f64,
    declination: f64,
}

/// Fixed inputs shared by the three event searches of one day.
struct Search<'a> {
    location: &'a GeoLocation,
    midnight_julian_day: f64,
    midnight_sidereal_time: f64,
    threshold: f64,
    tolerance: f64,
    max_iterations: u32,
}

impl Search<'_> {
    /// Refines an initial time estimate for one event.
    ///
    /// Returns `None` when the correction does not drop below the tolerance within
    /// `max_iterations` steps or becomes non-finite, and when a rise or set converges
    /// outside `EVENT_WINDOW` or on a crossing in the wrong direction.
    fn refine(&self, event: Event, initial: f64) -> Option<Converged> {
        let latitude = self.location.latitude;
        let mut time = initial;

        for iteration in 1..=self.max_iterations {
            let sidereal_time = self.midnight_sidereal_time + SIDEREAL_RATE * time;
            let position = compute_position_from_julian_day(
                self.midnight_julian_day + time / TWO_PI,
                self.location,
                &Options::default(),
            );
            let declination = position.declination;

            let hour_angle =
                fold_pi(sidereal_time + self.location.longitude - position.right_ascension);
            let altitude = asin(
                sin(latitude) * sin(declination)
                    + cos(latitude) * cos(declination) * cos(hour_angle),
            );

            let step = match event {
                Event::Transit => -fold_pi(hour_angle),
                Event::Rise | Event::Set => {
                    (altitude - self.threshold)
                        / (cos(declination) * cos(latitude) * sin(hour_angle))
                }
            };
            if !step.is_finite() {
                log::warn!("{event:?} search produced a non-finite step at iteration {iteration}");
                return None;
            }

            time += step;
            log::trace!(
                "{event:?} iteration {iteration}: time {:.6} h, step {:.3e} rad",
                time * 12.0 / PI,
                step
            );

            if step.abs() <= self.tolerance {
                let converged = Converged {
                    time,
                    hour_angle,
                    altitude,
                    declination,
                };
                return accept(event, converged).then_some(converged);
            }
        }

        log::warn!(
            "{event:?} search failed to converge within {} iterations (threshold {:.4} rad)",
            self.max_iterations,
            self.threshold
        );
        None
    }
}

/// Computes rise, transit and set for the date of `date` with the default solver settings.
///
/// Only the calendar date of `date` is used. Of the options, `use_degrees` and
/// `use_north_equals_zero` apply to the returned azimuths and transit altitude.
///
/// # Example
/// ```
/// use sun_track::{rise_transit_set, GeoLocation, Horizon, Instant, Options};
///
/// let date = Instant::new(2045, 7, 16, 0, 0, 0.0);
/// let arnhem = GeoLocation::from_degrees(5.950270, 51.987380);
/// let options = Options::default().with_degrees(true).with_north_equals_zero(true);
///
/// let outcome = rise_transit_set(&date, &arnhem, Horizon::SunriseSunset, &options);
/// let result = outcome.result().unwrap();
/// assert!((result.rise_time.hours() - 3.599).abs() < 0.001);
/// assert!((result.set_azimuth - 307.26).abs() < 0.01);
/// ```
#[must_use]
pub fn rise_transit_set(
    date: &Instant,
    location: &GeoLocation,
    horizon: Horizon,
    options: &Options,
) -> RiseSetOutcome {
    rise_transit_set_with(date, location, horizon, options, &SolverSettings::default())
}

/// Computes rise, transit and set for the date of `date` with explicit solver settings.
///
/// A polar day or night yields [`NotFound::AlwaysAbove`] or [`NotFound::AlwaysBelow`],
/// still carrying the transit. A search that does not converge yields
/// [`NotFound::NoConvergence`]; no partial result is returned.
#[must_use]
pub fn rise_transit_set_with(
    date: &Instant,
    location: &GeoLocation,
    horizon: Horizon,
    options: &Options,
    settings: &SolverSettings,
) -> RiseSetOutcome {
    let midnight_julian_day = julian_day(&date.midnight());
    let midnight =
        compute_position_from_julian_day(midnight_julian_day, location, &Options::default());

    let search = Search {
        location,
        midnight_julian_day,
        midnight_sidereal_time: midnight.apparent_sidereal_time,
        threshold: horizon.altitude(),
        tolerance: settings.tolerance_radians(),
        max_iterations: settings.max_iterations,
    };

    let latitude = location.latitude;
    let cos_h0 = (sin(search.threshold) - sin(latitude) * sin(midnight.declination))
        / (cos(latitude) * cos(midnight.declination));

    let transit_estimate = normalize_radians(
        midnight.right_ascension - location.longitude - midnight.apparent_sidereal_time,
    );
    log::debug!(
        "initial transit estimate {:.4} h, cos(H0) = {cos_h0:.4}",
        transit_estimate * 12.0 / PI
    );

    let Some(transit) = search.refine(Event::Transit, transit_estimate) else {
        return RiseSetOutcome::NotFound(NotFound::NoConvergence);
    };
    let transit_result = Transit {
        time: HoursUt::from_radians(transit.time),
        altitude: output_altitude(transit.altitude, options),
    };

    if cos_h0 > 1.0 {
        log::debug!("sun stays below {:.4} rad all day", search.threshold);
        return RiseSetOutcome::NotFound(NotFound::AlwaysBelow {
            transit: transit_result,
        });
    }
    if cos_h0 < -1.0 {
        log::debug!("sun stays above {:.4} rad all day", search.threshold);
        return RiseSetOutcome::NotFound(NotFound::AlwaysAbove {
            transit: transit_result,
        });
    }

    let h0 = acos(cos_h0);
    let rise_estimate = normalize_radians(transit_estimate - h0);
    let set_estimate = normalize_radians(transit_estimate + h0);

    let (Some(rise), Some(set)) = (
        search.refine(Event::Rise, rise_estimate),
        search.refine(Event::Set, set_estimate),
    ) else {
        return RiseSetOutcome::NotFound(NotFound::NoConvergence);
    };

    RiseSetOutcome::Found(RiseSetResult {
        rise_time: HoursUt::from_radians(rise.time),
        rise_azimuth: output_azimuth(&rise, latitude, options),
        transit_time: transit_result.time,
        transit_altitude: transit_result.altitude,
        set_time: HoursUt::from_radians(set.time),
        set_azimuth: output_azimuth(&set, latitude, options),
    })
}

/// Rejects rise and set solutions on a neighbouring crossing.
///
/// Close to polar day or night the Newton step can jump to the other root of the same
/// day or to a crossing days away.
fn accept(event: Event, converged: Converged) -> bool {
    // East of the meridian (negative hour angle) the Sun ascends
    let wrong_direction = match event {
        Event::Transit => return true,
        Event::Rise => sin(converged.hour_angle) >= 0.0,
        Event::Set => sin(converged.hour_angle) <= 0.0,
    };
    let (earliest, latest) = EVENT_WINDOW;

    if !(earliest..latest).contains(&converged.time) {
        log::warn!(
            "{event:?} search converged at {:.4} h, outside the day",
            converged.time * 12.0 / PI
        );
        return false;
    }
    if wrong_direction {
        log::warn!(
            "{event:?} search converged on a crossing in the wrong direction at {:.4} h",
            converged.time * 12.0 / PI
        );
        return false;
    }
    true
}

fn output_altitude(altitude: f64, options: &Options) -> f64 {
    if options.use_degrees {
        altitude * R2D
    } else {
        altitude
    }
}

/// Azimuth at a converged rise or set, in the units and convention of `options`.
fn output_azimuth(event: &Converged, latitude: f64, options: &Options) -> f64 {
    let mut azimuth = normalize_radians(atan2(
        sin(event.hour_angle),
        cos(event.hour_angle) * sin(latitude) - tan(event.declination) * cos(latitude),
    ));
    if options.use_north_equals_zero {
        azimuth = normalize_radians(azimuth + PI);
    }
    if options.use_degrees {
        azimuth *= R2D;
    }
    azimuth
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR_TOLERANCE: f64 = 1e-3;
    const ANGLE_TOLERANCE: f64 = 0.01;

    fn degrees() -> Options {
        Options::default()
            .with_degrees(true)
            .with_north_equals_zero(true)
    }

    #[test]
    fn test_arnhem_summer_day() {
        let outcome = rise_transit_set(
            &Instant::new(2045, 7, 16, 6, 2, 49.217348),
            &GeoLocation::from_degrees(5.950270, 51.987380),
            Horizon::SunriseSunset,
            &degrees(),
        );
        let result = outcome.result().unwrap();

        assert!((result.transit_time.hours() - 11.706_554).abs() < HOUR_TOLERANCE);
        assert!((result.transit_altitude - 59.2533).abs() < ANGLE_TOLERANCE);
        assert!((result.rise_time.hours() - 3.598_99).abs() < HOUR_TOLERANCE);
        assert!((result.rise_azimuth - 52.5228).abs() < ANGLE_TOLERANCE);
        assert!((result.set_time.hours() - 19.800_959).abs() < HOUR_TOLERANCE);
        assert!((result.set_azimuth - 307.2609).abs() < ANGLE_TOLERANCE);
    }

    #[test]
    fn test_time_of_day_is_ignored() {
        let location = GeoLocation::from_degrees(5.950270, 51.987380);
        let morning = rise_transit_set(
            &Instant::new(2024, 6, 21, 0, 0, 0.0),
            &location,
            Horizon::SunriseSunset,
            &Options::default(),
        );
        let evening = rise_transit_set(
            &Instant::new(2024, 6, 21, 22, 15, 3.0),
            &location,
            Horizon::SunriseSunset,
            &Options::default(),
        );
        assert_eq!(morning, evening);
    }

    #[test]
    fn test_radians_south_convention() {
        let outcome = rise_transit_set(
            &Instant::new(2045, 7, 16, 0, 0, 0.0),
            &GeoLocation::from_degrees(5.950270, 51.987380),
            Horizon::SunriseSunset,
            &Options::default(),
        );
        let result = outcome.result().unwrap();

        // Rise in the north-east, i.e. between 180° and 270° from the South
        assert!((result.rise_azimuth.to_degrees() - 232.5228).abs() < ANGLE_TOLERANCE);
        assert!((result.set_azimuth.to_degrees() - 127.2609).abs() < ANGLE_TOLERANCE);
        assert!((result.transit_altitude.to_degrees() - 59.2533).abs() < ANGLE_TOLERANCE);
    }

    #[test]
    fn test_twilight_thresholds_widen_the_day() {
        let date = Instant::new(2024, 6, 21, 0, 0, 0.0);
        let location = GeoLocation::from_degrees(5.950270, 51.987380);

        let sunrise = rise_transit_set(&date, &location, Horizon::SunriseSunset, &degrees());
        let civil = rise_transit_set(&date, &location, Horizon::CivilTwilight, &degrees());
        let sunrise = sunrise.result().unwrap();
        let civil = civil.result().unwrap();

        assert!((civil.rise_time.hours() - 2.453_933).abs() < HOUR_TOLERANCE);
        assert!((civil.set_time.hours() - 20.816_304).abs() < HOUR_TOLERANCE);
        assert!(civil.rise_time < sunrise.rise_time);
        assert!(civil.set_time > sunrise.set_time);
        assert!((civil.transit_time.hours() - sunrise.transit_time.hours()).abs() < 1e-9);

        // Astronomical twilight never ends around the summer solstice at 52°N
        let astronomical =
            rise_transit_set(&date, &location, Horizon::AstronomicalTwilight, &degrees());
        assert!(astronomical.is_polar_day());
    }

    #[test]
    fn test_iteration_bound() {
        let settings = SolverSettings {
            tolerance_seconds: 0.1,
            max_iterations: 0,
        };
        let outcome = rise_transit_set_with(
            &Instant::new(2024, 3, 20, 0, 0, 0.0),
            &GeoLocation::from_degrees(0.0, 45.0),
            Horizon::SunriseSunset,
            &Options::default(),
            &settings,
        );
        assert_eq!(outcome, RiseSetOutcome::NotFound(NotFound::NoConvergence));

        // Two or three refinements are enough at moderate latitudes
        let settings = SolverSettings {
            max_iterations: 4,
            ..SolverSettings::default()
        };
        let outcome = rise_transit_set_with(
            &Instant::new(2024, 3, 20, 0, 0, 0.0),
            &GeoLocation::from_degrees(0.0, 45.0),
            Horizon::SunriseSunset,
            &Options::default(),
            &settings,
        );
        assert!(outcome.is_found());
    }

    #[test]
    fn test_accept_checks_direction_and_window() {
        let event = |time: f64, hour_angle: f64| Converged {
            time,
            hour_angle,
            altitude: -0.0145,
            declination: 0.2,
        };

        assert!(accept(Event::Rise, event(1.5, -1.8)));
        assert!(accept(Event::Set, event(4.7, 1.8)));
        assert!(!accept(Event::Rise, event(1.5, 1.8)));
        assert!(!accept(Event::Set, event(4.7, -1.8)));

        // A set 94 hours before midnight is a crossing of another day
        assert!(!accept(Event::Set, event(-94.0 * PI / 12.0, 1.8)));
        assert!(accept(Event::Set, event(-PI, 1.8)));
        assert!(!accept(Event::Rise, event(3.0 * PI, -1.8)));

        // Transit is only checked for convergence
        assert!(accept(Event::Transit, event(-4.0 * PI, 0.0)));
    }

    #[test]
    fn test_non_finite_input_does_not_converge() {
        let outcome = rise_transit_set(
            &Instant::new(2024, 3, 20, 0, 0, 0.0),
            &GeoLocation::new(f64::NAN, 0.5),
            Horizon::SunriseSunset,
            &Options::default(),
        );
        assert_eq!(outcome, RiseSetOutcome::NotFound(NotFound::NoConvergence));
    }
}
