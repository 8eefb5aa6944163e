//! Time conversion: UT calendar instants to Julian Day and the derived time arguments
//! used by the solar series.

#![allow(clippy::unreadable_literal)]

use crate::math::floor;
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{Datelike, TimeZone, Timelike};

/// Seconds per day (86,400)
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UT)
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// A date and time in UT, proleptic Gregorian calendar.
///
/// Fields are stored as given. [`Instant::new`] does not validate anything: out-of-range
/// values (month 13, second 75.0, ...) flow arithmetically into the Julian Day and give a
/// well-defined but astronomically meaningless result. Use [`Instant::try_new`] to reject
/// such input instead.
///
/// # Example
/// ```
/// # use sun_track::Instant;
/// let instant = Instant::new(2000, 1, 1, 12, 0, 0.0);
/// assert_eq!(instant.julian_day(), 2_451_545.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instant {
    /// Calendar year
    pub year: i32,
    /// Month (1-12)
    pub month: i32,
    /// Day of month (1-31)
    pub day: i32,
    /// Hour (0-23)
    pub hour: i32,
    /// Minute (0-59)
    pub minute: i32,
    /// Second, including fractional part (0 <= s < 60)
    pub second: f64,
}

impl Instant {
    /// Creates an instant without validating its fields.
    #[must_use]
    pub const fn new(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Creates an instant, rejecting fields outside the Gregorian calendar or a normal day.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if any component is out of range (month 1-12, day valid for
    /// the month, hour 0-23, minute 0-59, second in [0, 60)) or if the date precedes the
    /// Gregorian calendar reform (1582-10-15).
    ///
    /// # Example
    /// ```
    /// # use sun_track::Instant;
    /// assert!(Instant::try_new(2024, 2, 29, 12, 0, 0.0).is_ok());
    /// assert!(Instant::try_new(2023, 2, 29, 12, 0, 0.0).is_err());
    /// ```
    pub fn try_new(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: f64,
    ) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_datetime("month must be between 1 and 12"));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(Error::invalid_datetime("day is out of range for month"));
        }
        if !(0..=23).contains(&hour) {
            return Err(Error::invalid_datetime("hour must be between 0 and 23"));
        }
        if !(0..=59).contains(&minute) {
            return Err(Error::invalid_datetime("minute must be between 0 and 59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(Error::invalid_datetime(
                "second must be between 0 and 59.999...",
            ));
        }
        if !is_gregorian_date(year, month, day) {
            return Err(Error::invalid_datetime(
                "dates before 1582-10-15 are not in the Gregorian calendar",
            ));
        }

        Ok(Self::new(year, month, day, hour, minute, second))
    }

    /// Creates an instant from a timezone-aware chrono `DateTime`, converted to UTC.
    ///
    /// UTC is used as a stand-in for UT; the sub-second difference is below the accuracy of
    /// the solar series.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &chrono::DateTime<Tz>) -> Self {
        let utc = datetime.with_timezone(&chrono::Utc);
        // chrono components are bounded (month <= 12, hour <= 23, ...) so these never saturate
        let component = |value: u32| i32::try_from(value).unwrap_or(i32::MAX);
        Self::new(
            utc.year(),
            component(utc.month()),
            component(utc.day()),
            component(utc.hour()),
            component(utc.minute()),
            f64::from(utc.second()) + f64::from(utc.nanosecond()) / 1e9,
        )
    }

    /// Returns the same calendar date at 0h UT.
    #[must_use]
    pub const fn midnight(&self) -> Self {
        Self::new(self.year, self.month, self.day, 0, 0, 0.0)
    }

    /// Computes the Julian Day for this instant.
    #[must_use]
    pub fn julian_day(&self) -> f64 {
        julian_day(self)
    }
}

/// Computes the Julian Day of a UT instant as a continuous value.
///
/// Gregorian calendar only (valid from ~1582 onwards). January and February are
/// treated as months 13 and 14 of the previous year (Meeus, "Astronomical
/// Algorithms", ch. 7). No validation is done.
///
/// # Example
/// ```
/// # use sun_track::{time::julian_day, Instant};
/// let jd = julian_day(&Instant::new(1970, 1, 1, 0, 0, 0.0));
/// assert_eq!(jd, 2_440_587.5);
/// ```
#[must_use]
pub fn julian_day(instant: &Instant) -> f64 {
    let mut year = instant.year;
    let mut month = instant.month;
    if month <= 2 {
        year -= 1;
        month += 12;
    }

    let a = floor(f64::from(year) / 100.0);
    let b = 2.0 - a + floor(a / 4.0);

    let day = f64::from(instant.day)
        + f64::from(instant.hour) / 24.0
        + f64::from(instant.minute) / 1440.0
        + instant.second / SECONDS_PER_DAY;

    floor(365.25 * f64::from(year + 4716)) + floor(30.6001 * f64::from(month + 1)) + day + b
        - 1524.5
}

/// Time arguments derived from the Julian Day, shared by every series in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeArguments {
    /// Julian Day (UT)
    pub julian_day: f64,
    /// Days since J2000.0
    pub days_since_j2000: f64,
    /// Julian centuries since J2000.0 (T)
    pub t: f64,
    /// T²
    pub t2: f64,
    /// T³
    pub t3: f64,
}

impl TimeArguments {
    /// Derives the time arguments for a Julian Day.
    #[must_use]
    pub fn from_julian_day(julian_day: f64) -> Self {
        let days_since_j2000 = julian_day - J2000_JD;
        let t = days_since_j2000 / DAYS_PER_CENTURY;
        let t2 = t * t;
        let t3 = t2 * t;
        Self {
            julian_day,
            days_since_j2000,
            t,
            t2,
            t3,
        }
    }

    /// Derives the time arguments for a UT instant.
    #[must_use]
    pub fn from_instant(instant: &Instant) -> Self {
        Self::from_julian_day(julian_day(instant))
    }
}

const fn is_gregorian_date(year: i32, month: i32, day: i32) -> bool {
    year > 1582 || (year == 1582 && (month > 10 || (month == 10 && day >= 15)))
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}
