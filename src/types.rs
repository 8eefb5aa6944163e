//! Core data types for solar tracking calculations.

use crate::error::{check_altitude, check_coordinates, check_pressure, check_temperature};
use crate::math::{PI, degrees_to_radians, floor};
use crate::{Instant, Result};

/// Atmospheric conditions used to scale the refraction correction.
///
/// The refraction term is calibrated for 101.0 kPa and 283.0 K; other conditions scale it
/// linearly with pressure and inversely with temperature.
///
/// # Example
/// ```
/// # use sun_track::Atmosphere;
/// let standard = Atmosphere::standard();
/// assert_eq!(standard.pressure(), 101.0);
/// assert_eq!(standard.temperature(), 283.0);
///
/// let alpine = Atmosphere::new(75.0, 268.0).unwrap();
/// assert!(alpine.refraction_scale() < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atmosphere {
    /// Atmospheric pressure in kPa
    pressure: f64,
    /// Temperature in kelvin
    temperature: f64,
}

impl Atmosphere {
    /// Creates atmospheric conditions with the specified pressure and temperature.
    ///
    /// # Errors
    /// Returns `InvalidPressure` or `InvalidTemperature` for out-of-range values.
    pub fn new(pressure: f64, temperature: f64) -> Result<Self> {
        check_pressure(pressure)?;
        check_temperature(temperature)?;
        Ok(Self {
            pressure,
            temperature,
        })
    }

    /// Conditions the refraction term is calibrated for: 101.0 kPa and 283.0 K.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            pressure: 101.0,
            temperature: 283.0,
        }
    }

    /// Gets the atmospheric pressure in kPa.
    #[must_use]
    pub const fn pressure(&self) -> f64 {
        self.pressure
    }

    /// Gets the temperature in kelvin.
    #[must_use]
    pub const fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Factor applied to the refraction correction; exactly 1.0 for standard conditions.
    #[must_use]
    pub fn refraction_scale(&self) -> f64 {
        self.pressure / 101.0 * 283.0 / self.temperature
    }
}

/// Geographic location of the observer.
///
/// Angles are in radians: longitude positive east, latitude positive north.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Longitude in radians (east positive)
    pub longitude: f64,
    /// Latitude in radians (north positive)
    pub latitude: f64,
    /// Optional atmospheric conditions for refraction scaling
    pub atmosphere: Option<Atmosphere>,
}

impl GeoLocation {
    /// Creates a location from radians without validation.
    #[must_use]
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            atmosphere: None,
        }
    }

    /// Creates a location from radians, rejecting out-of-range coordinates.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range values.
    pub fn try_new(longitude: f64, latitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self::new(longitude, latitude))
    }

    /// Creates a location from degrees without validation.
    ///
    /// # Example
    /// ```
    /// # use sun_track::GeoLocation;
    /// let arnhem = GeoLocation::from_degrees(5.950270, 51.987380);
    /// assert!((arnhem.latitude - 0.907_351).abs() < 1e-6);
    /// ```
    #[must_use]
    pub const fn from_degrees(longitude: f64, latitude: f64) -> Self {
        Self::new(degrees_to_radians(longitude), degrees_to_radians(latitude))
    }

    /// Returns this location with atmospheric conditions attached.
    #[must_use]
    pub const fn with_atmosphere(mut self, atmosphere: Atmosphere) -> Self {
        self.atmosphere = Some(atmosphere);
        self
    }
}

/// Output options for a position calculation.
///
/// The defaults (all off) give the astronomical conventions: radians and azimuth measured
/// from the South.
///
/// # Example
/// ```
/// # use sun_track::Options;
/// let options = Options::default()
///     .with_degrees(true)
///     .with_north_equals_zero(true);
/// assert!(options.use_degrees);
/// assert!(!options.compute_distance);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// Report final angles in degrees instead of radians.
    pub use_degrees: bool,
    /// Measure azimuth and hour angle from the North (compass convention) instead of the South.
    pub use_north_equals_zero: bool,
    /// Convert the refraction-corrected horizontal position back to hour angle and declination.
    pub compute_refraction_equatorial: bool,
    /// Compute the true Earth-Sun distance instead of using the mean distance.
    pub compute_distance: bool,
}

impl Options {
    /// Sets whether final angles are reported in degrees.
    #[must_use]
    pub const fn with_degrees(mut self, use_degrees: bool) -> Self {
        self.use_degrees = use_degrees;
        self
    }

    /// Sets whether azimuth and hour angle use North = 0.
    #[must_use]
    pub const fn with_north_equals_zero(mut self, use_north_equals_zero: bool) -> Self {
        self.use_north_equals_zero = use_north_equals_zero;
        self
    }

    /// Sets whether refraction-corrected equatorial coordinates are computed.
    #[must_use]
    pub const fn with_refraction_equatorial(mut self, compute: bool) -> Self {
        self.compute_refraction_equatorial = compute;
        self
    }

    /// Sets whether the Earth-Sun distance is computed.
    #[must_use]
    pub const fn with_distance(mut self, compute: bool) -> Self {
        self.compute_distance = compute;
        self
    }

    /// Everything on: degrees, North = 0, equatorial output and distance.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            use_degrees: true,
            use_north_equals_zero: true,
            compute_refraction_equatorial: true,
            compute_distance: true,
        }
    }
}

/// Position of the Sun together with the intermediate quantities of the calculation.
///
/// Filled stage by stage during a single call. Final outputs (azimuth, altitudes, hour
/// angle, declinations, longitude, right ascension) follow the units and azimuth convention
/// of the [`Options`] used; obliquity, nutation and sidereal time are always radians.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SolarPosition {
    pub(crate) julian_day: f64,
    pub(crate) days_since_j2000: f64,
    pub(crate) julian_century: f64,
    pub(crate) julian_century_squared: f64,
    pub(crate) julian_century_cubed: f64,

    pub(crate) ecliptic_longitude: f64,
    pub(crate) distance: f64,
    pub(crate) obliquity: f64,
    pub(crate) nutation_in_longitude: f64,

    pub(crate) right_ascension: f64,
    pub(crate) declination: f64,
    pub(crate) apparent_sidereal_time: f64,

    pub(crate) altitude: f64,
    pub(crate) azimuth_refracted: f64,
    pub(crate) altitude_refracted: f64,

    pub(crate) hour_angle_refracted: f64,
    pub(crate) declination_refracted: f64,

    pub(crate) has_distance: bool,
    pub(crate) has_refraction_equatorial: bool,
}

impl SolarPosition {
    /// Julian Day (UT).
    #[must_use]
    pub const fn julian_day(&self) -> f64 {
        self.julian_day
    }

    /// Days since J2000.0.
    #[must_use]
    pub const fn days_since_j2000(&self) -> f64 {
        self.days_since_j2000
    }

    /// Julian centuries since J2000.0 (T).
    #[must_use]
    pub const fn julian_century(&self) -> f64 {
        self.julian_century
    }

    /// T².
    #[must_use]
    pub const fn julian_century_squared(&self) -> f64 {
        self.julian_century_squared
    }

    /// T³.
    #[must_use]
    pub const fn julian_century_cubed(&self) -> f64 {
        self.julian_century_cubed
    }

    /// Apparent geocentric ecliptic longitude, referred to the true equinox of date.
    #[must_use]
    pub const fn ecliptic_longitude(&self) -> f64 {
        self.ecliptic_longitude
    }

    /// Earth-Sun distance in AU, if it was requested.
    #[must_use]
    pub const fn distance(&self) -> Option<f64> {
        if self.has_distance {
            Some(self.distance)
        } else {
            None
        }
    }

    /// True obliquity of the ecliptic (radians).
    #[must_use]
    pub const fn obliquity(&self) -> f64 {
        self.obliquity
    }

    /// Nutation in longitude (radians).
    #[must_use]
    pub const fn nutation_in_longitude(&self) -> f64 {
        self.nutation_in_longitude
    }

    /// Geocentric right ascension, in (-π, π] (or (-180°, 180°]).
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Geocentric declination.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Apparent Greenwich sidereal time (radians, not reduced to [0, 2π)).
    #[must_use]
    pub const fn apparent_sidereal_time(&self) -> f64 {
        self.apparent_sidereal_time
    }

    /// Altitude corrected for parallax but not for refraction.
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Azimuth in [0, 2π) (or [0°, 360°)), South = 0 unless North = 0 was requested.
    ///
    /// Parallax and refraction do not change the azimuth, so this is also the
    /// geometric azimuth.
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth_refracted
    }

    /// Altitude corrected for parallax and atmospheric refraction.
    #[must_use]
    pub const fn altitude_refracted(&self) -> f64 {
        self.altitude_refracted
    }

    /// Hour angle recovered from the refraction-corrected position, if it was requested.
    #[must_use]
    pub const fn hour_angle_refracted(&self) -> Option<f64> {
        if self.has_refraction_equatorial {
            Some(self.hour_angle_refracted)
        } else {
            None
        }
    }

    /// Declination recovered from the refraction-corrected position, if it was requested.
    #[must_use]
    pub const fn declination_refracted(&self) -> Option<f64> {
        if self.has_refraction_equatorial {
            Some(self.declination_refracted)
        } else {
            None
        }
    }

    /// Checks if the Sun's refraction-corrected centre is above the horizon.
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.altitude_refracted > 0.0
    }
}

/// Predefined altitude thresholds for rise/set calculations.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Horizon {
    /// Standard sunrise/sunset: upper limb on the horizon, including refraction (-0.8333°)
    #[default]
    SunriseSunset,
    /// Civil twilight (sun is 6° below horizon)
    CivilTwilight,
    /// Nautical twilight (sun is 12° below horizon)
    NauticalTwilight,
    /// Astronomical twilight (sun is 18° below horizon)
    AstronomicalTwilight,
    /// Custom altitude in radians, e.g. a tracker's mechanical horizon
    Custom(f64),
}

impl Horizon {
    /// Gets the altitude threshold in radians.
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        match self {
            Self::SunriseSunset => degrees_to_radians(-0.8333),
            Self::CivilTwilight => degrees_to_radians(-6.0),
            Self::NauticalTwilight => degrees_to_radians(-12.0),
            Self::AstronomicalTwilight => degrees_to_radians(-18.0),
            Self::Custom(altitude) => *altitude,
        }
    }

    /// Creates a custom horizon at the given altitude in radians.
    ///
    /// # Errors
    /// Returns `InvalidAltitude` if the altitude is outside -π/2 to +π/2.
    pub fn custom(altitude: f64) -> Result<Self> {
        check_altitude(altitude)?;
        Ok(Self::Custom(altitude))
    }

    /// Creates a custom horizon at the given altitude in degrees.
    ///
    /// # Errors
    /// Returns `InvalidAltitude` if the altitude is outside -90° to +90°.
    pub fn custom_degrees(altitude: f64) -> Result<Self> {
        Self::custom(degrees_to_radians(altitude))
    }
}

/// Hours since 0h UT of the calculation date, possibly outside a single day.
///
/// - Negative values indicate the previous day
/// - 0.0 to < 24.0 indicates the current day
/// - ≥ 24.0 indicates the next day
///
/// # Example
/// ```
/// # use sun_track::HoursUt;
/// let time = HoursUt::from_hours(25.5);
/// let (day_offset, hours) = time.day_and_hours();
/// assert_eq!(day_offset, 1);
/// assert!((hours - 1.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct HoursUt(f64);

impl HoursUt {
    /// Creates a new `HoursUt` from hours since midnight UT.
    #[must_use]
    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Creates a new `HoursUt` from an angle of Earth rotation (2π = 24 h).
    #[must_use]
    pub fn from_radians(angle: f64) -> Self {
        Self(angle * 12.0 / PI)
    }

    /// Gets the raw hours value.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Gets the day offset and normalized hours (0.0 to < 24.0).
    #[must_use]
    pub fn day_and_hours(&self) -> (i32, f64) {
        let hours = self.0;
        if !hours.is_finite() {
            return (0, hours);
        }

        let mut day_offset_raw = floor(hours / 24.0);
        let mut normalized_hours = hours - day_offset_raw * 24.0;

        if normalized_hours < 0.0 {
            normalized_hours += 24.0;
            day_offset_raw -= 1.0;
        } else if normalized_hours >= 24.0 {
            normalized_hours -= 24.0;
            day_offset_raw += 1.0;
        }

        let day_offset = if day_offset_raw >= f64::from(i32::MAX) {
            i32::MAX
        } else if day_offset_raw <= f64::from(i32::MIN) {
            i32::MIN
        } else {
            day_offset_raw as i32
        };

        (day_offset, normalized_hours)
    }

    /// Converts to an instant relative to the given calendar date.
    ///
    /// Hour, minute and second are filled in from the hours value; a time before
    /// midnight or after the end of the day is expressed through out-of-range hour
    /// values, which [`crate::time::julian_day`] handles arithmetically.
    #[must_use]
    pub fn to_instant(&self, date: &Instant) -> Instant {
        let whole_hours = floor(self.0);
        let seconds = (self.0 - whole_hours) * 3600.0;
        let minutes = floor(seconds / 60.0);
        Instant::new(
            date.year,
            date.month,
            date.day,
            whole_hours as i32,
            minutes as i32,
            seconds - minutes * 60.0,
        )
    }

    /// Converts to a UTC `DateTime` relative to the given calendar date.
    ///
    /// Returns `None` if the date is not a valid calendar date.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn to_datetime(&self, date: &Instant) -> Option<chrono::DateTime<chrono::Utc>> {
        use chrono::TimeZone;

        let month = u32::try_from(date.month).ok()?;
        let day = u32::try_from(date.day).ok()?;
        let midnight = chrono::Utc
            .with_ymd_and_hms(date.year, month, day, 0, 0, 0)
            .single()?;
        let nanos = (self.0 * 3_600_000_000_000.0) as i64;
        Some(midnight + chrono::Duration::nanoseconds(nanos))
    }
}

/// Transit (meridian crossing) of the Sun.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transit {
    /// Time of transit
    pub time: HoursUt,
    /// Geometric altitude at transit (not corrected for parallax or refraction)
    pub altitude: f64,
}

/// Rise, transit and set data for one day.
///
/// Azimuths and altitude follow the units and azimuth convention of the [`Options`] used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSetResult {
    /// Time the Sun crosses the threshold ascending
    pub rise_time: HoursUt,
    /// Azimuth at rise
    pub rise_azimuth: f64,
    /// Time of transit
    pub transit_time: HoursUt,
    /// Altitude at transit
    pub transit_altitude: f64,
    /// Time the Sun crosses the threshold descending
    pub set_time: HoursUt,
    /// Azimuth at set
    pub set_azimuth: f64,
}

impl RiseSetResult {
    /// Gets the transit as a [`Transit`].
    #[must_use]
    pub const fn transit(&self) -> Transit {
        Transit {
            time: self.transit_time,
            altitude: self.transit_altitude,
        }
    }
}

/// Reason no rise or set was found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotFound {
    /// The Sun stays above the threshold all day (polar day)
    AlwaysAbove {
        /// Transit, the highest point of the day
        transit: Transit,
    },
    /// The Sun stays below the threshold all day (polar night)
    AlwaysBelow {
        /// Transit, the highest point of the day, still below the threshold
        transit: Transit,
    },
    /// The iteration did not converge within the configured bound
    NoConvergence,
}

impl NotFound {
    /// Gets the transit, if one was found.
    #[must_use]
    pub const fn transit(&self) -> Option<Transit> {
        match self {
            Self::AlwaysAbove { transit } | Self::AlwaysBelow { transit } => Some(*transit),
            Self::NoConvergence => None,
        }
    }
}

/// Outcome of a rise/transit/set search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetOutcome {
    /// Rise, transit and set were all found
    Found(RiseSetResult),
    /// No threshold crossing exists, or the search did not converge
    NotFound(NotFound),
}

impl RiseSetOutcome {
    /// Checks if rise and set were found.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Gets the rise/set data if found.
    #[must_use]
    pub const fn result(&self) -> Option<&RiseSetResult> {
        if let Self::Found(result) = self {
            Some(result)
        } else {
            None
        }
    }

    /// Gets the transit for any outcome that has one.
    #[must_use]
    pub const fn transit(&self) -> Option<Transit> {
        match self {
            Self::Found(result) => Some(result.transit()),
            Self::NotFound(reason) => reason.transit(),
        }
    }

    /// Checks if this represents a polar night (the Sun never reaches the threshold).
    #[must_use]
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::NotFound(NotFound::AlwaysBelow { .. }))
    }

    /// Checks if this represents a polar day (the Sun never drops to the threshold).
    #[must_use]
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::NotFound(NotFound::AlwaysAbove { .. }))
    }
}

/// Settings for the iterative rise/transit/set search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverSettings {
    /// Convergence tolerance in seconds of time
    pub tolerance_seconds: f64,
    /// Hard cap on iterations per event
    pub max_iterations: u32,
}

impl SolverSettings {
    /// Tolerance expressed as an angle of Earth rotation (2π per day).
    #[must_use]
    pub fn tolerance_radians(&self) -> f64 {
        self.tolerance_seconds * 2.0 * PI / 86_400.0
    }
}

impl Default for SolverSettings {
    /// 1e-5 rad of Earth rotation (about 0.14 s) and 30 iterations.
    fn default() -> Self {
        Self {
            tolerance_seconds: 1e-5 * 86_400.0 / (2.0 * PI),
            max_iterations: 30,
        }
    }
}
