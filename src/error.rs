//! Error types for the solar tracking library.
//!
//! The position pipeline itself never fails. These errors are produced only by the
//! validating constructors (`Instant::try_new`, `GeoLocation::try_new`, `Atmosphere::new`,
//! `Horizon::custom`) for callers that want to reject bad input up front.

use crate::math::PI;
use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur when constructing validated inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -π/2 and +π/2 radians).
    InvalidLatitude {
        /// The invalid latitude value provided, in radians.
        value: f64,
    },
    /// Invalid longitude value (must be between -π and +π radians).
    InvalidLongitude {
        /// The invalid longitude value provided, in radians.
        value: f64,
    },
    /// Invalid altitude threshold for rise/set calculations.
    InvalidAltitude {
        /// The invalid altitude value provided, in radians.
        value: f64,
    },
    /// Invalid pressure value for atmospheric refraction scaling.
    InvalidPressure {
        /// The invalid pressure value provided, in kPa.
        value: f64,
    },
    /// Invalid temperature value for atmospheric refraction scaling.
    InvalidTemperature {
        /// The invalid temperature value provided, in kelvin.
        value: f64,
    },
    /// Invalid calendar date or time of day.
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(f, "invalid latitude {value} rad (must be between -π/2 and +π/2)")
            }
            Self::InvalidLongitude { value } => {
                write!(f, "invalid longitude {value} rad (must be between -π and +π)")
            }
            Self::InvalidAltitude { value } => {
                write!(f, "invalid altitude {value} rad (must be between -π/2 and +π/2)")
            }
            Self::InvalidPressure { value } => {
                write!(f, "invalid pressure {value} kPa (must be in (0, 200])")
            }
            Self::InvalidTemperature { value } => {
                write!(f, "invalid temperature {value} K (must be in (0, 373.15])")
            }
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date/time: {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid altitude error.
    #[must_use]
    pub const fn invalid_altitude(value: f64) -> Self {
        Self::InvalidAltitude { value }
    }

    /// Creates an invalid pressure error.
    #[must_use]
    pub const fn invalid_pressure(value: f64) -> Self {
        Self::InvalidPressure { value }
    }

    /// Creates an invalid temperature error.
    #[must_use]
    pub const fn invalid_temperature(value: f64) -> Self {
        Self::InvalidTemperature { value }
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }
}

/// Validates latitude is within [-π/2, +π/2] radians.
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside the range or not finite.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-PI / 2.0..=PI / 2.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within [-π, +π] radians.
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside the range or not finite.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-PI..=PI).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates an altitude threshold is within [-π/2, +π/2] radians.
///
/// # Errors
/// Returns `InvalidAltitude` if the altitude is outside the range or not finite.
pub fn check_altitude(altitude: f64) -> Result<()> {
    if !(-PI / 2.0..=PI / 2.0).contains(&altitude) {
        return Err(Error::invalid_altitude(altitude));
    }
    Ok(())
}

/// Validates pressure is positive and reasonable for refraction scaling.
///
/// # Errors
/// Returns `InvalidPressure` if pressure is not in (0, 200] kPa.
pub fn check_pressure(pressure: f64) -> Result<()> {
    if !pressure.is_finite() || pressure <= 0.0 || pressure > 200.0 {
        return Err(Error::invalid_pressure(pressure));
    }
    Ok(())
}

/// Validates temperature is above absolute zero and reasonable for refraction scaling.
///
/// # Errors
/// Returns `InvalidTemperature` if temperature is not in (0, 373.15] K.
pub fn check_temperature(temperature: f64) -> Result<()> {
    if !temperature.is_finite() || temperature <= 0.0 || temperature > 373.15 {
        return Err(Error::invalid_temperature(temperature));
    }
    Ok(())
}
