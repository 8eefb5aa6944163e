//! Mathematical utilities for solar position calculations.
//!
//! Thin wrappers select native float methods with `std` and `libm` otherwise, so the
//! same pipeline code builds for desktop and bare-metal tracker controllers.

/// Mathematical constants
pub const PI: f64 = core::f64::consts::PI;

/// 2π
pub const TWO_PI: f64 = core::f64::consts::TAU;

/// Radians to degrees conversion factor.
pub const R2D: f64 = 180.0 / PI;

/// Converts degrees to radians.
#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Reduces an angle of any sign and magnitude into [0, 2π).
///
/// Uses a floored modulo, so negative inputs do not depend on the sign convention of `%`.
#[inline]
pub fn normalize_radians(angle: f64) -> f64 {
    let reduced = angle - TWO_PI * floor(angle / TWO_PI);
    // floor() rounding can land exactly on 2π for tiny negative inputs
    if reduced >= TWO_PI { 0.0 } else { reduced }
}

/// Folds an angle in radians into [-π, π).
#[inline]
pub fn fold_pi(angle: f64) -> f64 {
    normalize_radians(angle + PI) - PI
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes tan(x) using the appropriate function for the compilation target.
#[inline]
pub fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x);
}

/// Computes asin(x) using the appropriate function for the compilation target.
#[inline]
pub fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes acos(x) using the appropriate function for the compilation target.
#[inline]
pub fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

/// Computes atan2(y, x) using the appropriate function for the compilation target.
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    return y.atan2(x);

    #[cfg(not(feature = "std"))]
    return libm::atan2(y, x);
}

/// Computes sqrt(x) using the appropriate function for the compilation target.
#[inline]
pub fn sqrt(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sqrt();

    #[cfg(not(feature = "std"))]
    return libm::sqrt(x);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_degree_radian_conversion() {
        assert!((degrees_to_radians(180.0) - PI).abs() < EPSILON);
        assert!((degrees_to_radians(90.0) - PI / 2.0).abs() < EPSILON);
        assert!((PI * R2D - 180.0).abs() < EPSILON);
    }

    #[test]
    fn test_normalize_radians() {
        assert_eq!(normalize_radians(0.0), 0.0);
        assert!((normalize_radians(TWO_PI + 1.0) - 1.0).abs() < EPSILON);
        assert!((normalize_radians(-1.0) - (TWO_PI - 1.0)).abs() < EPSILON);
        assert!((normalize_radians(-7.0 * TWO_PI - 0.5) - (TWO_PI - 0.5)).abs() < 1e-10);
        assert!(normalize_radians(TWO_PI) < TWO_PI);
        assert!(normalize_radians(-1e-18) < TWO_PI);
        assert!(normalize_radians(-1e-18) >= 0.0);
    }

    #[test]
    fn test_normalize_radians_large_arguments() {
        // Sidereal time grows by ~6.3 rad per day; a century is ~2.3e5 rad
        let angle = 230_125.375;
        let reduced = normalize_radians(angle);
        assert!((0.0..TWO_PI).contains(&reduced));
        assert!((sin(reduced) - sin(angle)).abs() < 1e-9);
        assert!((cos(reduced) - cos(angle)).abs() < 1e-9);
    }

    #[test]
    fn test_fold_pi() {
        assert!((fold_pi(PI / 2.0) - PI / 2.0).abs() < EPSILON);
        assert!((fold_pi(3.0 * PI / 2.0) + PI / 2.0).abs() < EPSILON);
        assert!((fold_pi(-3.0 * PI / 2.0) - PI / 2.0).abs() < EPSILON);
        assert!(fold_pi(PI) >= -PI && fold_pi(PI) < PI);
    }

    #[test]
    fn test_trigonometric_functions() {
        assert!((sin(0.0)).abs() < EPSILON);
        assert!((cos(0.0) - 1.0).abs() < EPSILON);
        assert!((tan(0.0)).abs() < EPSILON);
        assert!((acos(1.0)).abs() < EPSILON);
        assert!((atan2(1.0, 1.0) - PI / 4.0).abs() < EPSILON);
        assert!((sqrt(4.0) - 2.0).abs() < EPSILON);
        assert_eq!(floor(-0.5), -1.0);
    }
}
