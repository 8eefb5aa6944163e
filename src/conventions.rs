//! Output conventions: azimuth origin and angular units.
//!
//! Both are applied as terminal steps on a filled [`SolarPosition`]; every earlier stage
//! works in radians with South = 0.

use crate::math::{PI, R2D, normalize_radians};
use crate::types::SolarPosition;

/// Moves the azimuth origin from the South to the North.
///
/// The refracted hour angle is shifted too when equatorial output was computed.
pub fn use_north_equals_zero(position: &mut SolarPosition, equatorial: bool) {
    position.azimuth_refracted = normalize_radians(position.azimuth_refracted + PI);
    if equatorial {
        position.hour_angle_refracted = normalize_radians(position.hour_angle_refracted + PI);
    }
}

/// Converts every final angular output from radians to degrees.
///
/// Obliquity, nutation and sidereal time are series intermediates and stay in radians.
pub fn convert_radians_to_degrees(position: &mut SolarPosition, equatorial: bool) {
    position.ecliptic_longitude *= R2D;
    position.right_ascension *= R2D;
    position.declination *= R2D;

    position.altitude *= R2D;
    position.azimuth_refracted *= R2D;
    position.altitude_refracted *= R2D;

    if equatorial {
        position.hour_angle_refracted *= R2D;
        position.declination_refracted *= R2D;
    }
}
