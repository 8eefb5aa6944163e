//! Basic solar position calculation example.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use sun_track::{Atmosphere, GeoLocation, Instant, Options, compute_position};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The same moment expressed in local time and in UTC
    let datetime_local = "2045-07-16T08:02:49.217348+02:00".parse::<DateTime<FixedOffset>>()?;
    let datetime_utc = Utc
        .with_ymd_and_hms(2045, 7, 16, 6, 2, 49)
        .single()
        .ok_or("ambiguous date")?
        + chrono::Duration::microseconds(217_348);

    // Arnhem, the Netherlands, on a cool morning
    let location = GeoLocation::try_new(5.950270_f64.to_radians(), 51.987380_f64.to_radians())?
        .with_atmosphere(Atmosphere::new(101.0, 283.0)?);

    let options = Options::all();

    let local = Instant::from_datetime(&datetime_local);
    let utc = Instant::from_datetime(&datetime_utc);
    let position_local = compute_position(&local, &location, &options);
    let position_utc = compute_position(&utc, &location, &options);

    println!("Solar position for Arnhem on July 16, 2045 at 08:02:49 CEST:");
    println!("  Julian Day:          {:.8}", position_local.julian_day());
    println!(
        "  Ecliptic longitude:  {:.6}°",
        position_local.ecliptic_longitude()
    );
    println!("  Right ascension:     {:.6}°", position_local.right_ascension());
    println!("  Declination:         {:.6}°", position_local.declination());
    println!("  Azimuth:             {:.6}°", position_local.azimuth());
    println!("  Altitude:            {:.6}°", position_local.altitude());
    println!(
        "  Refracted altitude:  {:.6}°",
        position_local.altitude_refracted()
    );
    if let (Some(hour_angle), Some(declination)) = (
        position_local.hour_angle_refracted(),
        position_local.declination_refracted(),
    ) {
        println!("  Hour angle:          {hour_angle:.6}°");
        println!("  Refracted decl.:     {declination:.6}°");
    }
    if let Some(distance) = position_local.distance() {
        println!("  Distance:            {distance:.9} AU");
    }

    println!(
        "\nLocal time and UTC give identical results: {}",
        position_local.azimuth() == position_utc.azimuth()
            && position_local.altitude_refracted() == position_utc.altitude_refracted()
    );

    if position_local.is_sun_up() {
        println!("  Sun is above the horizon");
    } else {
        println!("  Sun is below the horizon");
    }

    Ok(())
}
