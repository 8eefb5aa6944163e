//! Computes positions for a file of UT instants and writes them as CSV.
//!
//! Usage: `cargo run --example batch_positions [input.csv]`
//!
//! Each input record starts with `year,month,day,hour,minute,second`; further columns are
//! ignored, so the bundled reference file can be used directly. Lines starting with `#` are
//! comments.

use csv::{ReaderBuilder, Writer};
use std::env;
use std::error::Error;
use std::fs::File;
use std::io;
use std::time::Instant as Timer;
use sun_track::{GeoLocation, Instant, Options, compute_position};

fn main() -> Result<(), Box<dyn Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/data/random_dates_reference.csv".to_string());

    let mut reader = ReaderBuilder::new()
        .comment(Some(b'#'))
        .has_headers(false)
        .flexible(true)
        .from_reader(File::open(&path)?);

    let mut instants = Vec::new();
    for record in reader.records() {
        let record = record?;
        instants.push(Instant::new(
            record[0].trim().parse()?,
            record[1].trim().parse()?,
            record[2].trim().parse()?,
            record[3].trim().parse()?,
            record[4].trim().parse()?,
            record[5].trim().parse()?,
        ));
    }

    let location = GeoLocation::from_degrees(5.950270, 51.987380);
    let options = Options::all();

    let timer = Timer::now();
    let positions: Vec<_> = instants
        .iter()
        .map(|instant| compute_position(instant, &location, &options))
        .collect();
    let elapsed = timer.elapsed();

    let mut writer = Writer::from_writer(io::stdout());
    writer.write_record([
        "julian_day",
        "azimuth",
        "altitude_refracted",
        "hour_angle",
        "declination_refracted",
        "distance",
    ])?;
    for position in &positions {
        writer.write_record([
            format!("{:.8}", position.julian_day()),
            format!("{:.6}", position.azimuth()),
            format!("{:.6}", position.altitude_refracted()),
            format!("{:.6}", position.hour_angle_refracted().unwrap_or(f64::NAN)),
            format!("{:.6}", position.declination_refracted().unwrap_or(f64::NAN)),
            format!("{:.9}", position.distance().unwrap_or(f64::NAN)),
        ])?;
    }
    writer.flush()?;

    eprintln!(
        "{} positions from {path} in {:.3} ms ({:.0} ns each)",
        positions.len(),
        elapsed.as_secs_f64() * 1e3,
        elapsed.as_secs_f64() * 1e9 / positions.len().max(1) as f64
    );

    Ok(())
}
