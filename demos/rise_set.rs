//! Rise, transit and set times for a few locations, including the polar regions.

use sun_track::{
    GeoLocation, Horizon, HoursUt, Instant, NotFound, Options, RiseSetOutcome, rise_transit_set,
};

fn format_hours(hours: f64) -> String {
    let (day_offset, hours) = HoursUt::from_hours(hours).day_and_hours();
    let total_seconds = (hours * 3600.0).round() as i64;
    let suffix = match day_offset {
        0 => String::new(),
        offset => format!(" ({offset:+} d)"),
    };
    format!(
        "{:02}:{:02}:{:02} UT{suffix}",
        total_seconds / 3600,
        (total_seconds / 60) % 60,
        total_seconds % 60
    )
}

fn main() {
    let options = Options::default()
        .with_degrees(true)
        .with_north_equals_zero(true);

    let locations = [
        ("Arnhem", GeoLocation::from_degrees(5.950270, 51.987380)),
        ("Quito", GeoLocation::from_degrees(-78.4678, -0.1807)),
        ("Ny-Ålesund", GeoLocation::from_degrees(11.9222, 78.9250)),
    ];
    let dates = [
        Instant::new(2024, 3, 20, 0, 0, 0.0),
        Instant::new(2024, 6, 21, 0, 0, 0.0),
        Instant::new(2024, 12, 21, 0, 0, 0.0),
    ];

    for (name, location) in &locations {
        println!("{name}:");
        for date in &dates {
            print!("  {}-{:02}-{:02}  ", date.year, date.month, date.day);
            match rise_transit_set(date, location, Horizon::SunriseSunset, &options) {
                RiseSetOutcome::Found(result) => println!(
                    "rise {} (az {:.2}°), transit {} (alt {:.2}°), set {} (az {:.2}°)",
                    format_hours(result.rise_time.hours()),
                    result.rise_azimuth,
                    format_hours(result.transit_time.hours()),
                    result.transit_altitude,
                    format_hours(result.set_time.hours()),
                    result.set_azimuth,
                ),
                RiseSetOutcome::NotFound(NotFound::AlwaysAbove { transit }) => println!(
                    "midnight sun, transit {} (alt {:.2}°)",
                    format_hours(transit.time.hours()),
                    transit.altitude
                ),
                RiseSetOutcome::NotFound(NotFound::AlwaysBelow { transit }) => println!(
                    "polar night, transit {} (alt {:.2}°)",
                    format_hours(transit.time.hours()),
                    transit.altitude
                ),
                RiseSetOutcome::NotFound(NotFound::NoConvergence) => {
                    println!("no convergence");
                }
            }
        }
    }

    // Civil twilight for a tracker that parks at dusk
    let arnhem = locations[0].1;
    let twilight = rise_transit_set(&dates[1], &arnhem, Horizon::CivilTwilight, &options);
    if let Some(result) = twilight.result() {
        println!(
            "\nArnhem civil twilight on 2024-06-21: dawn {}, dusk {}",
            format_hours(result.rise_time.hours()),
            format_hours(result.set_time.hours())
        );
    }
}
