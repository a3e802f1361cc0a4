use seapath::navigation::{Leg, Waypoint};
use seapath::{GeoPoint, great_circle_distance, rhumb_line};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [<lat,lon>]", args[0]);
        std::process::exit(1);
    }

    let nyc = Waypoint::new("NYC", 40.6413, -73.7781);
    let london = Waypoint::new("London", 51.4700, -0.4543);

    // Defaults to a position slightly south of the track
    let position: GeoPoint = match args.get(1) {
        Some(arg) => arg.parse()?,
        None => GeoPoint::new(38.0, -60.0),
    };

    println!("=== Leg {} -> {} ===", nyc.name, london.name);

    let leg = Leg::new(&nyc, &london);
    println!("Desired track: {:.2}", leg.desired_track);
    println!(
        "Great circle: {:.1} ({:.2} km)",
        great_circle_distance(&nyc.location, &london.location),
        leg.total_distance.meters() / 1000.0
    );

    let rhumb = rhumb_line(&nyc.location, &london.location);
    println!("Rhumb line: {:.1} on {:.2}", rhumb.distance, rhumb.bearing);

    println!("\n=== Navigation Status at {position:.4} ===");

    let progress = leg.progress(&position);
    println!(
        "Progress along track: {:.2} km",
        progress.along_track.meters() / 1000.0
    );
    println!(
        "Cross-track deviation: {:.2} km",
        progress.cross_track.meters() / 1000.0
    );

    let xte = progress.cross_track.meters();
    if xte.abs() < 500.0 {
        println!("Status: ON TRACK");
    } else if xte > 0.0 {
        println!("Status: STEER LEFT (right of track)");
    } else {
        println!("Status: STEER RIGHT (left of track)");
    }

    println!("Distance to go: {:.2} km", progress.to_go.meters() / 1000.0);

    Ok(())
}
