#![cfg(feature = "serde")]

use insta::assert_snapshot;
use seapath::navigation::{Route, Waypoint};

#[test]
fn route_round_trip() {
    let mut route = Route::new("Solent");
    route.add_waypoint(Waypoint::new("Needles", 50.663, -1.588));
    route.add_waypoint(Waypoint::new("Cowes", 50.766, -1.298));

    let json = serde_json::to_string(&route).unwrap();
    assert_snapshot!(json, @r#"{"name":"Solent","waypoints":[{"name":"Needles","location":{"latitude":50.663,"longitude":-1.588}},{"name":"Cowes","location":{"latitude":50.766,"longitude":-1.298}}]}"#);

    let parsed: Route = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, route);
    assert_eq!(parsed.total_distance(), route.total_distance());
}

#[test]
fn derived_units_are_rebuilt_on_load() {
    let json = r#"{"name":"Origin","location":{"latitude":90.0,"longitude":-180.0}}"#;
    let waypoint: Waypoint = serde_json::from_str(json).unwrap();

    assert!((waypoint.location.latitude().radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    assert!((waypoint.location.longitude().radians() + std::f64::consts::PI).abs() < 1e-12);
}
