//! Great circle calculations on a spherical Earth
//!
//! The sphere radius is the mean radius of a reference ellipsoid (WGS84
//! unless stated otherwise). This is a spherical approximation; the error
//! against an ellipsoidal geodesic is up to roughly 0.5%.
//!
//! See [Wikipedia](https://en.wikipedia.org/wiki/Haversine_formula) for the
//! Haversine formula.

use crate::ellipsoid::{Ellipsoid, WGS84};
use crate::types::{Angle, Distance, GeoPoint, NM_TO_METERS};
use log::{debug, trace};

/// Great circle distance between two points on the WGS84 mean sphere
pub fn great_circle_distance(p1: &GeoPoint, p2: &GeoPoint) -> Distance {
    great_circle_distance_on(&WGS84, p1, p2)
}

/// Great circle distance between two points on the mean sphere of `ellipsoid`
///
/// The formula is symmetric, so swapping `p1` and `p2` yields a bit-identical
/// result. Inputs are used as given, without normalization.
pub fn great_circle_distance_on(ellipsoid: &Ellipsoid, p1: &GeoPoint, p2: &GeoPoint) -> Distance {
    let central_angle = central_angle(p1, p2);
    let meters = ellipsoid.mean_radius() * central_angle;
    trace!("central angle {central_angle} rad, {meters} m");

    Distance::from_nautical_miles(meters / NM_TO_METERS)
}

/// Initial great circle bearing from `p1` towards `p2`
///
/// **Not yet implemented.** This always returns 0° as a placeholder; the
/// result must not be interpreted as a real bearing. For a usable course
/// between two points see [`rhumb_line_bearing`](crate::rhumb_line_bearing).
pub fn great_circle_initial_bearing(_p1: &GeoPoint, _p2: &GeoPoint) -> Angle {
    Angle::from_degrees(0.0)
}

/// Angular separation of two points in radians (Haversine)
fn central_angle(p1: &GeoPoint, p2: &GeoPoint) -> f64 {
    let lat1 = p1.latitude().radians();
    let lat2 = p2.latitude().radians();
    let d_lat = lat2 - lat1;
    let d_lon = p2.longitude().radians() - p1.longitude().radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    // Round-off can push `a` just outside [0, 1], which would turn a sqrt into NaN
    let clamped = a.clamp(0.0, 1.0);
    if clamped != a {
        debug!("clamping haversine term {a} into [0, 1]");
    }

    2.0 * clamped.sqrt().atan2((1.0 - clamped).sqrt())
}
