//! Rhumb line (loxodrome) navigation, a.k.a. Mercator sailing
//!
//! A rhumb line crosses every meridian at the same angle, so it plots as a
//! straight line on a Mercator chart. It is longer than the great circle
//! between the same points but can be steered on a constant course.

use crate::ellipsoid::WGS84;
use crate::types::{Angle, Distance, GeoPoint};
use log::trace;
use std::f64::consts::{FRAC_PI_4, PI, TAU};

/// Latitude differences below this (radians) count as an east-west course
const EAST_WEST_EPSILON: f64 = 1e-9;

/// Course and length of a rhumb line between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RhumbLine {
    pub distance: Distance,
    /// True course in `[0°, 360°)`
    pub bearing: Angle,
}

/// Constant course from `start` towards `end`
///
/// Uses the clamped meridional parts from [`GeoPoint::mercator_latitude`] and
/// always takes the short way around in longitude. The result is in
/// `[0°, 360°)`.
pub fn rhumb_line_bearing(start: &GeoPoint, end: &GeoPoint) -> Angle {
    let d_lon = short_way(end.longitude().radians() - start.longitude().radians());
    let d_m = end.mercator_latitude() - start.mercator_latitude();

    normalized_bearing(d_lon.atan2(d_m))
}

/// Rhumb line course and distance as defined in Bowditch
///
/// The distance is measured on a sphere with the WGS84 equatorial radius.
pub fn rhumb_line(start: &GeoPoint, end: &GeoPoint) -> RhumbLine {
    let phi1 = start.latitude().radians();
    let phi2 = end.latitude().radians();

    let d_phi = phi2 - phi1;
    let d_lam = short_way(end.longitude().radians() - start.longitude().radians());

    // Difference in meridional parts
    let d_psi = ((phi2 / 2.0 + FRAC_PI_4).tan() / (phi1 / 2.0 + FRAC_PI_4).tan()).ln();

    // On an east-west course d_psi vanishes and the ratio degenerates to cos(φ)
    let q = if d_phi.abs() > EAST_WEST_EPSILON {
        d_phi / d_psi
    } else {
        phi1.cos()
    };

    let angular = (d_phi.powi(2) + (q * d_lam).powi(2)).sqrt();
    trace!("rhumb line: d_phi={d_phi} d_lam={d_lam} d_psi={d_psi} q={q}");

    RhumbLine {
        distance: Distance::from_meters(angular * WGS84.equatorial_radius()),
        bearing: normalized_bearing(d_lam.atan2(d_psi)),
    }
}

/// Wrap a longitude difference into `[-π, π]`
fn short_way(d_lon: f64) -> f64 {
    if d_lon > PI {
        d_lon - TAU
    } else if d_lon < -PI {
        d_lon + TAU
    } else {
        d_lon
    }
}

fn normalized_bearing(radians: f64) -> Angle {
    Angle::from_degrees(radians.to_degrees().rem_euclid(360.0))
}
