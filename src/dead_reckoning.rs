use crate::ellipsoid::WGS84;
use crate::types::{Angle, Distance, GeoPoint};

/// Predict the position reached from `start` after travelling `distance` on
/// the initial great circle course `bearing`
///
/// Computed on the WGS84 mean sphere. The resulting longitude is not wrapped
/// into `[-180°, 180°]`.
pub fn dead_reckon(start: &GeoPoint, bearing: Angle, distance: Distance) -> GeoPoint {
    let phi1 = start.latitude().radians();
    let lam1 = start.longitude().radians();
    let theta = bearing.radians();

    // Angular distance
    let delta = distance.meters() / WGS84.mean_radius();

    let phi2 = (phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos()).asin();
    let lam2 =
        lam1 + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * phi2.sin());

    GeoPoint::new(phi2.to_degrees(), lam2.to_degrees())
}
