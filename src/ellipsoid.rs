//! Reference ellipsoids
//!
//! An ellipsoid is defined by two independent inputs, the equatorial radius
//! `a` and the inverse flattening `1/f`. Everything else is derived from them
//! once, at construction:
//!
//! - flattening `f = 1 / (1/f)`
//! - polar radius `b = a · (1 − f)`
//! - eccentricity² `e² = 2f − f²`
//!
//! A perfect sphere is expressed with an infinite inverse flattening, which
//! yields `f = 0`, `b = a` and `e² = 0` exactly.

use crate::error::{Error, Result};
use std::str::FromStr;

/// World Geodetic System 1984, the reference used by GPS
pub static WGS84: Ellipsoid = Ellipsoid::new(6_378_137.0, 298.257_223_563);

/// Geodetic Reference System 1980
pub static GRS80: Ellipsoid = Ellipsoid::new(6_378_137.0, 298.257_222_101);

static INTERNATIONAL_1924: Ellipsoid = Ellipsoid::new(6_378_388.0, 297.0);
static CLARKE_1866: Ellipsoid = Ellipsoid::new(6_378_206.4, 294.978_698_2);
static CLARKE_1880: Ellipsoid = Ellipsoid::new(6_378_249.145, 293.465);

static NAMED: [(&str, &Ellipsoid); 5] = [
    ("WGS84", &WGS84),
    ("GRS80", &GRS80),
    ("intl", &INTERNATIONAL_1924),
    ("clrk66", &CLARKE_1866),
    ("clrk80", &CLARKE_1880),
];

/// Geometric parameters of a reference ellipsoid
///
/// Inputs are not validated. A zero or negative inverse flattening produces
/// meaningless parameters rather than an error; supplying sane values is up
/// to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    semi_major_axis: f64,
    inverse_flattening: f64,
    flattening: f64,
    semi_minor_axis: f64,
    eccentricity_squared: f64,
}

impl Ellipsoid {
    /// Create an ellipsoid from its equatorial radius (meters) and inverse flattening
    pub const fn new(semi_major_axis: f64, inverse_flattening: f64) -> Self {
        let flattening = 1.0 / inverse_flattening;
        Self {
            semi_major_axis,
            inverse_flattening,
            flattening,
            semi_minor_axis: semi_major_axis * (1.0 - flattening),
            eccentricity_squared: 2.0 * flattening - flattening * flattening,
        }
    }

    /// Create a perfect sphere of the given radius (meters)
    pub const fn sphere(radius: f64) -> Self {
        Self::new(radius, f64::INFINITY)
    }

    /// The process-wide WGS84 instance
    pub fn wgs84() -> &'static Ellipsoid {
        &WGS84
    }

    /// Look up one of the predefined ellipsoids by name
    ///
    /// Known names are `WGS84`, `GRS80`, `intl` (International 1924),
    /// `clrk66` (Clarke 1866) and `clrk80` (Clarke 1880).
    pub fn named(name: &str) -> Result<&'static Ellipsoid> {
        NAMED
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, ellipsoid)| *ellipsoid)
            .ok_or_else(|| Error::UnknownEllipsoid(name.to_string()))
    }

    /// Semi-major axis `a` in meters
    pub fn equatorial_radius(&self) -> f64 {
        self.semi_major_axis
    }

    /// Semi-minor axis `b` in meters
    pub fn polar_radius(&self) -> f64 {
        self.semi_minor_axis
    }

    /// Arithmetic mean radius `(2a + b) / 3` in meters
    ///
    /// Used as the sphere radius for spherical approximations.
    pub fn mean_radius(&self) -> f64 {
        (2.0 * self.semi_major_axis + self.semi_minor_axis) / 3.0
    }

    pub fn inverse_flattening(&self) -> f64 {
        self.inverse_flattening
    }

    pub fn flattening(&self) -> f64 {
        self.flattening
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity_squared.sqrt()
    }

    pub fn eccentricity_squared(&self) -> f64 {
        self.eccentricity_squared
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        WGS84
    }
}

impl FromStr for Ellipsoid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::named(s).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};
    use insta::assert_compact_debug_snapshot;

    #[test]
    fn wgs84_equatorial_radius() {
        assert_eq!(WGS84.equatorial_radius(), 6378137.0);
    }

    #[test]
    fn wgs84_polar_radius() {
        assert_eq!(WGS84.polar_radius(), 6378137.0 * (1.0 - 1.0 / 298.257223563));
        assert!((WGS84.polar_radius() - 6_356_752.314_245).abs() < 0.001);
    }

    #[test]
    fn wgs84_flattening() {
        assert!((WGS84.flattening() - 0.003352811).abs() < 1e-9);
        assert_eq!(WGS84.inverse_flattening(), 298.257223563);
    }

    #[test]
    fn wgs84_eccentricity() {
        assert!((WGS84.eccentricity() - 0.081819191).abs() < 1e-9);
        assert!((WGS84.eccentricity_squared() - 0.006694380).abs() < 1e-9);
    }

    #[test]
    fn wgs84_mean_radius() {
        assert!((WGS84.mean_radius() - 6_371_008.771).abs() < 0.001);
    }

    #[test]
    fn wgs84_is_a_single_instance() {
        assert!(std::ptr::eq(Ellipsoid::wgs84(), &WGS84));
        assert!(std::ptr::eq(Ellipsoid::wgs84(), Ellipsoid::wgs84()));
        assert_eq!(Ellipsoid::default(), WGS84);
    }

    #[test]
    fn perfect_sphere() {
        let sphere = Ellipsoid::new(6_371_000.0, f64::INFINITY);
        assert_eq!(sphere.flattening(), 0.0);
        assert_eq!(sphere.polar_radius(), sphere.equatorial_radius());
        assert_eq!(sphere.eccentricity_squared(), 0.0);
        assert_eq!(sphere.eccentricity(), 0.0);
        assert_eq!(sphere.mean_radius(), 6_371_000.0);
        assert_eq!(Ellipsoid::sphere(6_371_000.0), sphere);
    }

    #[test]
    fn zero_inverse_flattening_is_not_an_error() {
        let ellipsoid = Ellipsoid::new(1.0, 0.0);
        assert_eq!(ellipsoid.flattening(), f64::INFINITY);
        assert!(ellipsoid.polar_radius().is_infinite());
    }

    #[test]
    fn named_lookup() {
        let wgs84 = assert_ok!(Ellipsoid::named("WGS84"));
        assert!(std::ptr::eq(wgs84, Ellipsoid::wgs84()));

        let grs80 = assert_ok!(Ellipsoid::named("GRS80"));
        assert!(std::ptr::eq(grs80, &GRS80));
        assert_eq!(grs80.equatorial_radius(), WGS84.equatorial_radius());
        assert!((grs80.flattening() - WGS84.flattening()).abs() < 1e-8);

        let intl = assert_ok!("intl".parse::<Ellipsoid>());
        assert_eq!(intl.equatorial_radius(), 6_378_388.0);
    }

    #[test]
    fn named_lookup_unknown() {
        let err = assert_err!(Ellipsoid::named("bessel"));
        assert_compact_debug_snapshot!(err, @r#"UnknownEllipsoid("bessel")"#);
    }
}
