use std::f64::consts::PI;
use std::fmt;

/// An angle carrying both its degree and radian representation
///
/// The radian value is derived once at construction as `degrees × π/180`.
/// No wrapping to a canonical range is performed: 450° stays 450°.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Angle {
    degrees: f64,
    radians: f64,
}

impl Angle {
    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            degrees,
            radians: degrees * PI / 180.0,
        }
    }

    pub fn from_radians(radians: f64) -> Self {
        Self {
            degrees: radians.to_degrees(),
            radians,
        }
    }

    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    pub fn radians(&self) -> f64 {
        self.radians
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*}°", precision, self.degrees),
            None => write!(f, "{}°", self.degrees),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::{assert_compact_debug_snapshot, assert_snapshot};
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn right_angle_in_radians() {
        assert!((Angle::from_degrees(90.0).radians() - FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn straight_angle_in_radians() {
        assert!((Angle::from_degrees(180.0).radians() - PI).abs() < 1e-9);
    }

    #[test]
    fn negative_angle() {
        let angle = Angle::from_degrees(-180.0);
        assert_eq!(angle.degrees(), -180.0);
        assert!((angle.radians() + PI).abs() < 1e-9);
    }

    #[test]
    fn no_wrapping() {
        let angle = Angle::from_degrees(450.0);
        assert_eq!(angle.degrees(), 450.0);
        assert!((angle.radians() - 2.5 * PI).abs() < 1e-9);
    }

    #[test]
    fn from_radians_keeps_radians() {
        let angle = Angle::from_radians(FRAC_PI_2);
        assert_eq!(angle.radians(), FRAC_PI_2);
        assert!((angle.degrees() - 90.0).abs() < 1e-10);
    }

    #[test]
    fn default_is_zero() {
        assert_compact_debug_snapshot!(Angle::default(), @"Angle { degrees: 0.0, radians: 0.0 }");
    }

    #[test]
    fn display() {
        assert_snapshot!(Angle::from_degrees(45.0), @"45°");
        assert_snapshot!(format!("{:.2}", Angle::from_degrees(12.3456)), @"12.35°");
    }
}
