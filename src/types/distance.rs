use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

/// Meters in one international nautical mile
pub const NM_TO_METERS: f64 = 1852.0;

/// A distance carrying both nautical miles and meters
///
/// Constructed from nautical miles, the meter value is `nm × 1852.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Distance {
    nautical_miles: f64,
    meters: f64,
}

impl Distance {
    pub fn from_nautical_miles(nautical_miles: f64) -> Self {
        Self {
            nautical_miles,
            meters: nautical_miles * NM_TO_METERS,
        }
    }

    pub fn from_meters(meters: f64) -> Self {
        Self {
            nautical_miles: meters / NM_TO_METERS,
            meters,
        }
    }

    pub fn nautical_miles(&self) -> f64 {
        self.nautical_miles
    }

    pub fn meters(&self) -> f64 {
        self.meters
    }
}

impl Add for Distance {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::from_meters(self.meters + other.meters)
    }
}

impl Sub for Distance {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::from_meters(self.meters - other.meters)
    }
}

impl Sum for Distance {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*} NM", precision, self.nautical_miles),
            None => write!(f, "{} NM", self.nautical_miles),
        }
    }
}
