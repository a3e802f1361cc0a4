use std::fmt;

/// Meters per second in one knot
pub const KNOTS_TO_MPS: f64 = 0.5144444444;

/// A speed carrying both knots and meters per second
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Speed {
    knots: f64,
    meters_per_second: f64,
}

impl Speed {
    pub fn from_knots(knots: f64) -> Self {
        Self {
            knots,
            meters_per_second: knots * KNOTS_TO_MPS,
        }
    }

    pub fn from_meters_per_second(meters_per_second: f64) -> Self {
        Self {
            knots: meters_per_second / KNOTS_TO_MPS,
            meters_per_second,
        }
    }

    pub fn knots(&self) -> f64 {
        self.knots
    }

    pub fn meters_per_second(&self) -> f64 {
        self.meters_per_second
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*} kn", precision, self.knots),
            None => write!(f, "{} kn", self.knots),
        }
    }
}
