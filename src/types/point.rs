use crate::error::Error;
use crate::types::Angle;
use std::f64::consts::FRAC_PI_4;
use std::fmt;
use std::str::FromStr;

/// Latitude bound used for meridional parts, keeping `tan` off its asymptote
const MERCATOR_LIMIT_DEG: f64 = 89.5;

/// A geographic position as a latitude/longitude pair
///
/// Coordinates are accepted as given. Out-of-range latitudes (beyond ±90°)
/// and longitudes (beyond ±180°) are neither rejected nor normalized; the
/// calculations simply evaluate their formulas on whatever they are handed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    latitude: Angle,
    longitude: Angle,
}

impl GeoPoint {
    /// Create a point from latitude and longitude in degrees
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude: Angle::from_degrees(latitude_deg),
            longitude: Angle::from_degrees(longitude_deg),
        }
    }

    pub fn latitude(&self) -> Angle {
        self.latitude
    }

    pub fn longitude(&self) -> Angle {
        self.longitude
    }

    /// Meridional parts: the vertical coordinate of this point on a Mercator chart
    ///
    /// Computed as `ln(tan(45° + φ/2))` with φ clamped to ±89.5°.
    pub fn mercator_latitude(&self) -> f64 {
        let limit = Angle::from_degrees(MERCATOR_LIMIT_DEG).radians();
        let phi = self.latitude.radians().clamp(-limit, limit);

        (FRAC_PI_4 + phi / 2.0).tan().ln()
    }
}

impl FromStr for GeoPoint {
    type Err = Error;

    /// Parse `"lat,lon"` in decimal degrees
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',');
        let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(Error::MalformedPoint(s.to_string()));
        };

        Ok(Self::new(lat.trim().parse()?, lon.trim().parse()?))
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(
                f,
                "{:.*}, {:.*}",
                precision,
                self.latitude.degrees(),
                precision,
                self.longitude.degrees()
            ),
            None => write!(
                f,
                "{}, {}",
                self.latitude.degrees(),
                self.longitude.degrees()
            ),
        }
    }
}
