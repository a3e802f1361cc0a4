use crate::types::GeoPoint;

/// A named position on a route
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    pub name: String,
    pub location: GeoPoint,
}

impl Waypoint {
    /// Create a waypoint from a name and latitude/longitude in degrees
    pub fn new(name: impl Into<String>, latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            name: name.into(),
            location: GeoPoint::new(latitude_deg, longitude_deg),
        }
    }
}
