//! Serde support for the unit types
//!
//! Each unit is written as a single number in its primary unit (degrees,
//! nautical miles, knots). The derived representation is rebuilt on load, so a
//! deserialized value cannot carry mismatched fields.

use crate::types::{Angle, Distance, Speed};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Angle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.degrees())
    }
}

impl<'de> Deserialize<'de> for Angle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Angle::from_degrees)
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.nautical_miles())
    }
}

impl<'de> Deserialize<'de> for Distance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Distance::from_nautical_miles)
    }
}

impl Serialize for Speed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.knots())
    }
}

impl<'de> Deserialize<'de> for Speed {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Speed::from_knots)
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{Angle, Distance, GeoPoint, Speed};
    use claims::assert_ok;
    use insta::assert_snapshot;

    #[test]
    fn angle_as_degrees() {
        let json = assert_ok!(serde_json::to_string(&Angle::from_degrees(90.0)));
        assert_snapshot!(json, @"90.0");

        let angle: Angle = assert_ok!(serde_json::from_str("180.0"));
        assert_eq!(angle, Angle::from_degrees(180.0));
    }

    #[test]
    fn distance_as_nautical_miles() {
        let distance: Distance = assert_ok!(serde_json::from_str("0.5"));
        assert_eq!(distance.meters(), 926.0);
    }

    #[test]
    fn speed_as_knots() {
        let json = assert_ok!(serde_json::to_string(&Speed::from_knots(12.5)));
        assert_snapshot!(json, @"12.5");
    }

    #[test]
    fn point_fields() {
        let point = GeoPoint::new(51.5, -0.25);
        let json = assert_ok!(serde_json::to_string(&point));
        assert_snapshot!(json, @r#"{"latitude":51.5,"longitude":-0.25}"#);

        let parsed: GeoPoint = assert_ok!(serde_json::from_str(&json));
        assert_eq!(parsed, point);
    }
}
