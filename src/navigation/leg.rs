use crate::navigation::Waypoint;
use crate::types::{Angle, Distance, GeoPoint};
use crate::{great_circle_distance, rhumb_line_bearing};
use std::f64::consts::{PI, TAU};

/// The active segment between two consecutive waypoints
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    pub start: GeoPoint,
    pub end: GeoPoint,
    /// Rhumb line course from `start` to `end`
    pub desired_track: Angle,
    /// Great circle length of the leg
    pub total_distance: Distance,
}

/// Position of the vessel relative to a [`Leg`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegProgress {
    /// Cross-track error, positive when right of the desired track
    pub cross_track: Distance,
    /// Distance made good along the desired track
    pub along_track: Distance,
    /// Remaining distance along the track to `end`
    pub to_go: Distance,
}

impl Leg {
    pub fn new(start: &Waypoint, end: &Waypoint) -> Self {
        Self {
            start: start.location,
            end: end.location,
            desired_track: rhumb_line_bearing(&start.location, &end.location),
            total_distance: great_circle_distance(&start.location, &end.location),
        }
    }

    /// Decompose the offset from the leg start into along- and cross-track parts
    pub fn progress(&self, position: &GeoPoint) -> LegProgress {
        let from_start = great_circle_distance(&self.start, position);
        let bearing = rhumb_line_bearing(&self.start, position);

        let mut offset = bearing.radians() - self.desired_track.radians();
        if offset > PI {
            offset -= TAU;
        } else if offset <= -PI {
            offset += TAU;
        }

        let along_track = Distance::from_meters(from_start.meters() * offset.cos());

        LegProgress {
            cross_track: Distance::from_meters(from_start.meters() * offset.sin()),
            along_track,
            to_go: self.total_distance - along_track,
        }
    }
}
