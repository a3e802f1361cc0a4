use crate::dead_reckon;
use crate::types::{Angle, Distance, GeoPoint, Speed};
use log::{debug, trace};

/// Kinematic state of a vessel at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVector {
    /// Microseconds since epoch
    pub timestamp_us: u64,
    pub position: GeoPoint,
    /// Direction the bow points
    pub heading: Angle,
    /// Speed over ground
    pub speed_over_ground: Speed,
    /// Course over ground, the actual path over the seabed
    pub course_over_ground: Angle,
    /// Rotation about the longitudinal axis
    pub roll: Angle,
    /// Rotation about the lateral axis
    pub pitch: Angle,
    /// Rate of turn in degrees per second
    pub yaw_rate: f32,
}

impl StateVector {
    /// A zeroed state at `position`, e.g. before the first sensor fix
    pub fn new(position: GeoPoint) -> Self {
        Self {
            timestamp_us: 0,
            position,
            heading: Angle::default(),
            speed_over_ground: Speed::default(),
            course_over_ground: Angle::default(),
            roll: Angle::default(),
            pitch: Angle::default(),
            yaw_rate: 0.0,
        }
    }

    /// Move the position along `heading` at `speed_over_ground` for `dt_s` seconds
    ///
    /// Time only runs forward: a negative or non-finite `dt_s` leaves the state
    /// untouched. The timestamp saturates at `u64::MAX`.
    pub fn advance_dead_reckoning(&mut self, dt_s: f64) {
        if !dt_s.is_finite() || dt_s < 0.0 {
            debug!("ignoring dead reckoning step of {dt_s} s");
            return;
        }

        let travelled = Distance::from_meters(self.speed_over_ground.meters_per_second() * dt_s);

        self.position = dead_reckon(&self.position, self.heading, travelled);
        self.timestamp_us = self
            .timestamp_us
            .saturating_add((dt_s * 1_000_000.0) as u64);
        trace!("dead reckoned to {:.6} at {} us", self.position, self.timestamp_us);
    }
}
