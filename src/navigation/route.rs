use crate::navigation::{Leg, Waypoint};
use crate::types::Distance;
use log::debug;

/// A named, ordered sequence of waypoints
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub name: String,
    pub waypoints: Vec<Waypoint>,
}

impl Route {
    /// Create an empty route
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            waypoints: Vec::new(),
        }
    }

    pub fn add_waypoint(&mut self, waypoint: Waypoint) {
        self.waypoints.push(waypoint);
    }

    /// Build the leg starting at waypoint `index`
    ///
    /// Index 0 is the leg between waypoints 0 and 1. Returns `None` if there
    /// is no waypoint after `index`.
    pub fn leg(&self, index: usize) -> Option<Leg> {
        let [start, end] = self.waypoints.get(index..index.checked_add(2)?)? else {
            return None;
        };

        debug!("{}: leg {index} from {} to {}", self.name, start.name, end.name);
        Some(Leg::new(start, end))
    }

    /// All legs of the route in order
    pub fn legs(&self) -> impl Iterator<Item = Leg> + '_ {
        self.waypoints
            .windows(2)
            .map(|pair| Leg::new(&pair[0], &pair[1]))
    }

    /// Sum of the great circle lengths of all legs
    pub fn total_distance(&self) -> Distance {
        self.legs().map(|leg| leg.total_distance).sum()
    }
}
