#![doc = include_str!("../README.md")]

pub use crate::dead_reckoning::dead_reckon;
pub use crate::ellipsoid::{Ellipsoid, GRS80, WGS84};
pub use crate::error::{Error, Result};
pub use crate::great_circle::{
    great_circle_distance, great_circle_distance_on, great_circle_initial_bearing,
};
pub use crate::rhumb_line::{RhumbLine, rhumb_line, rhumb_line_bearing};
pub use crate::state::StateVector;
pub use crate::types::*;

mod dead_reckoning;
pub mod ellipsoid;
mod error;
mod great_circle;
pub mod navigation;
mod rhumb_line;
mod state;
mod types;
