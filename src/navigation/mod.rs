//! Route planning on top of the great circle and rhumb line calculations
//!
//! A [`Route`] is an ordered list of [`Waypoint`]s. Each consecutive pair
//! forms a [`Leg`], which knows its desired track and length and can report
//! the vessel's progress along it.

mod leg;
mod route;
mod waypoint;

pub use leg::{Leg, LegProgress};
pub use route::Route;
pub use waypoint::Waypoint;
