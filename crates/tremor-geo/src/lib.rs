//! Geographic coordinate mapping: lat/lon to flat-map and unit-sphere layouts.

mod coord;
mod plane;
mod sphere;

pub use coord::{GeoCoord, GeoError};
pub use plane::PlaneDomain;
pub use sphere::{sphere_normal, to_sphere};
