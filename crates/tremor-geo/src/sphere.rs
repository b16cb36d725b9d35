//! Lat/lon to unit-sphere projection.

use glam::DVec3;

use crate::GeoCoord;

/// Project a geographic coordinate onto the unit sphere.
///
/// Uses the convention `x = cos(lat)·sin(lon)`, `y = sin(lat)`,
/// `z = cos(lat)·cos(lon)`, so lat=0/lon=0 faces +z, the north pole is +y,
/// and lon=90°E faces +x. Returns a unit-length `DVec3` for any valid input.
///
/// This is the canonical globe layout: every flat-map variant must agree
/// with it when fully morphed.
#[inline]
#[must_use]
pub fn to_sphere(coord: GeoCoord) -> DVec3 {
    let lat = coord.lat_radians();
    let lon = coord.lon_radians();
    DVec3::new(lat.cos() * lon.sin(), lat.sin(), lat.cos() * lon.cos())
}

/// Outward surface normal at a point on (or near) the unit sphere.
///
/// Because the target is a unit sphere centered at the origin, the outward
/// normal is simply the direction from the center to the point. A degenerate
/// point at the origin falls back to +z, the flat-map normal.
#[inline]
#[must_use]
pub fn sphere_normal(point: DVec3) -> DVec3 {
    point.try_normalize().unwrap_or(DVec3::Z)
}
