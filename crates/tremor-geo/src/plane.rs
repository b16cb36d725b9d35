//! The rectangular plane domain shared by the mesh generator and the morph
//! target builder.
//!
//! Historically the rescale constants for the flat-map layout were duplicated
//! at every call site, which made axis-order and range swaps easy to miss.
//! `PlaneDomain` is the single source of truth: both directions of the
//! mapping and the UV parametrization live here.

use std::f64::consts::{FRAC_PI_2, PI};

use glam::{DVec2, DVec3};

use crate::GeoCoord;

/// Linear parametrization of the flat-map layout.
///
/// Longitude maps to the horizontal axis, latitude to the vertical axis,
/// both oriented so increasing value moves right/up. The default covers
/// x ∈ \[-π, π\], y ∈ \[-π/2, π/2\], matching the unit sphere's surface
/// parametrization so map and globe are the same scale at the equator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneDomain {
    /// Half extent of the horizontal (longitude) axis.
    pub half_width: f64,
    /// Half extent of the vertical (latitude) axis.
    pub half_height: f64,
}

impl Default for PlaneDomain {
    fn default() -> Self {
        Self::equirectangular()
    }
}

impl PlaneDomain {
    /// The standard equirectangular domain: \[-π, π\] × \[-π/2, π/2\].
    #[must_use]
    pub fn equirectangular() -> Self {
        Self {
            half_width: PI,
            half_height: FRAC_PI_2,
        }
    }

    /// Map a geographic coordinate into the flat plane (z = 0).
    #[inline]
    #[must_use]
    pub fn to_plane(&self, coord: GeoCoord) -> DVec3 {
        DVec3::new(
            coord.longitude / 180.0 * self.half_width,
            coord.latitude / 90.0 * self.half_height,
            0.0,
        )
    }

    /// Recover the geographic coordinate of a plane point.
    ///
    /// Exact inverse of [`PlaneDomain::to_plane`] up to floating-point
    /// tolerance. Input outside the domain is clamped by [`GeoCoord::new`].
    #[inline]
    #[must_use]
    pub fn to_geo(&self, x: f64, y: f64) -> GeoCoord {
        GeoCoord::new(y / self.half_height * 90.0, x / self.half_width * 180.0)
    }

    /// Texture coordinates over \[0, 1\]².
    ///
    /// `u` = 0 at the anti-meridian, `v` = 0.5 at the equator. `v` runs
    /// north-to-south so row 0 of an equirectangular earth texture lands at
    /// the north pole.
    #[inline]
    #[must_use]
    pub fn to_uv(&self, coord: GeoCoord) -> DVec2 {
        DVec2::new(
            (coord.longitude + 180.0) / 360.0,
            1.0 - (coord.latitude + 90.0) / 180.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_longitude_maps_to_horizontal_axis() {
        let domain = PlaneDomain::equirectangular();
        let east = domain.to_plane(GeoCoord::new(0.0, 90.0));
        assert!((east.x - FRAC_PI_2).abs() < EPSILON);
        assert_eq!(east.y, 0.0);
        assert_eq!(east.z, 0.0);
    }

    #[test]
    fn test_latitude_maps_to_vertical_axis() {
        let domain = PlaneDomain::equirectangular();
        let north = domain.to_plane(GeoCoord::new(45.0, 0.0));
        assert_eq!(north.x, 0.0);
        assert!((north.y - FRAC_PI_2 / 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_domain_corners() {
        let domain = PlaneDomain::equirectangular();
        let ne = domain.to_plane(GeoCoord::new(90.0, 180.0));
        assert!((ne.x - PI).abs() < EPSILON);
        assert!((ne.y - FRAC_PI_2).abs() < EPSILON);
        let sw = domain.to_plane(GeoCoord::new(-90.0, -180.0));
        assert!((sw.x + PI).abs() < EPSILON);
        assert!((sw.y + FRAC_PI_2).abs() < EPSILON);
    }

    #[test]
    fn test_roundtrip_geo_plane_geo() {
        let domain = PlaneDomain::equirectangular();
        for lat_step in 0..=18 {
            for lon_step in 0..=36 {
                let lat = -90.0 + 10.0 * lat_step as f64;
                let lon = -180.0 + 10.0 * lon_step as f64;
                let p = domain.to_plane(GeoCoord::new(lat, lon));
                let back = domain.to_geo(p.x, p.y);
                assert!(
                    (back.latitude - lat).abs() < EPSILON,
                    "latitude mismatch at ({lat}, {lon}): {}",
                    back.latitude
                );
                assert!(
                    (back.longitude - lon).abs() < EPSILON,
                    "longitude mismatch at ({lat}, {lon}): {}",
                    back.longitude
                );
            }
        }
    }

    #[test]
    fn test_to_geo_clamps_outside_domain() {
        let domain = PlaneDomain::equirectangular();
        let c = domain.to_geo(10.0, -10.0);
        assert_eq!(c.longitude, 180.0);
        assert_eq!(c.latitude, -90.0);
    }

    #[test]
    fn test_uv_covers_unit_square() {
        let domain = PlaneDomain::equirectangular();
        let origin = domain.to_uv(GeoCoord::new(0.0, -180.0));
        assert!((origin.x - 0.0).abs() < EPSILON);
        assert!((origin.y - 0.5).abs() < EPSILON);

        let north_east = domain.to_uv(GeoCoord::new(90.0, 180.0));
        assert!((north_east.x - 1.0).abs() < EPSILON);
        assert!((north_east.y - 0.0).abs() < EPSILON);

        let south_west = domain.to_uv(GeoCoord::new(-90.0, -180.0));
        assert!((south_west.x - 0.0).abs() < EPSILON);
        assert!((south_west.y - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_default_is_equirectangular() {
        assert_eq!(PlaneDomain::default(), PlaneDomain::equirectangular());
    }
}
