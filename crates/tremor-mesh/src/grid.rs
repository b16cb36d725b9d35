//! Shared-vertex grid generation over the plane domain.
//!
//! The grid uses the shared-vertex strategy: resolution `n` gives
//! `(n + 1)²` vertices and `n²` quads. Because the flat map is an unrolled
//! rectangle, the anti-meridian shows up as the two distinct boundary
//! columns of the grid — no vertex is shared across the wrap, so the UV
//! seam needs no special handling.

use glam::{DVec2, DVec3};
use tremor_geo::{GeoCoord, PlaneDomain};

/// Number of vertices in a shared-vertex grid of the given resolution.
#[inline]
#[must_use]
pub fn grid_vertex_count(resolution: u32) -> usize {
    let side = resolution as usize + 1;
    side * side
}

/// Number of indices (3 per triangle, 2 triangles per quad).
#[inline]
#[must_use]
pub fn grid_index_count(resolution: u32) -> usize {
    resolution as usize * resolution as usize * 6
}

/// Generate flat-map vertex positions, normals, and UVs.
///
/// Vertices are laid out row-major: row = latitude step (south to north),
/// column = longitude step (west to east), so vertex `i` sits at
/// `row * (resolution + 1) + col`. Every pre-morph normal is +z, the
/// outward direction of the flat map.
pub(crate) fn generate_grid_vertices(
    resolution: u32,
    domain: &PlaneDomain,
) -> (Vec<DVec3>, Vec<DVec3>, Vec<DVec2>) {
    let side = resolution as usize + 1;
    let mut positions = Vec::with_capacity(side * side);
    let mut normals = Vec::with_capacity(side * side);
    let mut uvs = Vec::with_capacity(side * side);

    for row in 0..side {
        let lat = -90.0 + 180.0 * row as f64 / resolution as f64;
        for col in 0..side {
            let lon = -180.0 + 360.0 * col as f64 / resolution as f64;
            let coord = GeoCoord::new(lat, lon);
            positions.push(domain.to_plane(coord));
            normals.push(DVec3::Z);
            uvs.push(domain.to_uv(coord));
        }
    }

    (positions, normals, uvs)
}

/// Generate the index buffer for a shared-vertex grid.
///
/// Two triangles per quad, counter-clockwise when viewed from +z so the
/// uniform +z normal faces outward. The same buffer indexes the base and
/// morph layouts; the sphere projection preserves the orientation, so no
/// winding flip is needed after morphing.
#[must_use]
pub fn generate_grid_indices(resolution: u32) -> Vec<u32> {
    let side = resolution + 1;
    let mut indices = Vec::with_capacity(grid_index_count(resolution));

    for row in 0..resolution {
        for col in 0..resolution {
            let i00 = row * side + col;
            let i10 = row * side + (col + 1);
            let i01 = (row + 1) * side + col;
            let i11 = (row + 1) * side + (col + 1);

            indices.extend_from_slice(&[i00, i10, i11]);
            indices.extend_from_slice(&[i00, i11, i01]);
        }
    }

    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_and_index_counts() {
        for resolution in [1, 2, 4, 20] {
            let domain = PlaneDomain::equirectangular();
            let (positions, normals, uvs) = generate_grid_vertices(resolution, &domain);
            let indices = generate_grid_indices(resolution);
            assert_eq!(positions.len(), grid_vertex_count(resolution));
            assert_eq!(normals.len(), positions.len());
            assert_eq!(uvs.len(), positions.len());
            assert_eq!(indices.len(), grid_index_count(resolution));
        }
    }

    #[test]
    fn test_all_indices_in_bounds() {
        let resolution = 7;
        let indices = generate_grid_indices(resolution);
        let count = grid_vertex_count(resolution) as u32;
        for &i in &indices {
            assert!(i < count, "index {i} out of bounds for {count} vertices");
        }
    }

    #[test]
    fn test_triangles_wind_ccw_from_positive_z() {
        let domain = PlaneDomain::equirectangular();
        let resolution = 4;
        let (positions, _, _) = generate_grid_vertices(resolution, &domain);
        let indices = generate_grid_indices(resolution);

        for tri in indices.chunks_exact(3) {
            let v0 = positions[tri[0] as usize];
            let v1 = positions[tri[1] as usize];
            let v2 = positions[tri[2] as usize];
            let normal = (v1 - v0).cross(v2 - v0);
            assert!(
                normal.z > 0.0,
                "triangle {tri:?} winds clockwise: normal {normal:?}"
            );
        }
    }

    #[test]
    fn test_grid_spans_full_domain() {
        let domain = PlaneDomain::equirectangular();
        let (positions, _, _) = generate_grid_vertices(4, &domain);
        let min_x = positions.iter().map(|p| p.x).fold(f64::MAX, f64::min);
        let max_x = positions.iter().map(|p| p.x).fold(f64::MIN, f64::max);
        let min_y = positions.iter().map(|p| p.y).fold(f64::MAX, f64::min);
        let max_y = positions.iter().map(|p| p.y).fold(f64::MIN, f64::max);

        assert!((min_x + std::f64::consts::PI).abs() < 1e-12);
        assert!((max_x - std::f64::consts::PI).abs() < 1e-12);
        assert!((min_y + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((max_y - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_normals_all_positive_z_pre_morph() {
        let domain = PlaneDomain::equirectangular();
        let (_, normals, _) = generate_grid_vertices(3, &domain);
        assert!(normals.iter().all(|&n| n == DVec3::Z));
    }

    #[test]
    fn test_uvs_within_unit_square() {
        let domain = PlaneDomain::equirectangular();
        let (_, _, uvs) = generate_grid_vertices(5, &domain);
        for uv in &uvs {
            assert!((0.0..=1.0).contains(&uv.x), "u out of range: {}", uv.x);
            assert!((0.0..=1.0).contains(&uv.y), "v out of range: {}", uv.y);
        }
    }
}
