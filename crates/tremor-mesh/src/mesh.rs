//! The morphable mesh: base flat-map buffers plus index-aligned morph targets.

use glam::{DVec2, DVec3};
use tremor_geo::PlaneDomain;

use crate::error::MeshError;
use crate::grid::{generate_grid_indices, generate_grid_vertices};
use crate::morph::{MorphTargetMode, build_morph_targets};

/// A flat-map grid mesh with a sphere morph target.
///
/// Struct-of-arrays layout: all five per-vertex buffers have identical
/// length and winding, and the single index buffer drives both the base and
/// the morph layout. Buffers are immutable after construction; the
/// animation layer only ever reads them.
#[derive(Debug)]
pub struct MorphMesh {
    /// Flat-map vertex positions (z = 0).
    pub positions: Vec<DVec3>,
    /// Pre-morph normals, uniformly +z.
    pub normals: Vec<DVec3>,
    /// Texture coordinates over \[0, 1\]².
    pub uvs: Vec<DVec2>,
    /// Morph-target positions on the unit sphere (or scattered).
    pub morph_positions: Vec<DVec3>,
    /// Morph-target normals, outward from the sphere center.
    pub morph_normals: Vec<DVec3>,
    /// Triangle indices, shared by both layouts.
    pub indices: Vec<u32>,
    resolution: u32,
    domain: PlaneDomain,
}

impl MorphMesh {
    /// Build a mesh at the given grid resolution.
    ///
    /// Fails with [`MeshError::InvalidResolution`] for resolution 0. The
    /// result is validated before being returned, so a constructed mesh
    /// always satisfies the buffer invariants.
    pub fn build(
        resolution: u32,
        domain: PlaneDomain,
        mode: MorphTargetMode,
    ) -> Result<Self, MeshError> {
        if resolution == 0 {
            return Err(MeshError::InvalidResolution(resolution));
        }

        let (positions, normals, uvs) = generate_grid_vertices(resolution, &domain);
        let indices = generate_grid_indices(resolution);
        let (morph_positions, morph_normals) = build_morph_targets(&positions, &domain, mode);

        let mesh = Self {
            positions,
            normals,
            uvs,
            morph_positions,
            morph_normals,
            indices,
            resolution,
            domain,
        };
        mesh.validate()?;

        tracing::debug!(
            resolution,
            vertices = mesh.vertex_count(),
            triangles = mesh.indices.len() / 3,
            "built morph mesh"
        );
        Ok(mesh)
    }

    /// Number of vertices shared by the base and morph layouts.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Grid resolution the mesh was built at.
    #[must_use]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// The plane parametrization this mesh was generated from.
    ///
    /// Anything that needs to agree with the mesh's flat layout (marker
    /// placement, inverse lookups) must go through this same domain.
    #[must_use]
    pub fn domain(&self) -> &PlaneDomain {
        &self.domain
    }

    /// Check the buffer invariants: equal lengths and in-bounds indices.
    ///
    /// A mismatch is a fatal configuration error, not something to repair
    /// by truncation or padding.
    pub fn validate(&self) -> Result<(), MeshError> {
        let expected = self.positions.len();
        for (buffer, actual) in [
            ("normals", self.normals.len()),
            ("uvs", self.uvs.len()),
            ("morph_positions", self.morph_positions.len()),
            ("morph_normals", self.morph_normals.len()),
        ] {
            if actual != expected {
                return Err(MeshError::BufferLengthMismatch {
                    buffer,
                    expected,
                    actual,
                });
            }
        }

        for &index in &self.indices {
            if index as usize >= expected {
                return Err(MeshError::IndexOutOfBounds {
                    index,
                    vertex_count: expected,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{grid_index_count, grid_vertex_count};

    #[test]
    fn test_build_rejects_zero_resolution() {
        let result = MorphMesh::build(0, PlaneDomain::equirectangular(), MorphTargetMode::Sphere);
        assert!(matches!(result, Err(MeshError::InvalidResolution(0))));
    }

    #[test]
    fn test_built_mesh_counts_match_formulas() {
        let mesh = MorphMesh::build(4, PlaneDomain::equirectangular(), MorphTargetMode::Sphere)
            .expect("resolution 4 should build");
        assert_eq!(mesh.vertex_count(), grid_vertex_count(4));
        assert_eq!(mesh.vertex_count(), 25);
        assert_eq!(mesh.indices.len(), grid_index_count(4));
        assert_eq!(mesh.indices.len(), 96);
    }

    #[test]
    fn test_all_buffers_equal_length() {
        let mesh = MorphMesh::build(6, PlaneDomain::equirectangular(), MorphTargetMode::Sphere)
            .expect("mesh should build");
        let n = mesh.vertex_count();
        assert_eq!(mesh.normals.len(), n);
        assert_eq!(mesh.uvs.len(), n);
        assert_eq!(mesh.morph_positions.len(), n);
        assert_eq!(mesh.morph_normals.len(), n);
    }

    #[test]
    fn test_validate_detects_length_mismatch() {
        let mut mesh =
            MorphMesh::build(2, PlaneDomain::equirectangular(), MorphTargetMode::Sphere)
                .expect("mesh should build");
        mesh.morph_positions.pop();
        assert!(matches!(
            mesh.validate(),
            Err(MeshError::BufferLengthMismatch {
                buffer: "morph_positions",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_detects_out_of_bounds_index() {
        let mut mesh =
            MorphMesh::build(2, PlaneDomain::equirectangular(), MorphTargetMode::Sphere)
                .expect("mesh should build");
        mesh.indices[0] = mesh.vertex_count() as u32;
        assert!(matches!(
            mesh.validate(),
            Err(MeshError::IndexOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_minimum_resolution_builds() {
        let mesh = MorphMesh::build(1, PlaneDomain::equirectangular(), MorphTargetMode::Sphere)
            .expect("resolution 1 should build");
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.indices.len(), 6);
    }

    #[test]
    fn test_scatter_mode_builds_valid_mesh() {
        let mesh = MorphMesh::build(
            3,
            PlaneDomain::equirectangular(),
            MorphTargetMode::Scatter {
                seed: 11,
                radius: 1.5,
            },
        )
        .expect("scatter mesh should build");
        assert!(mesh.validate().is_ok());
    }
}
