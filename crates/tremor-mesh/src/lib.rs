//! Flat-map grid mesh generation and sphere morph-target construction.

mod error;
mod grid;
mod mesh;
mod morph;

pub use error::MeshError;
pub use grid::{generate_grid_indices, grid_index_count, grid_vertex_count};
pub use mesh::MorphMesh;
pub use morph::MorphTargetMode;
