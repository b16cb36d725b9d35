//! Mesh construction and validation errors.

/// Errors raised while building or validating a morphable mesh.
///
/// All of these are fatal configuration errors: the mesh is deterministic
/// local computation, so there is nothing to retry.
#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    /// Grid resolution of zero produces no quads.
    #[error("grid resolution must be at least 1, got {0}")]
    InvalidResolution(u32),

    /// A per-vertex buffer does not match the base position buffer length.
    /// Never silently truncated or padded.
    #[error("{buffer} length {actual} does not match vertex count {expected}")]
    BufferLengthMismatch {
        /// Name of the offending buffer.
        buffer: &'static str,
        /// Expected length (the base position buffer length).
        expected: usize,
        /// Actual length found.
        actual: usize,
    },

    /// An index referenced a vertex past the end of the vertex buffers.
    #[error("index {index} out of bounds for {vertex_count} vertices")]
    IndexOutOfBounds {
        /// The offending index value.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },
}
