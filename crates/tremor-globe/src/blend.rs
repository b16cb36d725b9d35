//! The map/globe blend state machine and per-frame vertex blending.

use glam::DVec3;
use tremor_mesh::MorphMesh;

/// Absorbs accumulated floating-point error in the blend sum so a 0.01 step
/// closes the full interval in exactly 100 frames.
const SNAP_EPSILON: f64 = 1e-9;

/// Where the blend currently sits relative to the requested mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MorphPhase {
    /// Fully flat, blend = 0, not morphing.
    Plane,
    /// Advancing toward blend = 1.
    MorphingToGlobe,
    /// Fully spherical, blend = 1, not morphing.
    Globe,
    /// Advancing toward blend = 0.
    MorphingToPlane,
}

/// Owns the blend scalar and drives it toward the requested extreme.
///
/// The blend is always in \[0, 1\] and moves by a fixed per-frame step,
/// monotonically per mode. Once an extreme is reached the phase is terminal
/// until the mode flag changes again.
#[derive(Debug, Clone)]
pub struct MorphController {
    blend: f64,
    step: f64,
    globe_mode: bool,
}

impl MorphController {
    /// Create a controller starting flat. `step` is clamped to (0, 1].
    #[must_use]
    pub fn new(step: f64) -> Self {
        Self {
            blend: 0.0,
            step: step.clamp(f64::EPSILON, 1.0),
            globe_mode: false,
        }
    }

    /// Current blend scalar in \[0, 1\]: 0 = flat map, 1 = globe.
    #[must_use]
    pub fn blend(&self) -> f64 {
        self.blend
    }

    /// Requested mode: `true` = globe, `false` = flat map.
    #[must_use]
    pub fn globe_mode(&self) -> bool {
        self.globe_mode
    }

    /// Set the requested mode. Takes effect on the next [`advance`] call.
    ///
    /// [`advance`]: MorphController::advance
    pub fn set_globe_mode(&mut self, globe: bool) {
        if self.globe_mode != globe {
            tracing::info!(globe, "morph mode toggled");
        }
        self.globe_mode = globe;
    }

    /// Current phase of the state machine.
    #[must_use]
    pub fn phase(&self) -> MorphPhase {
        if self.globe_mode {
            if self.blend >= 1.0 {
                MorphPhase::Globe
            } else {
                MorphPhase::MorphingToGlobe
            }
        } else if self.blend <= 0.0 {
            MorphPhase::Plane
        } else {
            MorphPhase::MorphingToPlane
        }
    }

    /// Advance the blend by one frame step toward the requested extreme.
    ///
    /// Returns the new blend value. The final partial step snaps to the
    /// extreme, so from 0 a step of `s` reaches 1 after exactly
    /// `ceil(1 / s)` calls and stays there.
    pub fn advance(&mut self) -> f64 {
        if self.globe_mode {
            if 1.0 - self.blend <= self.step + SNAP_EPSILON {
                self.blend = 1.0;
            } else {
                self.blend += self.step;
            }
        } else if self.blend <= self.step + SNAP_EPSILON {
            self.blend = 0.0;
        } else {
            self.blend -= self.step;
        }
        self.blend
    }
}

/// Write the blended render-state buffers for the given blend value.
///
/// Position is `lerp(base, morph_target, blend)` per vertex; the normal is
/// lerped the same way and renormalized. A degenerate lerped normal (base
/// and target exactly opposed) falls back to the morph-target normal.
/// Output buffers are cleared and refilled, so callers can reuse them
/// across frames without reallocating.
pub fn blend_buffers(
    mesh: &MorphMesh,
    blend: f64,
    positions: &mut Vec<DVec3>,
    normals: &mut Vec<DVec3>,
) {
    positions.clear();
    normals.clear();
    positions.reserve(mesh.vertex_count());
    normals.reserve(mesh.vertex_count());

    for i in 0..mesh.vertex_count() {
        positions.push(mesh.positions[i].lerp(mesh.morph_positions[i], blend));
        let normal = mesh.normals[i].lerp(mesh.morph_normals[i], blend);
        normals.push(normal.try_normalize().unwrap_or(mesh.morph_normals[i]));
    }
}
