//! The globe: owns the morph mesh, blend state, and live marker collection.

use glam::{DQuat, DVec3};
use tremor_geo::PlaneDomain;
use tremor_mesh::{MeshError, MorphMesh, MorphTargetMode};

use crate::blend::{MorphController, MorphPhase, blend_buffers};
use crate::marker::{DEFAULT_MARKER_DURATION, QuakeMarker, QuakeRecord};

/// Earth's axial tilt, applied as a rotation about z.
const AXIAL_TILT_DEG: f64 = -23.4;

/// Construction parameters for a [`Globe`].
#[derive(Clone, Copy, Debug)]
pub struct GlobeParams {
    /// Grid subdivisions along each axis. 20 is enough for a smooth sphere;
    /// 120 leaves headroom for height mapping.
    pub resolution: u32,
    /// Fixed per-frame blend step.
    pub morph_step: f64,
    /// Marker lifetime in playback seconds.
    pub marker_duration: f64,
    /// Initial marker scale before lifetime decay.
    pub marker_scale: f64,
    /// Morph-target mode; [`MorphTargetMode::Sphere`] for faithful morphing.
    pub morph_mode: MorphTargetMode,
}

impl Default for GlobeParams {
    fn default() -> Self {
        Self {
            resolution: 120,
            morph_step: 0.01,
            marker_duration: DEFAULT_MARKER_DURATION,
            marker_scale: 0.5,
            morph_mode: MorphTargetMode::Sphere,
        }
    }
}

/// A morphable earthquake globe.
///
/// Single-threaded, cooperative frame model: the external render loop calls
/// [`Globe::update`] once per frame and all mutation happens synchronously
/// inside it. The mesh buffers are immutable after construction; only the
/// blend scalar, the render-state buffers, and the marker list change.
pub struct Globe {
    mesh: MorphMesh,
    controller: MorphController,
    markers: Vec<QuakeMarker>,
    render_positions: Vec<DVec3>,
    render_normals: Vec<DVec3>,
    marker_duration: f64,
    marker_scale: f64,
    wireframe: bool,
    clock: f64,
}

impl Globe {
    /// Build a globe, generating the mesh and its morph target.
    pub fn new(params: GlobeParams) -> Result<Self, MeshError> {
        let mesh = MorphMesh::build(
            params.resolution,
            PlaneDomain::equirectangular(),
            params.morph_mode,
        )?;
        let render_positions = mesh.positions.clone();
        let render_normals = mesh.normals.clone();

        tracing::info!(
            resolution = params.resolution,
            vertices = mesh.vertex_count(),
            "globe created"
        );
        Ok(Self {
            mesh,
            controller: MorphController::new(params.morph_step),
            markers: Vec::new(),
            render_positions,
            render_normals,
            marker_duration: params.marker_duration,
            marker_scale: params.marker_scale,
            wireframe: false,
            clock: 0.0,
        })
    }

    /// Request globe (`true`) or flat-map (`false`) layout. The blend reacts
    /// on the next [`Globe::update`].
    pub fn set_globe_mode(&mut self, globe: bool) {
        self.controller.set_globe_mode(globe);
    }

    /// Currently requested mode.
    #[must_use]
    pub fn globe_mode(&self) -> bool {
        self.controller.globe_mode()
    }

    /// Current blend scalar in \[0, 1\].
    #[must_use]
    pub fn blend(&self) -> f64 {
        self.controller.blend()
    }

    /// Current phase of the morph state machine.
    #[must_use]
    pub fn phase(&self) -> MorphPhase {
        self.controller.phase()
    }

    /// Toggle wireframe-only rendering. Purely cosmetic; the renderer reads
    /// this flag, geometry is unaffected.
    pub fn set_wireframe(&mut self, wireframe: bool) {
        self.wireframe = wireframe;
    }

    /// Whether wireframe rendering is requested.
    #[must_use]
    pub fn wireframe(&self) -> bool {
        self.wireframe
    }

    /// The globe's natural rotation: Earth's axial tilt about z, for the
    /// renderer to compose with any user rotation.
    #[must_use]
    pub fn axial_tilt() -> DQuat {
        DQuat::from_rotation_z(AXIAL_TILT_DEG.to_radians())
    }

    /// Accumulated playback time in seconds.
    #[must_use]
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Set the playback clock, e.g. when seeking through the record stream.
    pub fn set_clock(&mut self, clock: f64) {
        self.clock = clock;
    }

    /// Spawn a marker for one external event record.
    ///
    /// Out-of-range coordinates are clamped at the geographic boundary; the
    /// marker's map and globe positions both derive from the mesh's own
    /// plane domain, so markers always land on the morphing surface.
    pub fn ingest(&mut self, record: &QuakeRecord) {
        let marker = QuakeMarker::new(
            record,
            self.mesh.domain(),
            self.marker_duration,
            self.marker_scale,
            self.controller.blend(),
        );
        tracing::debug!(
            latitude = record.latitude,
            longitude = record.longitude,
            magnitude = record.magnitude,
            "marker spawned"
        );
        self.markers.push(marker);
    }

    /// One cooperative frame update.
    ///
    /// Advances the playback clock and the blend, rewrites the blended
    /// render buffers, compacts away expired markers, and animates the
    /// survivors. Expired markers are removed by compaction after the
    /// expiry scan, never during traversal.
    pub fn update(&mut self, delta: f64) {
        self.clock += delta;
        let blend = self.controller.advance();

        blend_buffers(
            &self.mesh,
            blend,
            &mut self.render_positions,
            &mut self.render_normals,
        );

        let clock = self.clock;
        let before = self.markers.len();
        self.markers.retain(|marker| !marker.is_expired(clock));
        let expired = before - self.markers.len();
        if expired > 0 {
            tracing::debug!(expired, live = self.markers.len(), "markers expired");
        }

        for marker in &mut self.markers {
            marker.animate(clock, blend);
        }
    }

    /// The immutable mesh buffers (positions, normals, UVs, morph targets,
    /// indices), consumed once by the external renderer.
    #[must_use]
    pub fn mesh(&self) -> &MorphMesh {
        &self.mesh
    }

    /// Blended vertex positions for the current frame.
    #[must_use]
    pub fn render_positions(&self) -> &[DVec3] {
        &self.render_positions
    }

    /// Blended, renormalized vertex normals for the current frame.
    #[must_use]
    pub fn render_normals(&self) -> &[DVec3] {
        &self.render_normals
    }

    /// Live markers for the current frame.
    #[must_use]
    pub fn markers(&self) -> &[QuakeMarker] {
        &self.markers
    }
}
