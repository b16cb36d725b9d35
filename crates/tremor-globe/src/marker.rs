//! Transient earthquake markers: spawn, shrink over lifetime, expire.

use glam::DVec3;
use tremor_geo::{GeoCoord, PlaneDomain, to_sphere};

/// Default marker lifetime in playback seconds: one playback "year"
/// (12 months of 28 days), matching the historical replay cadence.
pub const DEFAULT_MARKER_DURATION: f64 = 12.0 * 28.0 * 24.0 * 60.0 * 60.0;

/// Moment magnitudes below this normalize to 0 (typical catalog cutoff).
const MAGNITUDE_FLOOR: f64 = 4.0;
/// Largest recorded moment magnitude (Valdivia 1960); normalizes to 1.
const MAGNITUDE_CEILING: f64 = 9.5;

/// One earthquake event as supplied by the external record source.
///
/// The ingestion boundary: Tremor does no feed parsing, it only consumes
/// records shaped like this.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuakeRecord {
    /// Epicenter latitude in degrees.
    pub latitude: f64,
    /// Epicenter longitude in degrees.
    pub longitude: f64,
    /// Magnitude normalized into \[0, 1\]; see [`normalize_magnitude`].
    pub magnitude: f64,
    /// Occurrence time in playback seconds.
    pub timestamp: f64,
}

impl QuakeRecord {
    /// Epicenter as a validated geographic coordinate.
    #[must_use]
    pub fn coord(&self) -> GeoCoord {
        GeoCoord::new(self.latitude, self.longitude)
    }
}

/// Normalize a raw moment magnitude into \[0, 1\].
///
/// Linear over \[4.0, 9.5\], clamped at both ends. The floor matches the
/// usual catalog cutoff; the ceiling is the largest magnitude on record.
#[must_use]
pub fn normalize_magnitude(raw: f64) -> f64 {
    ((raw - MAGNITUDE_FLOOR) / (MAGNITUDE_CEILING - MAGNITUDE_FLOOR)).clamp(0.0, 1.0)
}

/// Map a normalized magnitude to an RGB color.
///
/// Monotonic green → red ramp: small quakes render green, the largest red.
/// Fixed at marker creation, never animated.
#[must_use]
pub fn magnitude_color(normalized: f64) -> [f32; 3] {
    let m = normalized.clamp(0.0, 1.0) as f32;
    [m, 1.0 - m, 0.0]
}

/// A live marker for one earthquake event.
///
/// Two independent animations drive a marker each frame: its position
/// interpolates between the stored map and globe placements as the *global*
/// blend changes, while its scale shrinks with its *own* age. The two must
/// never be conflated.
#[derive(Clone, Debug)]
pub struct QuakeMarker {
    created: f64,
    duration: f64,
    map_position: DVec3,
    globe_position: DVec3,
    initial_scale: f64,
    /// Current animated position, updated once per frame.
    pub position: DVec3,
    /// Current animated scale, decays monotonically to zero.
    pub scale: f64,
    /// Magnitude-derived color, fixed at creation.
    pub color: [f32; 3],
}

impl QuakeMarker {
    /// Create a marker for a record, precomputing both layout positions
    /// through the same plane domain the mesh was generated from.
    #[must_use]
    pub fn new(record: &QuakeRecord, domain: &PlaneDomain, duration: f64, initial_scale: f64, blend: f64) -> Self {
        let coord = record.coord();
        let map_position = domain.to_plane(coord);
        let globe_position = to_sphere(coord);
        Self {
            created: record.timestamp,
            // A zero duration would make the age quotient NaN at creation.
            duration: duration.max(f64::EPSILON),
            map_position,
            globe_position,
            initial_scale,
            position: map_position.lerp(globe_position, blend),
            scale: initial_scale,
            color: magnitude_color(record.magnitude),
        }
    }

    /// Normalized age at the given playback time, clamped to \[0, 1\].
    ///
    /// 0 at creation; a reading of 1 means the marker has expired.
    #[must_use]
    pub fn playback_life(&self, time: f64) -> f64 {
        ((time - self.created) / self.duration).clamp(0.0, 1.0)
    }

    /// Whether the marker's lifetime is over at the given playback time.
    #[must_use]
    pub fn is_expired(&self, time: f64) -> bool {
        self.playback_life(time) >= 1.0
    }

    /// Marker position in the flat-map layout.
    #[must_use]
    pub fn map_position(&self) -> DVec3 {
        self.map_position
    }

    /// Marker position in the globe layout.
    #[must_use]
    pub fn globe_position(&self) -> DVec3 {
        self.globe_position
    }

    /// Per-frame animation step.
    ///
    /// Position tracks the global blend; scale decays clamped-linearly from
    /// the initial value to zero as life goes 0 → 1.
    pub(crate) fn animate(&mut self, time: f64, blend: f64) {
        self.position = self.map_position.lerp(self.globe_position, blend);
        self.scale = self.initial_scale * (1.0 - self.playback_life(time));
    }
}
