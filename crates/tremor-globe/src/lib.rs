//! Globe animation: map/globe morph state machine and earthquake markers.

mod blend;
mod globe;
mod marker;

pub use blend::{MorphController, MorphPhase, blend_buffers};
pub use globe::{Globe, GlobeParams};
pub use marker::{
    DEFAULT_MARKER_DURATION, QuakeMarker, QuakeRecord, magnitude_color, normalize_magnitude,
};
