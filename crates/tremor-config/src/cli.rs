//! Command-line argument parsing for Tremor.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Tremor command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "tremor", about = "Earthquake globe")]
pub struct CliArgs {
    /// Mesh grid resolution.
    #[arg(long)]
    pub resolution: Option<u32>,

    /// Per-frame morph blend step.
    #[arg(long)]
    pub blend_step: Option<f64>,

    /// Marker lifetime in playback seconds.
    #[arg(long)]
    pub marker_duration: Option<f64>,

    /// Initial marker scale.
    #[arg(long)]
    pub marker_scale: Option<f64>,

    /// Render in wireframe only.
    #[arg(long)]
    pub wireframe: Option<bool>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(resolution) = args.resolution {
            self.mesh.resolution = resolution;
        }
        if let Some(step) = args.blend_step {
            self.morph.blend_step = step;
        }
        if let Some(duration) = args.marker_duration {
            self.marker.duration_seconds = duration;
        }
        if let Some(scale) = args.marker_scale {
            self.marker.initial_scale = scale;
        }
        if let Some(wireframe) = args.wireframe {
            self.debug.wireframe = wireframe;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
