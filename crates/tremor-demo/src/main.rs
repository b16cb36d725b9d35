//! Headless demo: replays a batch of synthetic earthquakes on a morphing globe.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI
//! flags. Run with `cargo run -p tremor-demo` for the default replay, or
//! `cargo run -p tremor-demo -- --resolution 20 --wireframe true` to override
//! settings. No window is opened; the demo drives the update loop and logs
//! the render state an external renderer would consume.

use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use tracing::info;
use tremor_config::{CliArgs, Config};
use tremor_globe::{Globe, GlobeParams, QuakeRecord, normalize_magnitude};
use tremor_mesh::MorphTargetMode;

/// Number of synthetic earthquakes to replay.
const QUAKE_COUNT: usize = 50;
/// Frames to simulate.
const FRAME_COUNT: usize = 600;

fn main() {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .or_else(|| dirs::config_dir().map(|d| d.join("tremor")))
        .unwrap_or_else(|| std::path::PathBuf::from("."));
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("config error: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    tremor_log::init_logging(None, cfg!(debug_assertions), Some(&config));

    let mut globe = match Globe::new(GlobeParams {
        resolution: config.mesh.resolution,
        morph_step: config.morph.blend_step,
        marker_duration: config.marker.duration_seconds,
        marker_scale: config.marker.initial_scale,
        morph_mode: MorphTargetMode::Sphere,
    }) {
        Ok(globe) => globe,
        Err(e) => {
            eprintln!("failed to build globe: {e}");
            std::process::exit(1);
        }
    };
    globe.set_wireframe(config.debug.wireframe);

    info!(
        vertices = globe.mesh().vertex_count(),
        triangles = globe.mesh().indices.len() / 3,
        "mesh ready"
    );

    // Synthetic records: seeded so every run replays the same catalog.
    // Timestamps spread across the first half of the replay window so the
    // oldest markers expire while the demo is still running.
    let replay_seconds = config.marker.duration_seconds * 2.0;
    let delta = replay_seconds / FRAME_COUNT as f64;
    let mut rng = Xoshiro256StarStar::seed_from_u64(1906);
    let mut records: Vec<QuakeRecord> = (0..QUAKE_COUNT)
        .map(|_| QuakeRecord {
            latitude: rng.gen_range(-90.0..=90.0),
            longitude: rng.gen_range(-180.0..=180.0),
            magnitude: normalize_magnitude(rng.gen_range(4.0..=9.5)),
            timestamp: rng.gen_range(0.0..replay_seconds / 2.0),
        })
        .collect();
    records.sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp));

    let mut next_record = 0;
    for frame in 0..FRAME_COUNT {
        // Toggle to globe a quarter of the way in, back to the map at the end.
        if frame == FRAME_COUNT / 4 {
            globe.set_globe_mode(true);
        } else if frame == FRAME_COUNT * 7 / 8 {
            globe.set_globe_mode(false);
        }

        globe.update(delta);

        // Ingest every record whose occurrence time has been reached.
        while next_record < records.len() && records[next_record].timestamp <= globe.clock() {
            globe.ingest(&records[next_record]);
            next_record += 1;
        }

        if frame % 100 == 0 {
            info!(
                frame,
                blend = globe.blend(),
                phase = ?globe.phase(),
                live_markers = globe.markers().len(),
                "frame"
            );
        }
    }

    let expired = records.len() - globe.markers().len();
    info!(
        ingested = records.len(),
        expired,
        phase = ?globe.phase(),
        "replay finished"
    );
}
