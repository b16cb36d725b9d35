//! Morph-target construction: the spherical counterpart of every grid vertex.

use glam::DVec3;
use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use tremor_geo::{PlaneDomain, sphere_normal, to_sphere};

/// How morph-target positions are produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MorphTargetMode {
    /// Faithful morphing: each vertex's plane position is inverted back to
    /// its geographic coordinate and projected onto the unit sphere.
    /// Required whenever positional correspondence matters.
    Sphere,
    /// Visual-only fallback: vertices scatter to seeded pseudo-random points
    /// inside a bounding sphere. Deliberately sacrifices positional
    /// correspondence with the flat map.
    Scatter {
        /// RNG seed, fixed for reproducible scatter.
        seed: u64,
        /// Radius of the bounding sphere.
        radius: f64,
    },
}

impl Default for MorphTargetMode {
    fn default() -> Self {
        Self::Sphere
    }
}

/// Build morph-target positions and normals for the given base positions.
///
/// Output index `i` corresponds exactly to base index `i`; vertices are
/// identified solely by index, never by re-deriving geometry. The inverse
/// plane mapping goes through the same [`PlaneDomain`] that generated the
/// grid, so the two directions cannot drift apart.
pub(crate) fn build_morph_targets(
    base_positions: &[DVec3],
    domain: &PlaneDomain,
    mode: MorphTargetMode,
) -> (Vec<DVec3>, Vec<DVec3>) {
    match mode {
        MorphTargetMode::Sphere => sphere_targets(base_positions, domain),
        MorphTargetMode::Scatter { seed, radius } => scatter_targets(base_positions, seed, radius),
    }
}

fn sphere_targets(base_positions: &[DVec3], domain: &PlaneDomain) -> (Vec<DVec3>, Vec<DVec3>) {
    let mut positions = Vec::with_capacity(base_positions.len());
    let mut normals = Vec::with_capacity(base_positions.len());

    for base in base_positions {
        let coord = domain.to_geo(base.x, base.y);
        let target = to_sphere(coord);
        positions.push(target);
        normals.push(sphere_normal(target));
    }

    (positions, normals)
}

fn scatter_targets(base_positions: &[DVec3], seed: u64, radius: f64) -> (Vec<DVec3>, Vec<DVec3>) {
    tracing::warn!(
        seed,
        radius,
        "scatter morph targets: positional correspondence with the map is lost"
    );

    let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
    let mut positions = Vec::with_capacity(base_positions.len());
    let mut normals = Vec::with_capacity(base_positions.len());

    for _ in base_positions {
        let target = random_point_in_sphere(&mut rng) * radius;
        positions.push(target);
        normals.push(sphere_normal(target));
    }

    (positions, normals)
}

/// Uniform point inside the unit ball via rejection sampling.
fn random_point_in_sphere(rng: &mut Xoshiro256StarStar) -> DVec3 {
    loop {
        let p = DVec3::new(
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
        );
        if p.length_squared() <= 1.0 {
            return p;
        }
    }
}
