//! Zone-layout generation: the base partition and the decorative overlay.
//!
//! [`build_zones`] produces the prioritized zone list for one configuration
//! epoch: decorations first (highest priority), then the 2- or 3-region base
//! partition that covers the rest of the plane.
use mint::Vector2;
use rand::Rng;
use tracing::info;

pub mod base;
pub mod decoration;

pub use decoration::{
    try_place, CenterSampling, DecorationCandidate, DecorationShape, InnerMarginSampling,
    RetryBudget,
};

use crate::config::BackgroundConfig;
use crate::zone::Zone;

/// Build the full zone list for a surface of the given extent.
///
/// Decorative zones come first so they visually override the base partition;
/// the base zones together cover every point of the plane.
pub fn build_zones(
    extent: Vector2<f32>,
    config: &BackgroundConfig,
    rng: &mut dyn Rng,
) -> Vec<Zone> {
    let extent = glam::Vec2::from(extent);

    let base = base::build_base_zones(extent, config, rng);
    let decorations = decoration::build_decorations(extent, config, rng);

    info!(
        "Built zone layout: {} decoration(s), {} base region(s).",
        decorations.len(),
        base.len()
    );

    let mut zones = decorations;
    zones.extend(base);
    zones
}

/// Generate a random float in the range [0, 1].
#[inline]
pub(crate) fn rand01(rng: &mut dyn Rng) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}

/// Generate a random float in the range [min, max).
#[inline]
pub(crate) fn rand_range(rng: &mut dyn Rng, min: f32, max: f32) -> f32 {
    min + rand01(rng) * (max - min)
}

/// Pick a uniform random index below `len`.
#[inline]
pub(crate) fn rand_index(rng: &mut dyn Rng, len: usize) -> usize {
    debug_assert!(len > 0);
    ((rand01(rng) * len as f32) as usize).min(len - 1)
}
