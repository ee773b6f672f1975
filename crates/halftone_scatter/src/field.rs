//! Directional gradient fields controlling glyph size across the surface.
use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fraction of the surface width covered by one gradient period.
const PERIOD_WIDTH_FACTOR: f32 = 0.8;

/// A linear sine-wave field mapping positions to a scale in `[0, 1]`.
///
/// The position is projected onto the unit direction `(cos angle, sin angle)`
/// and the projected distance is remapped through `(sin(d * k) + 1) / 2`,
/// where the spatial frequency `k = 1 / (0.8 * width)` lets roughly one
/// period span the surface width. The output is bounded by construction,
/// no clamping involved.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientField {
    /// Direction of the gradient in radians.
    pub angle: f32,
    /// Spatial frequency applied to the projected distance.
    pub frequency: f32,
}

impl GradientField {
    /// Create a field for the given direction over a surface of `width` units.
    pub fn new(angle: f32, width: f32) -> Self {
        debug_assert!(width > 0.0, "surface width must be > 0");
        Self {
            angle,
            frequency: 1.0 / (PERIOD_WIDTH_FACTOR * width),
        }
    }

    /// Evaluate the field at `p`. Pure; always in `[0, 1]`.
    pub fn eval(&self, p: Vec2) -> f32 {
        let d = p.x * self.angle.cos() + p.y * self.angle.sin();
        ((d * self.frequency).sin() + 1.0) * 0.5
    }
}
