//! Zones: plane regions paired with a pattern type and a gradient field.
//!
//! A [`Zone`] combines a [`ZonePredicate`] (point membership), a
//! [`crate::field::GradientField`] (per-point size scale) and a
//! [`PatternType`]. Zones are plain data: membership is a pure function
//! dispatched on the predicate variant, so zones can be serialized and
//! tested in isolation.
use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::field::GradientField;

/// The closed set of glyph shapes a zone can be filled with.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternType {
    /// Filled disk.
    Dot,
    /// Equilateral triangle.
    Triangle,
    /// 5-point star with alternating outer/inner radii.
    Star,
    /// 4-lobe concave blob from quadratic curves meeting at the center.
    Blob,
    /// Parametric heart curve.
    Heart,
    /// Single diagonal line; stroke width scales with glyph size.
    Slash,
}

impl PatternType {
    /// All pattern types, for uniform random selection.
    pub const ALL: [PatternType; 6] = [
        PatternType::Dot,
        PatternType::Triangle,
        PatternType::Star,
        PatternType::Blob,
        PatternType::Heart,
        PatternType::Slash,
    ];
}

/// Point-membership test for a zone, over plain numeric parameters.
///
/// The half-plane and band variants classify against the projection
/// `V = a * x + b * y` of the implicit boundary line `a * x + b * y + c = 0`
/// (so a threshold of `-c` puts the boundary itself on the line). Boundary
/// points belong to the lower side: `above` means strictly `V > threshold`,
/// its complement is `V <= threshold`, and a band is `lower < V <= upper`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZonePredicate {
    /// One side of the line `V = threshold`.
    HalfPlane {
        a: f32,
        b: f32,
        threshold: f32,
        /// `true` selects `V > threshold`, `false` selects `V <= threshold`.
        above: bool,
    },
    /// The strip between two parallel lines: `lower < V <= upper`.
    Band {
        a: f32,
        b: f32,
        lower: f32,
        upper: f32,
    },
    /// Euclidean disk of `radius` around `(cx, cy)`.
    Circle { cx: f32, cy: f32, radius: f32 },
    /// Manhattan ball of `half_width` around `(cx, cy)`.
    Diamond { cx: f32, cy: f32, half_width: f32 },
}

impl ZonePredicate {
    /// Test whether `p` lies inside the region. Pure.
    pub fn contains(&self, p: Vec2) -> bool {
        match *self {
            ZonePredicate::HalfPlane {
                a,
                b,
                threshold,
                above,
            } => {
                let v = a * p.x + b * p.y;
                if above {
                    v > threshold
                } else {
                    v <= threshold
                }
            }
            ZonePredicate::Band { a, b, lower, upper } => {
                let v = a * p.x + b * p.y;
                lower < v && v <= upper
            }
            ZonePredicate::Circle { cx, cy, radius } => {
                let dx = p.x - cx;
                let dy = p.y - cy;
                dx * dx + dy * dy < radius * radius
            }
            ZonePredicate::Diamond { cx, cy, half_width } => {
                (p.x - cx).abs() + (p.y - cy).abs() < half_width
            }
        }
    }
}

/// Circle used for decoration overlap tests only, never for membership.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingCircle {
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
}

impl BoundingCircle {
    pub fn new(cx: f32, cy: f32, radius: f32) -> Self {
        Self { cx, cy, radius }
    }

    /// Whether this circle and `other` come closer than `padding` units
    /// of clearance.
    pub fn overlaps(&self, other: &BoundingCircle, padding: f32) -> bool {
        let dx = self.cx - other.cx;
        let dy = self.cy - other.cy;
        let dist = (dx * dx + dy * dy).sqrt();
        dist < self.radius + other.radius + padding
    }
}

/// A plane region paired with a pattern type and a size-gradient field.
///
/// Immutable once created. `bounding` is present only for decorative zones.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone {
    pub predicate: ZonePredicate,
    pub field: GradientField,
    pub pattern: PatternType,
    pub bounding: Option<BoundingCircle>,
}

impl Zone {
    /// Create a base-layer zone (no bounding circle).
    pub fn base(predicate: ZonePredicate, field: GradientField, pattern: PatternType) -> Self {
        Self {
            predicate,
            field,
            pattern,
            bounding: None,
        }
    }

    /// Create a decorative zone with its bounding circle for overlap tests.
    pub fn decoration(
        predicate: ZonePredicate,
        field: GradientField,
        pattern: PatternType,
        bounding: BoundingCircle,
    ) -> Self {
        Self {
            predicate,
            field,
            pattern,
            bounding: Some(bounding),
        }
    }

    /// Whether `p` lies inside this zone.
    pub fn contains(&self, p: Vec2) -> bool {
        self.predicate.contains(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_plane_sides_partition_the_plane() {
        // Horizontal line y = 300 on an 800x600 surface: a = 0, b = 800,
        // threshold = 800 * 300.
        let upper = ZonePredicate::HalfPlane {
            a: 0.0,
            b: 800.0,
            threshold: 240_000.0,
            above: true,
        };
        let lower = ZonePredicate::HalfPlane {
            a: 0.0,
            b: 800.0,
            threshold: 240_000.0,
            above: false,
        };

        for &(x, y) in &[(0.0, 0.0), (400.0, 100.0), (799.0, 299.0), (400.0, 500.0)] {
            let p = Vec2::new(x, y);
            assert_ne!(upper.contains(p), lower.contains(p), "point ({x}, {y})");
        }

        // The boundary itself belongs to the lower side.
        let on_line = Vec2::new(123.0, 300.0);
        assert!(!upper.contains(on_line));
        assert!(lower.contains(on_line));
    }

    #[test]
    fn band_is_half_open() {
        let band = ZonePredicate::Band {
            a: 0.0,
            b: 1.0,
            lower: 100.0,
            upper: 200.0,
        };
        assert!(band.contains(Vec2::new(0.0, 150.0)));
        assert!(band.contains(Vec2::new(0.0, 200.0)));
        assert!(!band.contains(Vec2::new(0.0, 100.0)));
        assert!(!band.contains(Vec2::new(0.0, 250.0)));
    }

    #[test]
    fn circle_membership_is_strict() {
        let circle = ZonePredicate::Circle {
            cx: 400.0,
            cy: 300.0,
            radius: 200.0,
        };
        assert!(circle.contains(Vec2::new(400.0, 300.0)));
        assert!(circle.contains(Vec2::new(550.0, 300.0)));
        assert!(!circle.contains(Vec2::new(600.0, 300.0)));
        assert!(!circle.contains(Vec2::new(700.0, 300.0)));
    }

    #[test]
    fn diamond_uses_manhattan_distance() {
        let diamond = ZonePredicate::Diamond {
            cx: 0.0,
            cy: 0.0,
            half_width: 100.0,
        };
        assert!(diamond.contains(Vec2::new(40.0, 40.0)));
        assert!(!diamond.contains(Vec2::new(60.0, 60.0)));
        assert!(!diamond.contains(Vec2::new(100.0, 0.0)));
    }

    #[test]
    fn bounding_circles_respect_padding() {
        let a = BoundingCircle::new(400.0, 300.0, 200.0);
        let b = BoundingCircle::new(420.0, 300.0, 200.0);
        // distance 20 < 200 + 200 + 20
        assert!(a.overlaps(&b, 20.0));

        let far = BoundingCircle::new(840.0, 300.0, 20.0);
        // distance 440 == 200 + 20 + 20 exactly: touching is allowed
        assert!(!a.overlaps(&far, 220.0));
        assert!(!a.overlaps(&far, 20.0));
    }

    #[test]
    fn decoration_constructor_keeps_bounding_circle() {
        let zone = Zone::decoration(
            ZonePredicate::Circle {
                cx: 10.0,
                cy: 20.0,
                radius: 150.0,
            },
            crate::field::GradientField::new(1.0, 800.0),
            PatternType::Star,
            BoundingCircle::new(10.0, 20.0, 150.0),
        );
        assert!(zone.bounding.is_some());
        assert!(zone.contains(Vec2::new(10.0, 20.0)));

        let base = Zone::base(
            zone.predicate,
            zone.field,
            PatternType::Dot,
        );
        assert!(base.bounding.is_none());
    }
}
