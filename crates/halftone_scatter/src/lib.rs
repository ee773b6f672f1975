#![forbid(unsafe_code)]
//! halftone_scatter: procedural halftone backgrounds from zone partitioning,
//! gradient fields and cached grid rasterization.
//!
//! Modules:
//! - field: directional sine gradients mapping positions to size scales
//! - zone: predicate variants, pattern types and the zone data model
//! - layout: base partition and decorative overlays (bounded rejection sampling)
//! - shape: glyph path constructors
//! - surface: the drawing-surface interface and a software pixmap
//! - render: grid sampler and the cached background context
//!
//! For examples and docs, see README and docs.rs.
pub mod config;
pub mod error;
pub mod field;
pub mod layout;
pub mod render;
pub mod shape;
pub mod surface;
pub mod zone;

/// Convenient re-exports for common types. Import with `use halftone_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::config::BackgroundConfig;
    pub use crate::error::{Error, Result};
    pub use crate::field::GradientField;
    pub use crate::layout::{
        build_zones, try_place, CenterSampling, DecorationCandidate, DecorationShape,
        InnerMarginSampling, RetryBudget,
    };
    pub use crate::render::{Background, GridSampler};
    pub use crate::shape::{glyph, Glyph, GlyphStyle, Path, PathEl};
    pub use crate::surface::{Paint, Pixmap, Rgba, Surface};
    pub use crate::zone::{BoundingCircle, PatternType, Zone, ZonePredicate};
}
