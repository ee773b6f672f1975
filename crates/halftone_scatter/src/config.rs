//! Configuration for building a halftone background.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::surface::Rgba;

/// Tunables for zone generation and grid rasterization.
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundConfig {
    /// Distance between grid points in surface units.
    pub grid_spacing: f32,
    /// Smallest glyph size mapped from a gradient scale of 0.
    pub min_glyph_size: f32,
    /// Largest glyph size mapped from a gradient scale of 1.
    pub max_glyph_size: f32,
    /// Size above which glyph opacity starts falling off.
    pub normal_size_limit: f32,
    /// Fewest decorative zones to attempt per build.
    pub min_decorations: usize,
    /// Most decorative zones to attempt per build.
    pub max_decorations: usize,
    /// Required clearance between decoration bounding circles.
    pub decoration_padding: f32,
    /// Placement attempts shared across all decorations in one build.
    pub retry_budget: usize,
    /// Probability of a 3-region base split (vs. 2-region).
    pub three_way_probability: f32,
    /// Paint used for every glyph.
    pub glyph_color: Rgba,
    /// Stroke zone boundaries and decoration outlines into the cache.
    pub debug_outlines: bool,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            grid_spacing: 26.0,
            min_glyph_size: 6.0,
            max_glyph_size: 40.0,
            normal_size_limit: 28.0,
            min_decorations: 1,
            max_decorations: 2,
            decoration_padding: 20.0,
            retry_budget: 50,
            three_way_probability: 0.6,
            glyph_color: Rgba::new(72, 72, 72, 13),
            debug_outlines: false,
        }
    }
}

impl BackgroundConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the grid spacing.
    pub fn with_grid_spacing(mut self, grid_spacing: f32) -> Self {
        self.grid_spacing = grid_spacing;
        self
    }

    /// Sets the glyph size range.
    pub fn with_glyph_sizes(mut self, min: f32, max: f32) -> Self {
        self.min_glyph_size = min;
        self.max_glyph_size = max;
        self
    }

    /// Sets the size above which opacity falls off.
    pub fn with_normal_size_limit(mut self, limit: f32) -> Self {
        self.normal_size_limit = limit;
        self
    }

    /// Sets the decoration count range.
    pub fn with_decorations(mut self, min: usize, max: usize) -> Self {
        self.min_decorations = min;
        self.max_decorations = max;
        self
    }

    /// Sets the clearance between decoration bounding circles.
    pub fn with_decoration_padding(mut self, padding: f32) -> Self {
        self.decoration_padding = padding;
        self
    }

    /// Sets the shared placement retry budget.
    pub fn with_retry_budget(mut self, budget: usize) -> Self {
        self.retry_budget = budget;
        self
    }

    /// Sets the probability of a 3-region base split.
    pub fn with_three_way_probability(mut self, probability: f32) -> Self {
        self.three_way_probability = probability;
        self
    }

    /// Sets the glyph paint color.
    pub fn with_glyph_color(mut self, color: Rgba) -> Self {
        self.glyph_color = color;
        self
    }

    /// Enables stroking zone boundaries into the cache.
    pub fn with_debug_outlines(mut self, enabled: bool) -> Self {
        self.debug_outlines = enabled;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.grid_spacing.is_finite() || self.grid_spacing <= 0.0 {
            return Err(Error::InvalidConfig("grid_spacing must be > 0".into()));
        }
        if self.min_glyph_size < 0.0 || self.max_glyph_size <= self.min_glyph_size {
            return Err(Error::InvalidConfig(
                "glyph sizes must satisfy 0 <= min < max".into(),
            ));
        }
        if self.normal_size_limit >= self.max_glyph_size {
            return Err(Error::InvalidConfig(
                "normal_size_limit must be < max_glyph_size".into(),
            ));
        }
        if self.min_decorations > self.max_decorations {
            return Err(Error::InvalidConfig(
                "min_decorations must be <= max_decorations".into(),
            ));
        }
        if self.decoration_padding < 0.0 {
            return Err(Error::InvalidConfig(
                "decoration_padding must be >= 0".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.three_way_probability) {
            return Err(Error::InvalidConfig(
                "three_way_probability must be in [0, 1]".into(),
            ));
        }

        Ok(())
    }

    /// Position of `size` within the glyph size range, clamped to `[0, 1]`.
    pub(crate) fn size_progress(&self, size: f32) -> f32 {
        ((size - self.min_glyph_size) / (self.max_glyph_size - self.min_glyph_size))
            .clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration_is_valid() {
        assert!(BackgroundConfig::default().validate().is_ok());
    }

    #[test]
    fn builders_set_fields() {
        let config = BackgroundConfig::new()
            .with_grid_spacing(13.0)
            .with_glyph_sizes(4.0, 32.0)
            .with_normal_size_limit(24.0)
            .with_decorations(0, 3)
            .with_decoration_padding(10.0)
            .with_retry_budget(25)
            .with_three_way_probability(0.0)
            .with_debug_outlines(true);

        assert_eq!(config.grid_spacing, 13.0);
        assert_eq!(config.min_glyph_size, 4.0);
        assert_eq!(config.max_glyph_size, 32.0);
        assert_eq!(config.normal_size_limit, 24.0);
        assert_eq!((config.min_decorations, config.max_decorations), (0, 3));
        assert_eq!(config.decoration_padding, 10.0);
        assert_eq!(config.retry_budget, 25);
        assert_eq!(config.three_way_probability, 0.0);
        assert!(config.debug_outlines);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert!(BackgroundConfig::new()
            .with_grid_spacing(0.0)
            .validate()
            .is_err());
        assert!(BackgroundConfig::new()
            .with_glyph_sizes(10.0, 10.0)
            .validate()
            .is_err());
        assert!(BackgroundConfig::new()
            .with_normal_size_limit(40.0)
            .validate()
            .is_err());
        assert!(BackgroundConfig::new()
            .with_decorations(3, 1)
            .validate()
            .is_err());
        assert!(BackgroundConfig::new()
            .with_three_way_probability(1.5)
            .validate()
            .is_err());
    }

    #[test]
    fn size_progress_is_clamped() {
        let config = BackgroundConfig::default();
        assert_eq!(config.size_progress(6.0), 0.0);
        assert_eq!(config.size_progress(40.0), 1.0);
        assert_eq!(config.size_progress(100.0), 1.0);
        assert!((config.size_progress(23.0) - 0.5).abs() < 1e-6);
    }
}
