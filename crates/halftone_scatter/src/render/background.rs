//! The background context: configuration epoch ownership and the render cache.
use rand::Rng;
use tracing::info;

use crate::config::BackgroundConfig;
use crate::error::Result;
use crate::layout;
use crate::render::sampler::GridSampler;
use crate::surface::{Pixmap, Rgba, Surface};
use crate::zone::Zone;

/// A procedural halftone background with a render-once/blit-many cache.
///
/// Owns the current zone configuration and the offscreen cache; both live
/// from one [`Background::init`] to the next, so separate instances can be
/// rendered side by side without sharing state. `init` and `draw` are
/// synchronous and must not be interleaved by the host.
pub struct Background {
    config: BackgroundConfig,
    zones: Vec<Zone>,
    cache: Option<Pixmap>,
}

impl Background {
    /// Creates a background, validating the configuration first.
    pub fn try_new(config: BackgroundConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            zones: Vec::new(),
            cache: None,
        })
    }

    /// Creates a background without validating the configuration.
    pub fn new(config: BackgroundConfig) -> Self {
        debug_assert!(config.validate().is_ok());
        Self {
            config,
            zones: Vec::new(),
            cache: None,
        }
    }

    pub fn config(&self) -> &BackgroundConfig {
        &self.config
    }

    /// The current zone configuration, decorations first. Empty before the
    /// first build.
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// The populated render cache, if a configuration has been built.
    pub fn cache(&self) -> Option<&Pixmap> {
        self.cache.as_ref()
    }

    /// (Re)build the zone configuration and rasterize it into the cache.
    ///
    /// Discards all prior state unconditionally. The cache buffer is reused
    /// when the dimensions match and reallocated otherwise.
    pub fn init(&mut self, width: u32, height: u32, rng: &mut dyn Rng) {
        let extent = glam::Vec2::new(width as f32, height as f32);
        self.zones = layout::build_zones(extent.into(), &self.config, rng);

        let mut cache = match self.cache.take() {
            Some(mut existing) if existing.width() == width && existing.height() == height => {
                existing.clear(Rgba::TRANSPARENT);
                existing
            }
            _ => Pixmap::new(width, height),
        };

        GridSampler::new(&self.zones, &self.config).rasterize(&mut cache);
        self.cache = Some(cache);

        info!(
            "Initialized {width}x{height} background with {} zone(s).",
            self.zones.len()
        );
    }

    /// Blit the cached background onto `surface`.
    ///
    /// Rebuilds transparently when called before any [`Background::init`] or
    /// after the surface dimensions changed; every other call is a single
    /// full-buffer copy.
    pub fn draw(&mut self, surface: &mut impl Surface, rng: &mut dyn Rng) {
        let (width, height) = (surface.width(), surface.height());
        let stale = !matches!(
            self.cache,
            Some(ref cache) if cache.width() == width && cache.height() == height
        ) || self.zones.is_empty();
        if stale {
            self.init(width, height, rng);
        }

        if let Some(cache) = &self.cache {
            surface.blit(cache, 0, 0);
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::new(BackgroundConfig::default())
    }
}
