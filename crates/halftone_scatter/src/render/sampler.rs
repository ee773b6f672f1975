//! Fixed-spacing grid walk resolving zones and rasterizing glyphs.
use glam::Vec2;
use tracing::debug;

use crate::config::BackgroundConfig;
use crate::shape::{self, GlyphStyle};
use crate::surface::{Paint, Rgba, Surface};
use crate::zone::{Zone, ZonePredicate};

/// Opacity lost between the normal size limit and the maximum size.
const OVERSIZE_FADE: f32 = 0.6;

/// Stroke width for debug outlines.
const OUTLINE_WIDTH: f32 = 3.0;
const OUTLINE_COLOR: Rgba = Rgba::new(255, 0, 0, 255);

/// Walks the grid once per configuration, drawing glyphs into a surface.
///
/// Zone resolution is first-match over the prioritized list, so a point is
/// never evaluated against zones behind the one that claimed it.
pub struct GridSampler<'a> {
    zones: &'a [Zone],
    config: &'a BackgroundConfig,
}

impl<'a> GridSampler<'a> {
    pub fn new(zones: &'a [Zone], config: &'a BackgroundConfig) -> Self {
        Self { zones, config }
    }

    /// First zone containing `p`, if any.
    pub fn resolve(&self, p: Vec2) -> Option<&'a Zone> {
        self.zones.iter().find(|zone| zone.contains(p))
    }

    /// Map a gradient scale in `[0, 1]` to a glyph size.
    pub fn glyph_size(&self, scale: f32) -> f32 {
        self.config.min_glyph_size
            + scale * (self.config.max_glyph_size - self.config.min_glyph_size)
    }

    /// Full opacity up to the normal size limit, then a linear falloff that
    /// bottoms out at 40% for the largest glyphs.
    pub fn opacity(&self, size: f32) -> f32 {
        let limit = self.config.normal_size_limit;
        if size <= limit {
            return 1.0;
        }
        let extra = size - limit;
        let max_extra = self.config.max_glyph_size - limit;
        1.0 - (extra / max_extra).clamp(0.0, 1.0) * OVERSIZE_FADE
    }

    /// Rasterize every grid point into `surface`, row-major.
    pub fn rasterize(&self, surface: &mut dyn Surface) {
        let spacing = self.config.grid_spacing;
        let cols = (surface.width() as f32 / spacing).floor() as u32;
        let rows = (surface.height() as f32 / spacing).floor() as u32;
        let paint = Paint::new(self.config.glyph_color);

        let mut drawn = 0usize;
        for row in 0..=rows {
            for col in 0..=cols {
                let p = Vec2::new(col as f32 * spacing, row as f32 * spacing);
                let Some(zone) = self.resolve(p) else {
                    continue;
                };

                let scale = zone.field.eval(p);
                let size = self.glyph_size(scale);
                let glyph = shape::glyph(zone.pattern, p, size, self.config.size_progress(size));
                let paint = paint.with_opacity(self.opacity(size));
                match glyph.style {
                    GlyphStyle::Fill => surface.fill_path(&glyph.path, paint),
                    GlyphStyle::Stroke { width } => surface.stroke_path(&glyph.path, width, paint),
                }
                drawn += 1;
            }
        }
        debug!("Rasterized {drawn} glyphs on a {cols}x{rows} grid.");

        if self.config.debug_outlines {
            self.stroke_outlines(surface);
        }
    }

    /// Stroke decoration outlines and base boundary lines for debugging.
    fn stroke_outlines(&self, surface: &mut dyn Surface) {
        let paint = Paint::new(OUTLINE_COLOR);
        let extent = Vec2::new(surface.width() as f32, surface.height() as f32);

        for zone in self.zones {
            match zone.predicate {
                ZonePredicate::Circle { cx, cy, radius } => {
                    let path = shape::Path::circle(Vec2::new(cx, cy), radius);
                    surface.stroke_path(&path, OUTLINE_WIDTH, paint);
                }
                ZonePredicate::Diamond { cx, cy, half_width } => {
                    let mut path = shape::Path::new();
                    path.move_to(Vec2::new(cx, cy - half_width))
                        .line_to(Vec2::new(cx + half_width, cy))
                        .line_to(Vec2::new(cx, cy + half_width))
                        .line_to(Vec2::new(cx - half_width, cy))
                        .close();
                    surface.stroke_path(&path, OUTLINE_WIDTH, paint);
                }
                ZonePredicate::HalfPlane {
                    a, b, threshold, above,
                } => {
                    // Each boundary is shared by two half-planes; stroke it
                    // once, from the upper side.
                    if above {
                        stroke_boundary(surface, extent, a, b, threshold, paint);
                    }
                }
                ZonePredicate::Band { a, b, lower, upper } => {
                    stroke_boundary(surface, extent, a, b, lower, paint);
                    stroke_boundary(surface, extent, a, b, upper, paint);
                }
            }
        }
    }
}

/// Stroke the line `a * x + b * y = threshold` across the surface.
fn stroke_boundary(
    surface: &mut dyn Surface,
    extent: Vec2,
    a: f32,
    b: f32,
    threshold: f32,
    paint: Paint,
) {
    let mut points: Vec<Vec2> = Vec::with_capacity(2);
    if b.abs() > f32::EPSILON {
        points.push(Vec2::new(0.0, threshold / b));
        points.push(Vec2::new(extent.x, (threshold - a * extent.x) / b));
    } else if a.abs() > f32::EPSILON {
        points.push(Vec2::new(threshold / a, 0.0));
        points.push(Vec2::new((threshold - b * extent.y) / a, extent.y));
    }

    if let [p1, p2] = points[..] {
        let mut path = shape::Path::new();
        path.move_to(p1).line_to(p2);
        surface.stroke_path(&path, OUTLINE_WIDTH, paint);
    }
}
