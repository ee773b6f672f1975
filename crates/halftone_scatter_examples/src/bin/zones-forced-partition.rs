use anyhow::Context;
use glam::Vec2;
use halftone_scatter::prelude::*;
use halftone_scatter_examples::{init_tracing, save_pixmap_png};

/// Rasterize a hand-built zone list: a horizontal 2-way base split with a
/// high-priority circle decoration overriding it in the middle.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let (width, height) = (800u32, 600u32);
    let field = GradientField::new(0.6, width as f32);

    // Boundary y = 300: membership classifies V = b * y against -c.
    let threshold = width as f32 * 300.0;
    let zones = vec![
        Zone::decoration(
            ZonePredicate::Circle {
                cx: 400.0,
                cy: 300.0,
                radius: 180.0,
            },
            GradientField::new(2.2, width as f32),
            PatternType::Heart,
            BoundingCircle::new(400.0, 300.0, 180.0),
        ),
        Zone::base(
            ZonePredicate::HalfPlane {
                a: 0.0,
                b: width as f32,
                threshold,
                above: false,
            },
            field,
            PatternType::Star,
        ),
        Zone::base(
            ZonePredicate::HalfPlane {
                a: 0.0,
                b: width as f32,
                threshold,
                above: true,
            },
            field,
            PatternType::Slash,
        ),
    ];

    let config = BackgroundConfig::default()
        .with_glyph_color(Rgba::new(60, 60, 60, 96))
        .with_debug_outlines(true);
    let sampler = GridSampler::new(&zones, &config);

    // The decoration must win everywhere its predicate holds.
    let inside = sampler
        .resolve(Vec2::new(400.0, 300.0))
        .context("no zone matched the decoration center")?;
    anyhow::ensure!(inside.pattern == PatternType::Heart, "priority violated");

    let mut surface = Pixmap::new(width, height);
    surface.clear(Rgba::WHITE);
    sampler.rasterize(&mut surface);

    save_pixmap_png(&surface, "zones-forced-partition.png")
}
