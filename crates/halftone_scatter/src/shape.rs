//! Glyph path constructors.
//!
//! Each constructor is a pure function of its numeric parameters and returns
//! a [`Path`] centered on the grid point. Sizes are diameters: every glyph
//! fits a `size`-wide box around its center.
use glam::Vec2;

use crate::zone::PatternType;

/// Circle approximation constant for cubic Bezier quadrants.
const KAPPA: f32 = 0.552_284_8;

/// Stroke width of the slash glyph at zero / full size progress.
const SLASH_WIDTH_MIN: f32 = 1.0;
const SLASH_WIDTH_RANGE: f32 = 1.5;

/// A path element in absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathEl {
    MoveTo(Vec2),
    LineTo(Vec2),
    /// Quadratic Bezier: control point, end point.
    QuadTo(Vec2, Vec2),
    /// Cubic Bezier: two control points, end point.
    CubicTo(Vec2, Vec2, Vec2),
    Close,
}

/// A sequence of path elements forming one or more subpaths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    pub elements: Vec<PathEl>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Vec2) -> &mut Self {
        self.elements.push(PathEl::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Vec2) -> &mut Self {
        self.elements.push(PathEl::LineTo(p));
        self
    }

    pub fn quad_to(&mut self, ctrl: Vec2, p: Vec2) -> &mut Self {
        self.elements.push(PathEl::QuadTo(ctrl, p));
        self
    }

    pub fn cubic_to(&mut self, c1: Vec2, c2: Vec2, p: Vec2) -> &mut Self {
        self.elements.push(PathEl::CubicTo(c1, c2, p));
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.elements.push(PathEl::Close);
        self
    }

    /// Closed circle from four cubic quadrants.
    pub fn circle(center: Vec2, radius: f32) -> Self {
        let k = KAPPA * radius;
        let (cx, cy) = (center.x, center.y);
        let mut path = Path::new();
        path.move_to(Vec2::new(cx + radius, cy))
            .cubic_to(
                Vec2::new(cx + radius, cy + k),
                Vec2::new(cx + k, cy + radius),
                Vec2::new(cx, cy + radius),
            )
            .cubic_to(
                Vec2::new(cx - k, cy + radius),
                Vec2::new(cx - radius, cy + k),
                Vec2::new(cx - radius, cy),
            )
            .cubic_to(
                Vec2::new(cx - radius, cy - k),
                Vec2::new(cx - k, cy - radius),
                Vec2::new(cx, cy - radius),
            )
            .cubic_to(
                Vec2::new(cx + k, cy - radius),
                Vec2::new(cx + radius, cy - k),
                Vec2::new(cx + radius, cy),
            )
            .close();
        path
    }
}

/// How a glyph path is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GlyphStyle {
    Fill,
    Stroke { width: f32 },
}

/// A glyph ready for rasterization: a path and its paint style.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub path: Path,
    pub style: GlyphStyle,
}

/// Build the glyph for `pattern` at `center` with the given `size`.
///
/// `width_progress` in `[0, 1]` positions `size` within the configured glyph
/// size range; only the slash stroke width depends on it.
pub fn glyph(pattern: PatternType, center: Vec2, size: f32, width_progress: f32) -> Glyph {
    match pattern {
        PatternType::Dot => fill(dot(center, size)),
        PatternType::Triangle => fill(triangle(center, size)),
        PatternType::Star => fill(star(center, size)),
        PatternType::Blob => fill(blob(center, size)),
        PatternType::Heart => fill(heart(center, size)),
        PatternType::Slash => Glyph {
            path: slash(center, size),
            style: GlyphStyle::Stroke {
                width: slash_width(width_progress),
            },
        },
    }
}

fn fill(path: Path) -> Glyph {
    Glyph {
        path,
        style: GlyphStyle::Fill,
    }
}

/// Filled disk of radius `size / 4`.
pub fn dot(center: Vec2, size: f32) -> Path {
    Path::circle(center, size / 4.0)
}

/// Equilateral triangle pointing up, outer radius `size / 2`.
pub fn triangle(center: Vec2, size: f32) -> Path {
    let r = size / 2.0;
    let (cx, cy) = (center.x, center.y);
    let mut path = Path::new();
    path.move_to(Vec2::new(cx, cy - r))
        .line_to(Vec2::new(cx + r * 0.866, cy + r * 0.5))
        .line_to(Vec2::new(cx - r * 0.866, cy + r * 0.5))
        .close();
    path
}

/// 5-point star alternating between outer radius `size / 2` and half of it.
pub fn star(center: Vec2, size: f32) -> Path {
    let outer = size / 2.0;
    let inner = outer / 2.0;
    let mut path = Path::new();
    for i in 0..5 {
        let a_outer = (18.0 + i as f32 * 72.0).to_radians();
        let a_inner = (54.0 + i as f32 * 72.0).to_radians();
        let p_outer = Vec2::new(
            center.x + a_outer.cos() * outer,
            center.y - a_outer.sin() * outer,
        );
        let p_inner = Vec2::new(
            center.x + a_inner.cos() * inner,
            center.y - a_inner.sin() * inner,
        );
        if i == 0 {
            path.move_to(p_outer);
        } else {
            path.line_to(p_outer);
        }
        path.line_to(p_inner);
    }
    path.close();
    path
}

/// 4-lobe concave blob: four quadratics whose control points all sit at the
/// center, pulling each edge inward.
pub fn blob(center: Vec2, size: f32) -> Path {
    let r = size / 2.0;
    let (cx, cy) = (center.x, center.y);
    let mut path = Path::new();
    path.move_to(Vec2::new(cx, cy - r))
        .quad_to(center, Vec2::new(cx + r, cy))
        .quad_to(center, Vec2::new(cx, cy + r))
        .quad_to(center, Vec2::new(cx - r, cy))
        .quad_to(center, Vec2::new(cx, cy - r))
        .close();
    path
}

/// Heart built from two mirrored cubics, dimple at the top.
pub fn heart(center: Vec2, size: f32) -> Path {
    let r = size / 2.0;
    let (cx, cy) = (center.x, center.y);
    let mut path = Path::new();
    path.move_to(Vec2::new(cx, cy + r / 2.0))
        .cubic_to(
            Vec2::new(cx + r, cy - r / 2.0),
            Vec2::new(cx + r, cy - r),
            Vec2::new(cx, cy - r / 2.0),
        )
        .cubic_to(
            Vec2::new(cx - r, cy - r),
            Vec2::new(cx - r, cy - r / 2.0),
            Vec2::new(cx, cy + r / 2.0),
        )
        .close();
    path
}

/// Diagonal line from lower-left to upper-right of the glyph box.
pub fn slash(center: Vec2, size: f32) -> Path {
    let r = size / 2.0;
    let (cx, cy) = (center.x, center.y);
    let mut path = Path::new();
    path.move_to(Vec2::new(cx - r, cy + r))
        .line_to(Vec2::new(cx + r, cy - r));
    path
}

/// Stroke width of the slash glyph: 1.0 at the smallest size up to 2.5 at
/// the largest.
pub fn slash_width(width_progress: f32) -> f32 {
    SLASH_WIDTH_MIN + width_progress.clamp(0.0, 1.0) * SLASH_WIDTH_RANGE
}
