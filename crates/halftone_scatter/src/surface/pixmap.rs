//! Software RGBA8 surface with scanline path filling.
use glam::Vec2;

use crate::shape::{Path, PathEl};
use crate::surface::{Paint, Rgba, Surface};

/// Line segments used to flatten one quadratic or cubic curve.
const CURVE_SEGMENTS: usize = 16;

/// An owned RGBA8 pixel buffer, non-premultiplied, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    /// Create a transparent pixmap.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize) * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw pixel bytes, RGBA in row-major order.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Color of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        debug_assert!(x < self.width && y < self.height);
        let i = self.pixel_index(x, y);
        Rgba::new(
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        )
    }

    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((y * self.width + x) * 4) as usize
    }

    /// Source-over blend of a non-premultiplied color onto one pixel.
    fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba, alpha: u8) {
        if alpha == 0 {
            return;
        }
        let i = self.pixel_index(x, y);
        let sa = alpha as u32;
        let da = self.data[i + 3] as u32;
        let out_a = sa + da * (255 - sa) / 255;
        if out_a == 0 {
            return;
        }
        for ch in 0..3 {
            let sc = [color.r, color.g, color.b][ch] as u32;
            let dc = self.data[i + ch] as u32;
            self.data[i + ch] = ((sc * sa + dc * da * (255 - sa) / 255) / out_a) as u8;
        }
        self.data[i + 3] = out_a as u8;
    }

    /// Fill a flattened polygon with the even-odd rule, sampling at pixel
    /// centers.
    fn fill_polygon(&mut self, points: &[Vec2], paint: Paint) {
        if points.len() < 3 {
            return;
        }
        let alpha = paint.effective_alpha();
        if alpha == 0 {
            return;
        }

        let y_min = points.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
        let y_max = points.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);
        let y_start = (y_min.floor().max(0.0)) as u32;
        let y_end = (y_max.ceil().min(self.height as f32)).max(0.0) as u32;

        let mut crossings: Vec<f32> = Vec::with_capacity(8);
        for y in y_start..y_end {
            let yc = y as f32 + 0.5;
            crossings.clear();
            for i in 0..points.len() {
                let p1 = points[i];
                let p2 = points[(i + 1) % points.len()];
                if (p1.y <= yc) != (p2.y <= yc) {
                    crossings.push(p1.x + (yc - p1.y) * (p2.x - p1.x) / (p2.y - p1.y));
                }
            }
            crossings.sort_by(f32::total_cmp);

            for pair in crossings.chunks_exact(2) {
                let x_start = ((pair[0] - 0.5).ceil().max(0.0)) as u32;
                let x_end = ((pair[1] - 0.5).ceil().min(self.width as f32)).max(0.0) as u32;
                for x in x_start..x_end {
                    self.blend_pixel(x, y, paint.color, alpha);
                }
            }
        }
    }
}

/// Flatten a path into polylines, one per subpath. Curves become
/// fixed-count line segments, so flattening is deterministic.
fn flatten(path: &Path) -> Vec<Vec<Vec2>> {
    let mut subpaths = Vec::new();
    let mut current: Vec<Vec2> = Vec::new();

    for el in &path.elements {
        match *el {
            PathEl::MoveTo(p) => {
                if current.len() > 1 {
                    subpaths.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
                current.push(p);
            }
            PathEl::LineTo(p) => current.push(p),
            PathEl::QuadTo(ctrl, p) => {
                let start = *current.last().unwrap_or(&ctrl);
                for i in 1..=CURVE_SEGMENTS {
                    let t = i as f32 / CURVE_SEGMENTS as f32;
                    let u = 1.0 - t;
                    current.push(start * (u * u) + ctrl * (2.0 * u * t) + p * (t * t));
                }
            }
            PathEl::CubicTo(c1, c2, p) => {
                let start = *current.last().unwrap_or(&c1);
                for i in 1..=CURVE_SEGMENTS {
                    let t = i as f32 / CURVE_SEGMENTS as f32;
                    let u = 1.0 - t;
                    current.push(
                        start * (u * u * u)
                            + c1 * (3.0 * u * u * t)
                            + c2 * (3.0 * u * t * t)
                            + p * (t * t * t),
                    );
                }
            }
            PathEl::Close => {
                if current.len() > 1 {
                    subpaths.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
            }
        }
    }
    if current.len() > 1 {
        subpaths.push(current);
    }
    subpaths
}

impl Surface for Pixmap {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self, color: Rgba) {
        for chunk in self.data.chunks_exact_mut(4) {
            chunk[0] = color.r;
            chunk[1] = color.g;
            chunk[2] = color.b;
            chunk[3] = color.a;
        }
    }

    fn fill_path(&mut self, path: &Path, paint: Paint) {
        // Open subpaths are closed implicitly, matching canvas fill semantics.
        for polygon in flatten(path) {
            self.fill_polygon(&polygon, paint);
        }
    }

    fn stroke_path(&mut self, path: &Path, line_width: f32, paint: Paint) {
        let half = (line_width / 2.0).max(0.0);
        for polyline in flatten(path) {
            for segment in polyline.windows(2) {
                let (p1, p2) = (segment[0], segment[1]);
                let dir = p2 - p1;
                if dir.length_squared() <= f32::EPSILON {
                    continue;
                }
                let normal = dir.perp().normalize() * half;
                self.fill_polygon(&[p1 + normal, p2 + normal, p2 - normal, p1 - normal], paint);
            }
        }
    }

    fn blit(&mut self, src: &Pixmap, x: i32, y: i32) {
        for sy in 0..src.height {
            let dy = y + sy as i32;
            if dy < 0 || dy >= self.height as i32 {
                continue;
            }
            for sx in 0..src.width {
                let dx = x + sx as i32;
                if dx < 0 || dx >= self.width as i32 {
                    continue;
                }
                let color = src.pixel(sx, sy);
                self.blend_pixel(dx as u32, dy as u32, color, color.a);
            }
        }
    }
}
