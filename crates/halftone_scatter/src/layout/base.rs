//! Base-layer partition: a 2- or 3-way split of the plane along a random line.
use glam::Vec2;
use rand::Rng;
use tracing::{debug, warn};

use crate::config::BackgroundConfig;
use crate::field::GradientField;
use crate::layout::{rand01, rand_index, rand_range};
use crate::zone::{PatternType, Zone, ZonePredicate};

/// Below this coefficient length the sampled boundary line is degenerate.
const MIN_LINE_LEN: f32 = 1e-3;

/// Endpoint resamples before falling back to a horizontal midline.
const MAX_LINE_ATTEMPTS: usize = 8;

/// Parallel-offset range for the 3-region split, as a fraction of the
/// shorter screen dimension.
const OFFSET_FRACTION: (f32, f32) = (0.25, 0.5);

/// An implicit boundary line `a * x + b * y + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BoundaryLine {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    /// `sqrt(a^2 + b^2)`; converts offsets on `c` into perpendicular
    /// pixel distances.
    pub len: f32,
}

impl BoundaryLine {
    /// Line through two points, with `a = y1 - y2`, `b = x2 - x1`,
    /// `c = x1 * y2 - x2 * y1`.
    pub fn through(p1: Vec2, p2: Vec2) -> Self {
        let a = p1.y - p2.y;
        let b = p2.x - p1.x;
        let c = p1.x * p2.y - p2.x * p1.y;
        Self {
            a,
            b,
            c,
            len: (a * a + b * b).sqrt(),
        }
    }
}

/// Sample one endpoint: on the left or top edge with equal probability.
fn sample_start_point(extent: Vec2, rng: &mut dyn Rng) -> Vec2 {
    if rand01(rng) < 0.5 {
        Vec2::new(0.0, rand_range(rng, 0.0, extent.y))
    } else {
        Vec2::new(rand_range(rng, 0.0, extent.x), 0.0)
    }
}

/// Sample the other endpoint: on the right or bottom edge.
fn sample_end_point(extent: Vec2, rng: &mut dyn Rng) -> Vec2 {
    if rand01(rng) < 0.5 {
        Vec2::new(extent.x, rand_range(rng, 0.0, extent.y))
    } else {
        Vec2::new(rand_range(rng, 0.0, extent.x), extent.y)
    }
}

/// Sample a non-degenerate boundary line across the surface.
///
/// The endpoints lie on opposite edge pairs, so they can only coincide at a
/// shared corner; resampling makes that case vanish. The midline fallback
/// keeps the function total without a runtime error path.
pub(crate) fn sample_boundary_line(extent: Vec2, rng: &mut dyn Rng) -> BoundaryLine {
    for _ in 0..MAX_LINE_ATTEMPTS {
        let line = BoundaryLine::through(
            sample_start_point(extent, rng),
            sample_end_point(extent, rng),
        );
        if line.len > MIN_LINE_LEN {
            return line;
        }
    }

    warn!("Boundary endpoints kept coinciding; using horizontal midline.");
    BoundaryLine::through(
        Vec2::new(0.0, extent.y / 2.0),
        Vec2::new(extent.x, extent.y / 2.0),
    )
}

fn random_pattern(rng: &mut dyn Rng) -> PatternType {
    PatternType::ALL[rand_index(rng, PatternType::ALL.len())]
}

fn random_field(extent: Vec2, rng: &mut dyn Rng) -> GradientField {
    GradientField::new(rand_range(rng, 0.0, std::f32::consts::TAU), extent.x)
}

/// Build the base partition: every point of the plane belongs to exactly one
/// of the returned zones.
///
/// Membership is classified over the projection `V = a * x + b * y`; each
/// boundary line `a * x + b * y + c = 0` contributes the threshold `-c`, and
/// boundary points belong to the region below their line.
pub(crate) fn build_base_zones(
    extent: Vec2,
    config: &BackgroundConfig,
    rng: &mut dyn Rng,
) -> Vec<Zone> {
    let line = sample_boundary_line(extent, rng);
    let three_way = rand01(rng) < config.three_way_probability;

    if !three_way {
        let threshold = -line.c;
        debug!("Base split: 2 regions at V = {threshold}.");
        return vec![
            Zone::base(
                ZonePredicate::HalfPlane {
                    a: line.a,
                    b: line.b,
                    threshold,
                    above: true,
                },
                random_field(extent, rng),
                random_pattern(rng),
            ),
            Zone::base(
                ZonePredicate::HalfPlane {
                    a: line.a,
                    b: line.b,
                    threshold,
                    above: false,
                },
                random_field(extent, rng),
                random_pattern(rng),
            ),
        ];
    }

    // Second parallel line by translating c; scaling the offset by len keeps
    // it a perpendicular pixel distance even though a, b are unnormalized.
    let offset = extent.x.min(extent.y) * rand_range(rng, OFFSET_FRACTION.0, OFFSET_FRACTION.1);
    let offset = if rand01(rng) < 0.5 { -offset } else { offset };
    let c2 = line.c + offset * line.len;

    let v1 = -line.c;
    let v2 = -c2;
    let v_lo = v1.min(v2);
    let v_hi = v1.max(v2);
    debug!("Base split: 3 regions between V = {v_lo} and V = {v_hi}.");

    vec![
        Zone::base(
            ZonePredicate::HalfPlane {
                a: line.a,
                b: line.b,
                threshold: v_hi,
                above: true,
            },
            random_field(extent, rng),
            random_pattern(rng),
        ),
        Zone::base(
            ZonePredicate::Band {
                a: line.a,
                b: line.b,
                lower: v_lo,
                upper: v_hi,
            },
            random_field(extent, rng),
            random_pattern(rng),
        ),
        Zone::base(
            ZonePredicate::HalfPlane {
                a: line.a,
                b: line.b,
                threshold: v_lo,
                above: false,
            },
            random_field(extent, rng),
            random_pattern(rng),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    const EXTENT: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn boundary_line_matches_the_implicit_equation() {
        let p1 = Vec2::new(0.0, 300.0);
        let p2 = Vec2::new(800.0, 300.0);
        let line = BoundaryLine::through(p1, p2);
        assert_eq!(line.a, 0.0);
        assert_eq!(line.b, 800.0);
        assert_eq!(line.c, -240_000.0);
        assert_eq!(line.len, 800.0);

        // Both defining points satisfy a*x + b*y + c = 0.
        for p in [p1, p2] {
            assert!((line.a * p.x + line.b * p.y + line.c).abs() < 1e-3);
        }
    }

    #[test]
    fn sampled_lines_are_never_degenerate() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let line = sample_boundary_line(EXTENT, &mut rng);
            assert!(line.len > MIN_LINE_LEN);
        }
    }

    #[test]
    fn two_way_split_partitions_the_plane() {
        let config = BackgroundConfig::default().with_three_way_probability(0.0);
        let mut rng = StdRng::seed_from_u64(5);
        let zones = build_base_zones(EXTENT, &config, &mut rng);
        assert_eq!(zones.len(), 2);

        let mut point_rng = StdRng::seed_from_u64(6);
        for _ in 0..500 {
            let p = Vec2::new(
                rand_range(&mut point_rng, 0.0, EXTENT.x),
                rand_range(&mut point_rng, 0.0, EXTENT.y),
            );
            let matches = zones.iter().filter(|z| z.contains(p)).count();
            assert_eq!(matches, 1, "point {p} matched {matches} base zones");
        }
    }

    #[test]
    fn three_way_split_partitions_the_plane() {
        let config = BackgroundConfig::default().with_three_way_probability(1.0);
        let mut rng = StdRng::seed_from_u64(21);
        let zones = build_base_zones(EXTENT, &config, &mut rng);
        assert_eq!(zones.len(), 3);

        let mut point_rng = StdRng::seed_from_u64(22);
        for _ in 0..500 {
            let p = Vec2::new(
                rand_range(&mut point_rng, 0.0, EXTENT.x),
                rand_range(&mut point_rng, 0.0, EXTENT.y),
            );
            let matches = zones.iter().filter(|z| z.contains(p)).count();
            assert_eq!(matches, 1, "point {p} matched {matches} base zones");
        }
    }

    #[test]
    fn three_way_regions_are_ordered_along_the_projection() {
        let config = BackgroundConfig::default().with_three_way_probability(1.0);
        let mut rng = StdRng::seed_from_u64(21);
        let zones = build_base_zones(EXTENT, &config, &mut rng);

        let (ZonePredicate::HalfPlane { threshold: hi, .. },
             ZonePredicate::Band { lower, upper, .. },
             ZonePredicate::HalfPlane { threshold: lo, .. }) =
            (zones[0].predicate, zones[1].predicate, zones[2].predicate)
        else {
            panic!("unexpected predicate shapes");
        };
        assert_eq!(hi, upper);
        assert_eq!(lo, lower);
        assert!(lo < hi);
    }

    #[test]
    fn horizontal_split_classifies_above_and_below() {
        // Forced horizontal boundary y = 300 on 800x600: the region with
        // `above: false` holds V = b*y below the line (screen-space "upper"
        // half), the `above: true` region holds the rest.
        let line = BoundaryLine::through(Vec2::new(0.0, 300.0), Vec2::new(800.0, 300.0));
        let upper_screen = ZonePredicate::HalfPlane {
            a: line.a,
            b: line.b,
            threshold: -line.c,
            above: false,
        };
        let lower_screen = ZonePredicate::HalfPlane {
            a: line.a,
            b: line.b,
            threshold: -line.c,
            above: true,
        };

        assert!(upper_screen.contains(Vec2::new(400.0, 100.0)));
        assert!(!lower_screen.contains(Vec2::new(400.0, 100.0)));
        assert!(lower_screen.contains(Vec2::new(400.0, 500.0)));
        assert!(!upper_screen.contains(Vec2::new(400.0, 500.0)));
    }
}
