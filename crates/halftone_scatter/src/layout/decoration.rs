//! Decorative-zone placement via bounded rejection sampling.
use glam::Vec2;
use mint::Vector2;
use rand::Rng;
use tracing::{debug, warn};

use crate::config::BackgroundConfig;
use crate::field::GradientField;
use crate::layout::{rand01, rand_index, rand_range};
use crate::zone::{BoundingCircle, PatternType, Zone, ZonePredicate};

/// Circle decoration radius range in surface units.
const CIRCLE_RADIUS: (f32, f32) = (150.0, 350.0);

/// Diamond decoration Manhattan half-width range.
const DIAMOND_HALF_WIDTH: (f32, f32) = (150.0, 300.0);

/// Fraction of each screen dimension excluded from center sampling.
const INNER_MARGIN: f32 = 0.1;

/// Placement-attempt budget shared across all decorations of one build.
///
/// Explicit so that bounded-retry behavior is testable on its own instead of
/// hiding in a loop counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryBudget {
    remaining: usize,
}

impl RetryBudget {
    pub fn new(attempts: usize) -> Self {
        Self {
            remaining: attempts,
        }
    }

    /// Consume one attempt; `false` once the budget is exhausted.
    pub fn take(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

/// Geometry of a decoration candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DecorationShape {
    Circle { radius: f32 },
    Diamond { half_width: f32 },
}

/// A candidate decorative region awaiting the overlap test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecorationCandidate {
    pub center: Vec2,
    pub shape: DecorationShape,
}

impl DecorationCandidate {
    /// Bounding circle used for overlap tests. A diamond's Manhattan
    /// half-width conservatively doubles as its bounding radius.
    pub fn bounding_circle(&self) -> BoundingCircle {
        let radius = match self.shape {
            DecorationShape::Circle { radius } => radius,
            DecorationShape::Diamond { half_width } => half_width,
        };
        BoundingCircle::new(self.center.x, self.center.y, radius)
    }

    /// Membership predicate for the zone this candidate would become.
    pub fn predicate(&self) -> ZonePredicate {
        match self.shape {
            DecorationShape::Circle { radius } => ZonePredicate::Circle {
                cx: self.center.x,
                cy: self.center.y,
                radius,
            },
            DecorationShape::Diamond { half_width } => ZonePredicate::Diamond {
                cx: self.center.x,
                cy: self.center.y,
                half_width,
            },
        }
    }
}

/// Strategy for sampling decoration centers.
pub trait CenterSampling: Send + Sync {
    fn sample(&self, extent: Vector2<f32>, rng: &mut dyn Rng) -> Vector2<f32>;
}

/// Uniform sampling over the surface with a margin kept clear on every edge.
#[derive(Debug, Clone)]
pub struct InnerMarginSampling {
    /// Fraction of each dimension excluded on both sides, in `[0, 0.5)`.
    pub margin: f32,
}

impl InnerMarginSampling {
    pub fn new(margin: f32) -> Self {
        Self {
            margin: margin.clamp(0.0, 0.49),
        }
    }
}

impl CenterSampling for InnerMarginSampling {
    fn sample(&self, extent: Vector2<f32>, rng: &mut dyn Rng) -> Vector2<f32> {
        let x = rand_range(rng, extent.x * self.margin, extent.x * (1.0 - self.margin));
        let y = rand_range(rng, extent.y * self.margin, extent.y * (1.0 - self.margin));
        Vector2 { x, y }
    }
}

/// Place one decoration without excessive overlap.
///
/// Draws candidates until one keeps `padding` clearance from every circle in
/// `existing`, or until `budget` runs dry. The budget is shared across all
/// decorations of a build, so a crowded placement can exhaust it for the
/// rest.
pub fn try_place(
    existing: &[BoundingCircle],
    padding: f32,
    budget: &mut RetryBudget,
    rng: &mut dyn Rng,
    mut candidate: impl FnMut(&mut dyn Rng) -> DecorationCandidate,
) -> Option<DecorationCandidate> {
    while budget.take() {
        let cand = candidate(&mut *rng);
        let bounding = cand.bounding_circle();
        if existing.iter().all(|prev| !bounding.overlaps(prev, padding)) {
            return Some(cand);
        }
    }
    None
}

/// Build 1-2 decorative zones (per configuration), highest priority first.
pub(crate) fn build_decorations(
    extent: Vec2,
    config: &BackgroundConfig,
    rng: &mut dyn Rng,
) -> Vec<Zone> {
    let span = config.max_decorations - config.min_decorations + 1;
    let count = config.min_decorations + rand_index(rng, span);

    let sampler = InnerMarginSampling::new(INNER_MARGIN);
    let mut budget = RetryBudget::new(config.retry_budget);
    let mut accepted: Vec<BoundingCircle> = Vec::new();
    let mut zones = Vec::new();

    for index in 0..count {
        let circular = rand01(rng) < 0.5;
        let pattern = PatternType::ALL[rand_index(rng, PatternType::ALL.len())];
        let angle = rand_range(rng, 0.0, std::f32::consts::TAU);

        let placed = try_place(
            &accepted,
            config.decoration_padding,
            &mut budget,
            rng,
            |rng| {
                let center = Vec2::from(sampler.sample(extent.into(), rng));
                let shape = if circular {
                    DecorationShape::Circle {
                        radius: rand_range(rng, CIRCLE_RADIUS.0, CIRCLE_RADIUS.1),
                    }
                } else {
                    DecorationShape::Diamond {
                        half_width: rand_range(rng, DIAMOND_HALF_WIDTH.0, DIAMOND_HALF_WIDTH.1),
                    }
                };
                DecorationCandidate { center, shape }
            },
        );

        match placed {
            Some(cand) => {
                let bounding = cand.bounding_circle();
                debug!(
                    "Placed decoration {index} at ({}, {}), bounding radius {}.",
                    bounding.cx, bounding.cy, bounding.radius
                );
                accepted.push(bounding);
                zones.push(Zone::decoration(
                    cand.predicate(),
                    GradientField::new(angle, extent.x),
                    pattern,
                    bounding,
                ));
            }
            None => {
                warn!("Retry budget exhausted; skipping decoration {index}.");
            }
        }
    }

    zones
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn circle_at(x: f32, y: f32, radius: f32) -> DecorationCandidate {
        DecorationCandidate {
            center: Vec2::new(x, y),
            shape: DecorationShape::Circle { radius },
        }
    }

    #[test]
    fn retry_budget_counts_down_to_exhaustion() {
        let mut budget = RetryBudget::new(2);
        assert!(budget.take());
        assert!(budget.take());
        assert!(!budget.take());
        assert!(!budget.take());
        assert_eq!(budget.remaining(), 0);
    }

    #[test]
    fn try_place_accepts_the_first_clear_candidate() {
        let mut budget = RetryBudget::new(50);
        let mut rng = StdRng::seed_from_u64(1);
        let placed = try_place(&[], 20.0, &mut budget, &mut rng, |_| {
            circle_at(400.0, 300.0, 200.0)
        });
        assert_eq!(placed, Some(circle_at(400.0, 300.0, 200.0)));
        assert_eq!(budget.remaining(), 49);
    }

    #[test]
    fn try_place_rejects_overlap_then_retries() {
        // Existing decoration at (400, 300) r=200; a candidate at (420, 300)
        // r=200 sits 20 apart, well inside 200 + 200 + 20, so it must be
        // rejected and the next candidate taken.
        let existing = [BoundingCircle::new(400.0, 300.0, 200.0)];
        let mut budget = RetryBudget::new(50);
        let mut rng = StdRng::seed_from_u64(1);

        let mut attempts = 0;
        let placed = try_place(&existing, 20.0, &mut budget, &mut rng, |_| {
            attempts += 1;
            if attempts == 1 {
                circle_at(420.0, 300.0, 200.0)
            } else {
                circle_at(30.0, 30.0, 20.0)
            }
        });

        assert_eq!(placed, Some(circle_at(30.0, 30.0, 20.0)));
        assert_eq!(attempts, 2);
        assert_eq!(budget.remaining(), 48);
    }

    #[test]
    fn try_place_gives_up_when_budget_runs_out() {
        let existing = [BoundingCircle::new(400.0, 300.0, 200.0)];
        let mut budget = RetryBudget::new(5);
        let mut rng = StdRng::seed_from_u64(1);

        let placed = try_place(&existing, 20.0, &mut budget, &mut rng, |_| {
            circle_at(420.0, 300.0, 200.0)
        });

        assert_eq!(placed, None);
        assert_eq!(budget.remaining(), 0);
    }

    #[test]
    fn budget_is_shared_across_decorations() {
        // First placement drains the whole budget; the second gets nothing.
        let blocker = [BoundingCircle::new(400.0, 300.0, 10_000.0)];
        let mut budget = RetryBudget::new(10);
        let mut rng = StdRng::seed_from_u64(1);

        assert!(try_place(&blocker, 20.0, &mut budget, &mut rng, |_| {
            circle_at(400.0, 300.0, 10.0)
        })
        .is_none());
        assert!(try_place(&[], 20.0, &mut budget, &mut rng, |_| {
            circle_at(10.0, 10.0, 5.0)
        })
        .is_none());
    }

    #[test]
    fn diamond_bounding_radius_equals_half_width() {
        let cand = DecorationCandidate {
            center: Vec2::new(100.0, 200.0),
            shape: DecorationShape::Diamond { half_width: 170.0 },
        };
        let bounding = cand.bounding_circle();
        assert_eq!(bounding.radius, 170.0);
        assert_eq!((bounding.cx, bounding.cy), (100.0, 200.0));
    }

    #[test]
    fn inner_margin_sampling_stays_inside() {
        let sampler = InnerMarginSampling::new(0.1);
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..200 {
            let p = sampler.sample(
                Vector2 {
                    x: 800.0,
                    y: 600.0,
                },
                &mut rng,
            );
            assert!((80.0..720.0).contains(&p.x));
            assert!((60.0..540.0).contains(&p.y));
        }
    }

    #[test]
    fn skipped_decorations_leave_the_rest_intact() {
        // Zero budget: no decorations can place, build still succeeds.
        let config = BackgroundConfig::default().with_retry_budget(0);
        let mut rng = StdRng::seed_from_u64(4);
        let zones = build_decorations(Vec2::new(800.0, 600.0), &config, &mut rng);
        assert!(zones.is_empty());
    }

    #[test]
    fn decoration_count_respects_the_configured_range() {
        let config = BackgroundConfig::default()
            .with_decorations(1, 2)
            .with_retry_budget(1000);
        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            let zones = build_decorations(Vec2::new(2000.0, 2000.0), &config, &mut rng);
            assert!((1..=2).contains(&zones.len()), "seed {seed}: {}", zones.len());
        }
    }
}
