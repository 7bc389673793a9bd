use crate::geometry::alias::Point;
use crate::objects::sphere::Sphere;
use crate::placement::random_material::{random_color, random_material};
use cgmath::MetricSpace;
use log::{debug, warn};
use rand::Rng;
use std::f64::consts::TAU;
use std::ops::RangeInclusive;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScatterSettings {
    min_radius: f64,
    max_radius: f64,
    placement_radius: f64,
    max_attempts: usize,
}

impl ScatterSettings {
    #[must_use]
    pub fn new(min_radius: f64, max_radius: f64, placement_radius: f64, max_attempts: usize) -> Self {
        assert!(min_radius > 0.0, "sphere radius must be positive");
        assert!(min_radius <= max_radius, "radius range is empty: [{min_radius}, {max_radius}]");
        assert!(placement_radius >= 0.0, "placement radius must be non-negative");
        assert!(max_attempts > 0, "at least one attempt is required");
        ScatterSettings { min_radius, max_radius, placement_radius, max_attempts }
    }

    #[must_use]
    pub fn radius_range(&self) -> RangeInclusive<f64> {
        self.min_radius..=self.max_radius
    }

    #[must_use]
    pub const fn placement_radius(&self) -> f64 {
        self.placement_radius
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

impl Default for ScatterSettings {
    fn default() -> Self {
        ScatterSettings::new(0.1, 0.5, 5.0, 64)
    }
}

/// Result of [`scatter_spheres`]. Non-zero [`Self::degraded_placements`]
/// means some spheres were accepted while still intersecting a neighbour.
#[derive(Clone, Debug, PartialEq)]
pub struct Scatter {
    spheres: Vec<Sphere>,
    degraded_placements: usize,
}

impl Scatter {
    #[must_use]
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    #[must_use]
    pub fn into_spheres(self) -> Vec<Sphere> {
        self.spheres
    }

    #[must_use]
    pub const fn degraded_placements(&self) -> usize {
        self.degraded_placements
    }

    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.degraded_placements > 0
    }
}

struct Candidate {
    center: Point,
    radius: f64,
    penetration: f64,
}

/// Places exactly `count` spheres resting on the horizontal plane through
/// `offset`, inside a disk of `settings.placement_radius()` around it.
///
/// Every candidate is checked against the already accepted spheres and
/// the caller's `obstacles`. When `settings.max_attempts()` candidates in a
/// row collide, the one with the shallowest penetration is kept and the
/// output is flagged as degraded.
#[must_use]
pub fn scatter_spheres<R: Rng + ?Sized>(count: usize, offset: Point, settings: &ScatterSettings, obstacles: &[Sphere], rng: &mut R) -> Scatter {
    let mut spheres: Vec<Sphere> = Vec::with_capacity(count);
    let mut degraded_placements = 0;

    for index in 0..count {
        let mut best: Option<Candidate> = None;
        for _ in 0..settings.max_attempts() {
            let candidate = sample_candidate(offset, settings, &spheres, obstacles, rng);
            let improves = best.as_ref().is_none_or(|current| candidate.penetration < current.penetration);
            if improves {
                best = Some(candidate);
            }
            if best.as_ref().is_some_and(|current| current.penetration <= 0.0) {
                break;
            }
        }

        let Some(chosen) = best else {
            break;
        };
        if chosen.penetration > 0.0 {
            degraded_placements += 1;
            warn!(
                "sphere {} of {} placed with penetration {:.4} after {} attempts",
                index + 1, count, chosen.penetration, settings.max_attempts(),
            );
        }
        spheres.push(Sphere::new(chosen.center, chosen.radius, random_color(rng), random_material(rng)));
    }

    debug!("scattered {} spheres around {:?}, {} degraded", spheres.len(), offset, degraded_placements);
    Scatter { spheres, degraded_placements }
}

fn sample_candidate<R: Rng + ?Sized>(offset: Point, settings: &ScatterSettings, accepted: &[Sphere], obstacles: &[Sphere], rng: &mut R) -> Candidate {
    let radius = rng.gen_range(settings.radius_range());
    let angle = rng.gen_range(0.0..TAU);
    let distance = settings.placement_radius() * rng.gen_range(0.0..=1.0_f64).sqrt();
    let center = Point::new(offset.x + distance * angle.cos(), offset.y + radius, offset.z + distance * angle.sin());

    let penetration = accepted
        .iter()
        .chain(obstacles)
        .map(|other| radius + other.radius() - center.distance(other.center()))
        .fold(f64::NEG_INFINITY, f64::max);

    Candidate { center, radius, penetration }
}
