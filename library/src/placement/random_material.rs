use crate::geometry::alias::Color;
use crate::material::material_properties::{Material, MaterialKind};
use rand::Rng;
use strum::{EnumCount, IntoEnumIterator};

const FUZZ_LIMIT: f64 = 0.5;
const MIN_REFRACTIVE_INDEX: f64 = 1.0;
const MAX_REFRACTIVE_INDEX: f64 = 1.8;

#[must_use]
pub fn random_kind<R: Rng + ?Sized>(rng: &mut R) -> MaterialKind {
    MaterialKind::iter().nth(rng.gen_range(0..MaterialKind::COUNT)).unwrap_or_default()
}

/// Material of a uniformly chosen kind with parameters drawn from the
/// physically meaningful part of that kind's domain.
#[must_use]
pub fn random_material<R: Rng + ?Sized>(rng: &mut R) -> Material {
    match random_kind(rng) {
        MaterialKind::Diffuse => Material::diffuse(),
        MaterialKind::Metal => Material::metal(
            rng.gen_range(0.0..=1.0),
            rng.gen_range(0.0..=FUZZ_LIMIT),
            rng.gen_range(0.0..=1.0),
        ),
        MaterialKind::Glass => Material::dielectric(rng.gen_range(MIN_REFRACTIVE_INDEX..=MAX_REFRACTIVE_INDEX), 0.0, 0.0),
    }
}

#[must_use]
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::new(rng.gen_range(0.0..=1.0), rng.gen_range(0.0..=1.0), rng.gen_range(0.0..=1.0))
}
