use crate::geometry::alias::{Color, Point};
use crate::material::material_properties::Material;
use crate::objects::sphere::Sphere;
use crate::placement::scatter::scatter_spheres;
use crate::scene::catalog::default_ground;
use crate::scene::descriptor::{SceneBuilder, SceneDescriptor};
use crate::scene::registry::AssemblyContext;

const LARGE_RADIUS: f64 = 1.3;
const LARGE_SPACING: f64 = 3.3;

/// Ground, a random crowd of small spheres, and three large ones (glass,
/// matte red, mirror) lined up across the middle.
fn sphere_collection(context: &mut AssemblyContext) -> SceneBuilder {
    let offset = Point::new(0.0, -1.0, -5.0);
    let center = Point::new(offset.x, offset.y + LARGE_RADIUS, offset.z);
    let large = [
        Sphere::new(center, LARGE_RADIUS, Color::new(1.0, 1.0, 1.0), Material::dielectric(1.0, 0.001, 0.9)),
        Sphere::new(Point::new(center.x - LARGE_SPACING, center.y, center.z), LARGE_RADIUS, Color::new(1.0, 0.1, 0.1), Material::diffuse()),
        Sphere::new(Point::new(center.x + LARGE_SPACING, center.y, center.z), LARGE_RADIUS, Color::new(0.7, 0.6, 0.5), Material::metal(1.0, 0.0, 1.0)),
    ];

    let count = context.sphere_count();
    let settings = *context.scatter_settings();
    let scatter = scatter_spheres(count, offset, &settings, &large, context.rng());

    let mut builder = SceneBuilder::new();
    builder.add_sphere(default_ground());
    builder.add_scatter(scatter);
    builder.add_spheres(large);
    builder
}

#[must_use]
pub(crate) fn spheres(context: &mut AssemblyContext) -> SceneDescriptor {
    let mut builder = sphere_collection(context);
    builder.with_focus(5.0, 0.2);
    builder.build()
}

#[must_use]
pub(crate) fn night(context: &mut AssemblyContext) -> SceneDescriptor {
    let mut builder = sphere_collection(context);
    builder
        .with_background(Color::new(0.0, 0.0, 0.0), Color::new(0.0, 0.0, 0.0))
        .with_focus(5.0, 0.2)
        .with_sun_intensity(0.1);
    builder.build()
}
