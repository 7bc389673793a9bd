use crate::geometry::alias::{Color, Point, Vector};
use crate::material::material_properties::Material;
use crate::objects::cuboid::Cuboid;
use crate::objects::sphere::Sphere;
use crate::scene::catalog::{default_ground, ground};
use crate::scene::descriptor::{SceneBuilder, SceneDescriptor};

const RED: Color = Color::new(1.0, 0.0, 0.0);
const WHITE: Color = Color::new(1.0, 1.0, 1.0);
const BLACK: Color = Color::new(0.0, 0.0, 0.0);
const MINT: Color = Color::new(0.4, 0.9, 0.8);

#[must_use]
pub(crate) fn basic() -> SceneDescriptor {
    let mut builder = SceneBuilder::new();
    builder.add_sphere(ground(Color::new(0.5, 0.5, 0.5), Material::diffuse()));
    builder.add_sphere(Sphere::new(Point::new(0.0, -0.5, -2.0), 0.5, RED, Material::diffuse()));
    builder.build()
}

#[must_use]
pub(crate) fn metal() -> SceneDescriptor {
    let mirror = Material::metal(1.0, 0.0, 1.0);
    let mut builder = SceneBuilder::new();
    builder.add_sphere(ground(Color::new(0.10980392156862745, 0.12156862745098039, 0.2901960784313726), Material::metal(1.0, 0.0, 0.01)));
    builder.add_sphere(Sphere::new(Point::new(0.0, -0.26, -2.0), 0.5, RED, mirror));
    builder.add_sphere(Sphere::new(Point::new(-1.0, -0.5, -2.0), 0.5, RED, mirror));
    builder.add_sphere(Sphere::new(Point::new(1.0, -0.5, -2.0), 0.5, RED, mirror));
    builder.add_sphere(Sphere::new(Point::new(0.01, 0.51, -1.9), 0.23, MINT, mirror));
    builder.with_render_budget(1, 30);
    builder.build()
}

#[must_use]
pub(crate) fn fuzz() -> SceneDescriptor {
    let mut builder = SceneBuilder::new();
    builder.add_sphere(ground(Color::new(0.21568627450980393, 0.21568627450980393, 0.40784313725490196), Material::diffuse()));
    builder.add_sphere(Sphere::new(Point::new(0.0, -0.2, -2.0), 0.5, RED, Material::metal(1.0, 0.1, 1.0)));
    builder.add_sphere(Sphere::new(Point::new(-1.0, -0.5, -2.0), 0.5, RED, Material::metal(1.0, 0.5, 1.0)));
    builder.add_sphere(Sphere::new(Point::new(1.0, -0.5, -2.0), 0.5, RED, Material::metal(1.0, 0.0, 1.0)));
    builder
        .with_background(Color::new(0.0, 0.3803921568627451, 0.7607843137254902), WHITE)
        .with_render_budget(1, 30);
    builder.build()
}

#[must_use]
pub(crate) fn specular() -> SceneDescriptor {
    let mut builder = SceneBuilder::new();
    builder.add_sphere(ground(Color::new(0.0, 0.25098039215686274, 1.0), Material::metal(0.74, 0.0, 1.0)));
    builder.add_sphere(Sphere::new(Point::new(0.0, -0.5, -2.0), 0.5, WHITE, Material::metal(1.0, 0.0, 0.1)));
    builder.add_sphere(Sphere::new(Point::new(-1.0, -0.5, -2.0), 0.5, WHITE, Material::metal(1.0, 0.0, 0.02)));
    builder.add_sphere(Sphere::new(Point::new(1.0, -0.5, -2.0), 0.5, RED, Material::metal(1.0, 0.0, 1.0)));
    builder.add_cuboid(Cuboid::rectangular(
        Point::new(0.0, 1.54, -2.0),
        Vector::new(0.0, 0.0, 0.0),
        Vector::new(1.3, 0.02, 0.36),
        WHITE,
        Material::diffuse().with_emission(3.0),
    ));
    builder
        .with_background(BLACK, Color::new(0.34509803921568627, 0.6039215686274509, 0.9921568627450981))
        .with_render_budget(10, 30);
    builder.build()
}

#[must_use]
pub(crate) fn emissive() -> SceneDescriptor {
    let mut builder = SceneBuilder::new();
    builder.add_sphere(default_ground());
    builder.add_sphere(Sphere::new(Point::new(0.5, 0.0, -2.5), 1.0, RED, Material::diffuse()));
    builder.add_sphere(Sphere::new(Point::new(-1.0, -0.5, -2.0), 0.5, WHITE, Material::diffuse().with_emission(3.0)));
    builder.with_background(BLACK, BLACK).with_sun_intensity(0.0);
    builder.build()
}

#[must_use]
pub(crate) fn dielectric() -> SceneDescriptor {
    let mut builder = SceneBuilder::new();
    builder.add_sphere(default_ground());
    builder.add_sphere(Sphere::new(Point::new(0.0, -0.5, -4.0), 0.5, RED, Material::diffuse()));
    builder.add_sphere(Sphere::new(Point::new(-0.2, 0.7, -4.0), 0.5, Color::new(0.0, 0.0, 1.0), Material::diffuse()));
    builder.add_sphere(Sphere::new(Point::new(0.0, 0.0, -2.1), 1.0, WHITE, Material::dielectric(1.0, 0.0, 0.9)));
    builder.build()
}

#[must_use]
pub(crate) fn cubes() -> SceneDescriptor {
    let half_extents = Vector::new(0.5, 0.5, 0.5);
    let mut builder = SceneBuilder::new();
    builder.add_sphere(default_ground());
    builder.add_sphere(Sphere::new(Point::new(0.0, 0.49, -1.5), 0.25, MINT, Material::metal(1.0, 0.0, 1.0)));
    builder.add_cuboid(Cuboid::rectangular(Point::new(-1.0, 0.0, -2.23), Vector::new(0.0, 0.0, 0.0), half_extents, RED, Material::diffuse()));
    builder.add_cuboid(Cuboid::rectangular(Point::new(1.0, 0.0, -2.21), Vector::new(0.0, 0.0, 0.0), half_extents, WHITE, Material::diffuse()));
    builder.build()
}

/// A single glowing disk facing the camera.
#[must_use]
pub(crate) fn circular_plane() -> SceneDescriptor {
    let mut builder = SceneBuilder::new();
    builder.add_cuboid(Cuboid::disk(
        Point::new(0.0, 0.0, -3.0),
        Vector::new(0.0, 0.0, 0.5),
        2.0,
        RED,
        Material::metal(0.5, 0.5, 0.5).with_emission(0.5),
    ));
    builder.with_background(BLACK, BLACK);
    builder.build()
}
