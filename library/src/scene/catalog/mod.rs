use crate::geometry::alias::{Color, Point, Vector};
use crate::material::material_properties::Material;
use crate::objects::quad::Quad;
use crate::objects::sphere::Sphere;
use strum_macros::EnumIter;

pub(crate) mod meshes;
pub(crate) mod rooms;
pub(crate) mod showcase;
pub(crate) mod spheres;

const GROUND_RADIUS: f64 = 1000.0;

/// Huge sphere whose top touches `y = -1`, the floor of most scenes.
#[must_use]
pub(crate) fn ground(color: Color, material: Material) -> Sphere {
    Sphere::new(Point::new(0.0, -1.0 - GROUND_RADIUS, 0.0), GROUND_RADIUS, color, material)
}

#[must_use]
pub(crate) fn default_ground() -> Sphere {
    ground(Color::new(0.5, 0.5, 0.5), Material::metal(0.9, 0.0, 0.6))
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter)]
pub(crate) enum Wall {
    Left,
    Back,
    Ceiling,
    Right,
    Floor,
    Front,
}

/// One side of the 2x2x2 room spanning `z` from `far` to `far + 2`.
#[must_use]
pub(crate) fn wall(side: Wall, far: f64, color: Color, material: Material) -> Quad {
    let near = far + 2.0;
    let (origin, local_x, local_y) = match side {
        Wall::Left => (Point::new(-1.0, -1.0, near), Vector::new(0.0, 0.0, -2.0), Vector::new(0.0, 2.0, 0.0)),
        Wall::Back => (Point::new(-1.0, -1.0, far), Vector::new(2.0, 0.0, 0.0), Vector::new(0.0, 2.0, 0.0)),
        Wall::Ceiling => (Point::new(-1.0, 1.0, far), Vector::new(2.0, 0.0, 0.0), Vector::new(0.0, 0.0, 2.0)),
        Wall::Right => (Point::new(1.0, -1.0, far), Vector::new(0.0, 0.0, 2.0), Vector::new(0.0, 2.0, 0.0)),
        Wall::Floor => (Point::new(1.0, -1.0, far), Vector::new(-2.0, 0.0, 0.0), Vector::new(0.0, 0.0, 2.0)),
        Wall::Front => (Point::new(1.0, -1.0, near), Vector::new(-2.0, 0.0, 0.0), Vector::new(0.0, 2.0, 0.0)),
    };
    Quad::new(origin, local_x, local_y, color, material)
}

/// Unit square area light just below the room ceiling.
#[must_use]
pub(crate) fn ceiling_light(z: f64, intensity: f64) -> Quad {
    Quad::new(
        Point::new(-0.5, 0.99, z),
        Vector::new(1.0, 0.0, 0.0),
        Vector::new(0.0, 0.0, 1.0),
        Color::new(1.0, 1.0, 1.0),
        Material::diffuse().with_emission(intensity),
    )
}
