use crate::geometry::aabb::{compute_aabb, Aabb};
use crate::geometry::alias::{Color, Point, Vector};
use crate::material::material_properties::Material;
use crate::objects::common_properties::Appearance;

/// Planar parallelogram spanned by two edges leaving `origin`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quad {
    origin: Point,
    local_x: Vector,
    local_y: Vector,
    appearance: Appearance,
}

impl Quad {
    #[must_use]
    pub fn new(origin: Point, local_x: Vector, local_y: Vector, color: Color, material: Material) -> Self {
        Quad { origin, local_x, local_y, appearance: Appearance::new(color, material) }
    }

    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        [
            self.origin,
            self.origin + self.local_x,
            self.origin + self.local_x + self.local_y,
            self.origin + self.local_y,
        ]
    }

    #[must_use]
    pub fn bounding_box(&self) -> Aabb {
        compute_aabb(&self.corners()).unwrap_or_else(|| Aabb::from_points(self.origin, self.origin))
    }

    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    #[must_use]
    pub const fn local_x(&self) -> Vector {
        self.local_x
    }

    #[must_use]
    pub const fn local_y(&self) -> Vector {
        self.local_y
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.appearance.color()
    }

    #[must_use]
    pub const fn material(&self) -> Material {
        self.appearance.material()
    }
}
