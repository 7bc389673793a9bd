use crate::geometry::alias::{Point, Vector};
use crate::geometry::epsilon::DEFAULT_EPSILON_F64;
use cgmath::AbsDiffEq;

/// Mesh corner as stored in the shared triangle buffer. The normal is kept
/// as loaded (or smoothed); it is not renormalized here.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    position: Point,
    normal: Vector,
}

impl Vertex {
    #[must_use]
    pub const fn new(position: Point, normal: Vector) -> Self {
        Vertex { position, normal }
    }

    #[must_use]
    pub const fn position(&self) -> Point {
        self.position
    }

    #[must_use]
    pub const fn normal(&self) -> Vector {
        self.normal
    }
}

impl AbsDiffEq for Vertex {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        DEFAULT_EPSILON_F64
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.position.abs_diff_eq(&other.position, epsilon) && self.normal.abs_diff_eq(&other.normal, epsilon)
    }
}
