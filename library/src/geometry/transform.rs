use crate::geometry::alias::{Point, Vector};
use cgmath::{Euler, Matrix4, Rad, Transform};

pub(crate) type Affine = Matrix4<f64>;

/// Instance placement as the renderer consumes it: scale first, then the
/// XYZ Euler rotation (radians), then translation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    translation: Vector,
    scale: Vector,
    rotation: Vector,
}

impl Placement {
    #[must_use]
    pub const fn new(translation: Vector, scale: Vector, rotation: Vector) -> Self {
        Placement { translation, scale, rotation }
    }

    #[must_use]
    pub const fn translation(&self) -> Vector {
        self.translation
    }

    #[must_use]
    pub const fn scale(&self) -> Vector {
        self.scale
    }

    #[must_use]
    pub const fn rotation(&self) -> Vector {
        self.rotation
    }

    #[must_use]
    pub fn transformation(&self) -> Transformation {
        let rotation = Euler::new(Rad(self.rotation.x), Rad(self.rotation.y), Rad(self.rotation.z));
        Transformation::new(
            Affine::from_translation(self.translation)
                * Affine::from(rotation)
                * Affine::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z),
        )
    }
}

pub struct Transformation {
    forward: Affine,
}

impl Transformation {
    #[must_use]
    pub(crate) fn new(source: Affine) -> Self {
        Transformation { forward: source }
    }

    #[must_use]
    pub fn of_point(&self, target: &Point) -> Point {
        self.forward.transform_point(*target)
    }
}
