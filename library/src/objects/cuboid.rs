use crate::geometry::aabb::Aabb;
use crate::geometry::alias::{Color, Point, Vector};
use crate::material::material_properties::Material;
use crate::objects::common_properties::Appearance;
use cgmath::{InnerSpace, Zero};

/// What a box record actually describes. The renderer packs both cases into
/// one half-extents triple: a negative first component means "disk of radius
/// `|x|`", anything else is a rectangular box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CuboidShape {
    Rectangular { half_extents: Vector },
    Disk { radius: f64 },
}

impl CuboidShape {
    /// Decided purely from the sign of the first component.
    #[must_use]
    pub fn classify(half_extents: Vector) -> Self {
        if half_extents.x < 0.0 {
            CuboidShape::Disk { radius: half_extents.x.abs() }
        } else {
            CuboidShape::Rectangular { half_extents }
        }
    }

    #[must_use]
    pub fn encoded_half_extents(&self) -> Vector {
        match *self {
            CuboidShape::Rectangular { half_extents } => half_extents,
            CuboidShape::Disk { radius } => Vector::new(-radius, 0.0, 0.0),
        }
    }
}

/// Box or disk primitive. `orientation` is the rotation hint for boxes and the
/// surface normal for disks.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cuboid {
    center: Point,
    orientation: Vector,
    shape: CuboidShape,
    appearance: Appearance,
}

impl Cuboid {
    #[must_use]
    pub fn new(center: Point, orientation: Vector, shape: CuboidShape, color: Color, material: Material) -> Self {
        match shape {
            CuboidShape::Rectangular { half_extents } => {
                assert!(half_extents.x >= 0.0 && half_extents.y >= 0.0 && half_extents.z >= 0.0, "half extents must be non-negative");
            }
            CuboidShape::Disk { radius } => {
                assert!(radius > 0.0, "disk radius must be positive");
            }
        }
        Cuboid { center, orientation, shape, appearance: Appearance::new(color, material) }
    }

    #[must_use]
    pub fn rectangular(center: Point, orientation: Vector, half_extents: Vector, color: Color, material: Material) -> Self {
        Cuboid::new(center, orientation, CuboidShape::Rectangular { half_extents }, color, material)
    }

    #[must_use]
    pub fn disk(center: Point, normal: Vector, radius: f64, color: Color, material: Material) -> Self {
        Cuboid::new(center, normal, CuboidShape::Disk { radius }, color, material)
    }

    /// Conservative world-space box. Rotated boxes are bounded by the sphere
    /// through their corners; disks use the exact extent of a tilted circle.
    #[must_use]
    pub fn bounding_box(&self) -> Aabb {
        let reach = match self.shape {
            CuboidShape::Rectangular { half_extents } => {
                if self.orientation.is_zero() {
                    half_extents
                } else {
                    let radius = half_extents.magnitude();
                    Vector::new(radius, radius, radius)
                }
            }
            CuboidShape::Disk { radius } => {
                if self.orientation.is_zero() {
                    Vector::new(radius, radius, radius)
                } else {
                    let normal = self.orientation.normalize();
                    Vector::new(
                        radius * (1.0 - normal.x * normal.x).max(0.0).sqrt(),
                        radius * (1.0 - normal.y * normal.y).max(0.0).sqrt(),
                        radius * (1.0 - normal.z * normal.z).max(0.0).sqrt(),
                    )
                }
            }
        };
        Aabb::from_points(self.center - reach, self.center + reach)
    }

    #[must_use]
    pub const fn center(&self) -> Point {
        self.center
    }

    #[must_use]
    pub const fn orientation(&self) -> Vector {
        self.orientation
    }

    #[must_use]
    pub const fn shape(&self) -> CuboidShape {
        self.shape
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
