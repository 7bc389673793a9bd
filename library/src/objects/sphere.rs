use crate::geometry::aabb::Aabb;
use crate::geometry::alias::{Color, Point, Vector};
use crate::material::material_properties::Material;
use crate::objects::common_properties::Appearance;
use cgmath::MetricSpace;

/// Which side of the surface the normal points to. Inward spheres model
/// hollow shells (the inner wall of a glass bubble, for example).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum SphereFacing {
    #[default]
    Outward,
    Inward,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    center: Point,
    radius: f64,
    facing: SphereFacing,
    appearance: Appearance,
}

impl Sphere {
    #[must_use]
    pub fn new(center: Point, radius: f64, color: Color, material: Material) -> Self {
        assert!(radius > 0.0, "radius must be positive");
        Sphere { center, radius, facing: SphereFacing::Outward, appearance: Appearance::new(color, material) }
    }

    #[must_use]
    pub fn hollow(center: Point, radius: f64, color: Color, material: Material) -> Self {
        Sphere { facing: SphereFacing::Inward, ..Sphere::new(center, radius, color, material) }
    }

    /// Decodes the renderer convention where a negative radius means
    /// [`SphereFacing::Inward`].
    #[must_use]
    pub fn from_signed_radius(center: Point, signed_radius: f64, color: Color, material: Material) -> Self {
        if signed_radius < 0.0 {
            Sphere::hollow(center, -signed_radius, color, material)
        } else {
            Sphere::new(center, signed_radius, color, material)
        }
    }

    #[must_use]
    pub fn signed_radius(&self) -> f64 {
        match self.facing {
            SphereFacing::Outward => self.radius,
            SphereFacing::Inward => -self.radius,
        }
    }

    /// How deep the two spheres interpenetrate; zero or negative when apart.
    #[must_use]
    pub fn penetration_depth(&self, other: &Sphere) -> f64 {
        self.radius + other.radius - self.center.distance(other.center)
    }

    #[must_use]
    pub fn overlaps(&self, other: &Sphere) -> bool {
        self.penetration_depth(other) > 0.0
    }

    #[must_use]
    pub fn bounding_box(&self) -> Aabb {
        let radius = Vector::new(self.radius, self.radius, self.radius);
        Aabb::from_points(self.center - radius, self.center + radius)
    }

    #[must_use]
    pub const fn center(&self) -> Point {
        self.center
    }

    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub const fn facing(&self) -> SphereFacing {
        self.facing
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

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::EuclideanSpace;

    const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    #[test]
    #[should_panic(expected = "radius must be positive")]
    fn test_new_with_negative_radius() {
        let _system_under_test = Sphere::new(Point::origin(), -1.0, WHITE, Material::diffuse());
    }

    #[test]
    fn test_new_with_valid_radius() {
        let expected_center = Point::new(3.0, 4.0, 5.0);
        let expected_radius = 6.0;
        let expected_material = Material::metal(1.0, 0.0, 1.0);

        let system_under_test = Sphere::new(expected_center, expected_radius, WHITE, expected_material);

        assert_eq!(system_under_test.center(), expected_center);
        assert_eq!(system_under_test.radius(), expected_radius);
        assert_eq!(system_under_test.facing(), SphereFacing::Outward);
        assert_eq!(system_under_test.color(), WHITE);
        assert_eq!(system_under_test.material(), expected_material);
        assert_eq!(system_under_test.signed_radius(), expected_radius);
    }

    #[test]
    fn test_hollow_sphere_encodes_negative_radius() {
        let system_under_test = Sphere::hollow(Point::origin(), 0.25, WHITE, Material::diffuse().with_emission(1.0));
        assert_eq!(system_under_test.facing(), SphereFacing::Inward);
        assert_eq!(system_under_test.radius(), 0.25);
        assert_eq!(system_under_test.signed_radius(), -0.25);
    }

    #[test]
    fn test_from_signed_radius() {
        let hollow = Sphere::from_signed_radius(Point::origin(), -0.25, WHITE, Material::diffuse());
        assert_eq!(hollow.facing(), SphereFacing::Inward);
        assert_eq!(hollow.radius(), 0.25);

        let solid = Sphere::from_signed_radius(Point::origin(), 0.25, WHITE, Material::diffuse());
        assert_eq!(solid.facing(), SphereFacing::Outward);
    }

    #[test]
    fn test_penetration_depth() {
        let left = Sphere::new(Point::new(0.0, 0.0, 0.0), 1.0, WHITE, Material::diffuse());
        let touching = Sphere::new(Point::new(2.0, 0.0, 0.0), 1.0, WHITE, Material::diffuse());
        let crossing = Sphere::new(Point::new(1.5, 0.0, 0.0), 1.0, WHITE, Material::diffuse());

        assert_eq!(left.penetration_depth(&touching), 0.0);
        assert!(!left.overlaps(&touching));
        assert_eq!(left.penetration_depth(&crossing), 0.5);
        assert!(left.overlaps(&crossing));
    }

    #[test]
    fn test_bounding_box() {
        let system_under_test = Sphere::new(Point::new(1.0, 2.0, 3.0), 6.0, WHITE, Material::diffuse());

        let bounding_box = system_under_test.bounding_box();

        assert_eq!(bounding_box.min(), Point::new(-5.0, -4.0, -3.0));
        assert_eq!(bounding_box.max(), Point::new(7.0, 8.0, 9.0));
    }
}
