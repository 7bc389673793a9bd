use crate::geometry::alias::Color;
use crate::material::material_properties::Material;

/// Base color and material owned by every primitive; nothing is inherited.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Appearance {
    color: Color,
    material: Material,
}

impl Appearance {
    #[must_use]
    pub fn new(color: Color, material: Material) -> Self {
        assert!(is_unit(color.red) && is_unit(color.green) && is_unit(color.blue), "color components must be within [0, 1]");
        Appearance { color, material }
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub const fn material(&self) -> Material {
        self.material
    }
}

fn is_unit(component: f64) -> bool {
    (0.0..=1.0).contains(&component)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appearance_new() {
        let expected_color = Color::new(0.1, 0.2, 0.3);
        let expected_material = Material::metal(1.0, 0.0, 1.0);

        let system_under_test = Appearance::new(expected_color, expected_material);

        assert_eq!(system_under_test.color(), expected_color);
        assert_eq!(system_under_test.material(), expected_material);
    }

    #[test]
    #[should_panic(expected = "color components must be within [0, 1]")]
    fn test_appearance_rejects_out_of_range_color() {
        let _system_under_test = Appearance::new(Color::new(1.5, 0.0, 0.0), Material::diffuse());
    }
}
