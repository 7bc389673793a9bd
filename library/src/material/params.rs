use crate::material::material_properties::{Material, SurfaceResponse};

/// Renderer-side material quartet.
///
/// * `x` - specular mix in `[0, 1]`; negative marks a dielectric whose
///   refractive index is `|x|`.
/// * `y` - fuzz for metals, frost for dielectrics.
/// * `z` - secondary reflectivity / metallic weight.
/// * `w` - emission multiplier, `0` for non-emissive surfaces.
///
/// Every quartet decodes to some [`Material`]; there is no separate kind tag.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MaterialParams {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl MaterialParams {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        MaterialParams { x, y, z, w }
    }

    #[must_use]
    pub const fn as_array(&self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    #[must_use]
    pub fn is_dielectric(&self) -> bool {
        self.x < 0.0
    }
}

impl From<Material> for MaterialParams {
    fn from(material: Material) -> Self {
        let emission = material.emission();
        match material.response() {
            SurfaceResponse::Diffuse => MaterialParams::new(0.0, 0.0, 0.0, emission),
            SurfaceResponse::Metal { metallic, fuzz, reflectivity } => MaterialParams::new(metallic, fuzz, reflectivity, emission),
            SurfaceResponse::Dielectric { refractive_index, frost, reflectivity } => MaterialParams::new(-refractive_index, frost, reflectivity, emission),
        }
    }
}

impl From<MaterialParams> for Material {
    fn from(params: MaterialParams) -> Self {
        let response = if params.is_dielectric() {
            SurfaceResponse::Dielectric { refractive_index: params.x.abs(), frost: params.y, reflectivity: params.z }
        } else if params.x == 0.0 && params.y == 0.0 && params.z == 0.0 {
            SurfaceResponse::Diffuse
        } else {
            SurfaceResponse::Metal { metallic: params.x, fuzz: params.y, reflectivity: params.z }
        };
        Material::from_parts(response, params.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::material_properties::MaterialKind;
    use cgmath::assert_abs_diff_eq;
    use rstest::rstest;

    #[test]
    fn test_encode_diffuse() {
        assert_eq!(MaterialParams::from(Material::diffuse()), MaterialParams::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_encode_metal() {
        let actual = MaterialParams::from(Material::metal(0.7, 0.3, 0.5));
        assert_eq!(actual, MaterialParams::new(0.7, 0.3, 0.5, 0.0));
    }

    #[test]
    fn test_encode_dielectric_uses_negative_sentinel() {
        let actual = MaterialParams::from(Material::dielectric(1.5, 0.1, 0.9));
        assert!(actual.is_dielectric());
        assert_eq!(actual, MaterialParams::new(-1.5, 0.1, 0.9, 0.0));
    }

    #[test]
    fn test_encode_emissive_keeps_surface() {
        let actual = MaterialParams::from(Material::metal(0.6, 0.4, 0.0).with_emission(1.0));
        assert_eq!(actual, MaterialParams::new(0.6, 0.4, 0.0, 1.0));
    }

    #[test]
    fn test_metal_round_trip() {
        let encoded = MaterialParams::from(Material::metal(0.7, 0.3, 1.0));
        let decoded = Material::from(encoded);
        match decoded.response() {
            SurfaceResponse::Metal { metallic, fuzz, .. } => {
                assert_abs_diff_eq!(metallic, 0.7, epsilon = 1e-12);
                assert_abs_diff_eq!(fuzz, 0.3, epsilon = 1e-12);
            }
            other => panic!("expected metal, got {other:?}"),
        }
    }

    #[rstest]
    #[case(-1.0, 1.0)]
    #[case(-1.5, 1.5)]
    #[case(-2.4, 2.4)]
    fn test_dielectric_sentinel_decodes_to_magnitude(#[case] x: f64, #[case] expected_index: f64) {
        let decoded = Material::from(MaterialParams::new(x, 0.001, 0.9, 0.0));
        match decoded.response() {
            SurfaceResponse::Dielectric { refractive_index, frost, reflectivity } => {
                assert_eq!(refractive_index, expected_index);
                assert_eq!(frost, 0.001);
                assert_eq!(reflectivity, 0.9);
            }
            other => panic!("expected dielectric, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_zero_is_diffuse() {
        let decoded = Material::from(MaterialParams::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(decoded, Material::diffuse());
    }

    #[test]
    fn test_decode_emission_only_is_emissive_diffuse() {
        let decoded = Material::from(MaterialParams::new(0.0, 0.0, 0.0, 3.0));
        assert_eq!(decoded.kind(), MaterialKind::Diffuse);
        assert!(decoded.is_emissive());
        assert_eq!(decoded.emission(), 3.0);
    }

    #[rstest]
    #[case(MaterialParams::new(0.0, 0.0, 0.6, 0.0), MaterialKind::Metal)]
    #[case(MaterialParams::new(0.9, 0.0, 0.6, 0.0), MaterialKind::Metal)]
    #[case(MaterialParams::new(0.1, 0.9, 0.0, 1.0), MaterialKind::Metal)]
    #[case(MaterialParams::new(-1.0, 1.0, 0.0, 0.0), MaterialKind::Glass)]
    #[case(MaterialParams::new(0.0, 0.0, 0.0, 5.0), MaterialKind::Diffuse)]
    fn test_every_quartet_survives_decode_encode(#[case] params: MaterialParams, #[case] expected_kind: MaterialKind) {
        let decoded = Material::from(params);
        assert_eq!(decoded.kind(), expected_kind);
        assert_eq!(MaterialParams::from(decoded), params);
    }
}
