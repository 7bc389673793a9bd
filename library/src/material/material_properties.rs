use strum_macros::{Display, EnumCount, EnumIter};

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumCount, EnumIter, Display)]
pub enum MaterialKind {
    Diffuse,
    Metal,
    Glass,
}

impl Default for MaterialKind {
    fn default() -> Self {
        Self::Diffuse
    }
}

/// How a surface scatters light, independent of whether it also emits.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SurfaceResponse {
    Diffuse,
    Metal {
        metallic: f64,
        fuzz: f64,
        reflectivity: f64,
    },
    Dielectric {
        refractive_index: f64,
        frost: f64,
        reflectivity: f64,
    },
}

impl SurfaceResponse {
    #[must_use]
    pub const fn kind(&self) -> MaterialKind {
        match self {
            SurfaceResponse::Diffuse => MaterialKind::Diffuse,
            SurfaceResponse::Metal { .. } => MaterialKind::Metal,
            SurfaceResponse::Dielectric { .. } => MaterialKind::Glass,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    response: SurfaceResponse,
    emission: f64,
}

impl Material {
    #[must_use]
    pub const fn diffuse() -> Self {
        Self { response: SurfaceResponse::Diffuse, emission: 0.0 }
    }

    #[must_use]
    pub fn metal(metallic: f64, fuzz: f64, reflectivity: f64) -> Self {
        assert!(metallic >= 0.0, "metallic weight must be non-negative");
        Self { response: SurfaceResponse::Metal { metallic, fuzz, reflectivity }, emission: 0.0 }
    }

    #[must_use]
    pub fn dielectric(refractive_index: f64, frost: f64, reflectivity: f64) -> Self {
        assert!(refractive_index > 0.0, "refractive index must be positive");
        Self { response: SurfaceResponse::Dielectric { refractive_index, frost, reflectivity }, emission: 0.0 }
    }

    pub fn with_emission(mut self, intensity: f64) -> Self {
        assert!(intensity >= 0.0, "emission intensity must be non-negative");
        self.emission = intensity;
        self
    }

    #[must_use]
    pub(crate) const fn from_parts(response: SurfaceResponse, emission: f64) -> Self {
        Self { response, emission }
    }

    #[must_use]
    pub const fn response(&self) -> SurfaceResponse {
        self.response
    }

    #[must_use]
    pub const fn emission(&self) -> f64 {
        self.emission
    }

    #[must_use]
    pub fn is_emissive(&self) -> bool {
        self.emission > 0.0
    }

    #[must_use]
    pub const fn kind(&self) -> MaterialKind {
        self.response.kind()
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::diffuse()
    }
}
