use crate::mesh::ingest::MeshIngestError;
use crate::mesh::mesh_warehouse::MeshLoadError;
use crate::placement::scatter::ScatterSettings;
use crate::scene::catalog;
use crate::scene::descriptor::SceneDescriptor;
use log::info;
use rand::RngCore;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter, EnumString};
use thiserror::Error;

pub const DEFAULT_ASSETS_DIRECTORY: &str = "assets";
pub const DEFAULT_SPHERE_COUNT: usize = 4;

#[derive(Error, Debug)]
pub enum SceneError {
    #[error("no scene named {name:?}")]
    SceneNotFound { name: String },
    #[error("no scene with index {index}")]
    SceneIndexOutOfRange { index: usize },
    #[error("failed to load mesh: {0}")]
    MeshLoad(#[from] MeshLoadError),
    #[error("failed to ingest mesh: {0}")]
    MeshIngest(#[from] MeshIngestError),
}

/// Every scene the catalogue can assemble, in presentation order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumCount, EnumIter, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum SceneId {
    Spheres,
    Night,
    Basic,
    Metal,
    Fuzz,
    Specular,
    Emissive,
    Dielectric,
    Cubes,
    Cornell,
    Mirror,
    Infinite,
    Bunny,
    #[strum(to_string = "Suzanne", serialize = "Suzzanne")]
    Suzanne,
    Person,
    #[strum(to_string = "CircularPlane", serialize = "circular_plane")]
    CircularPlane,
}

impl SceneId {
    pub fn catalogue() -> impl Iterator<Item = SceneId> {
        SceneId::iter()
    }

    pub fn from_name(name: &str) -> Result<SceneId, SceneError> {
        SceneId::from_str(name).map_err(|_| SceneError::SceneNotFound { name: name.to_string() })
    }

    pub fn from_index(index: usize) -> Result<SceneId, SceneError> {
        SceneId::iter().nth(index).ok_or(SceneError::SceneIndexOutOfRange { index })
    }

    pub fn assemble(self, context: &mut AssemblyContext) -> Result<SceneDescriptor, SceneError> {
        let scene = match self {
            SceneId::Spheres => catalog::spheres::spheres(context),
            SceneId::Night => catalog::spheres::night(context),
            SceneId::Basic => catalog::showcase::basic(),
            SceneId::Metal => catalog::showcase::metal(),
            SceneId::Fuzz => catalog::showcase::fuzz(),
            SceneId::Specular => catalog::showcase::specular(),
            SceneId::Emissive => catalog::showcase::emissive(),
            SceneId::Dielectric => catalog::showcase::dielectric(),
            SceneId::Cubes => catalog::showcase::cubes(),
            SceneId::Cornell => catalog::rooms::cornell(),
            SceneId::Mirror => catalog::rooms::mirror(),
            SceneId::Infinite => catalog::rooms::infinite(),
            SceneId::Bunny => catalog::meshes::bunny(context)?,
            SceneId::Suzanne => catalog::meshes::suzanne(context)?,
            SceneId::Person => catalog::rooms::person(),
            SceneId::CircularPlane => catalog::showcase::circular_plane(),
        };

        info!(
            "assembled {}: {} spheres ({} degraded placements), {} quads, {} boxes, {} meshes over {} triangles",
            self,
            scene.spheres().len(),
            scene.degraded_placements(),
            scene.quads().len(),
            scene.cuboids().len(),
            scene.meshes().len(),
            scene.triangles().len(),
        );
        Ok(scene)
    }
}

/// Per-assembly settings and the randomness source for procedural content.
pub struct AssemblyContext<'a> {
    assets_directory: PathBuf,
    sphere_count: usize,
    scatter_settings: ScatterSettings,
    rng: &'a mut dyn RngCore,
}

impl<'a> AssemblyContext<'a> {
    #[must_use]
    pub fn new(rng: &'a mut dyn RngCore) -> Self {
        AssemblyContext {
            assets_directory: PathBuf::from(DEFAULT_ASSETS_DIRECTORY),
            sphere_count: DEFAULT_SPHERE_COUNT,
            scatter_settings: ScatterSettings::default(),
            rng,
        }
    }

    #[must_use]
    pub fn with_assets_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.assets_directory = directory.into();
        self
    }

    #[must_use]
    pub fn with_sphere_count(mut self, count: usize) -> Self {
        self.sphere_count = count;
        self
    }

    #[must_use]
    pub fn with_scatter_settings(mut self, settings: ScatterSettings) -> Self {
        self.scatter_settings = settings;
        self
    }

    #[must_use]
    pub fn assets_directory(&self) -> &Path {
        &self.assets_directory
    }

    #[must_use]
    pub fn asset(&self, file_name: &str) -> PathBuf {
        self.assets_directory.join(file_name)
    }

    #[must_use]
    pub const fn sphere_count(&self) -> usize {
        self.sphere_count
    }

    #[must_use]
    pub const fn scatter_settings(&self) -> &ScatterSettings {
        &self.scatter_settings
    }

    pub fn rng(&mut self) -> &mut (dyn RngCore + 'a) {
        &mut *self.rng
    }
}
