use crate::geometry::alias::{Color, Point, Vector};
use crate::geometry::transform::Placement;
use crate::material::material_properties::Material;
use crate::mesh::mesh_warehouse::MeshWarehouse;
use crate::placement::scatter::scatter_spheres;
use crate::scene::catalog::default_ground;
use crate::scene::descriptor::{SceneBuilder, SceneDescriptor};
use crate::scene::registry::{AssemblyContext, SceneError};

pub(crate) const BUNNY_FILE: &str = "stanford-bunny.obj";
pub(crate) const SUZANNE_FILE: &str = "suzanne.obj";

const BUNNY_COMPANIONS: usize = 3;

pub(crate) fn bunny(context: &mut AssemblyContext) -> Result<SceneDescriptor, SceneError> {
    let mut warehouse = MeshWarehouse::new();
    let slot = warehouse.load(&context.asset(BUNNY_FILE))?;

    let offset = Point::new(0.0, -1.0, -2.0);
    let settings = *context.scatter_settings();
    let companions = scatter_spheres(BUNNY_COMPANIONS, offset, &settings, &[], context.rng());

    let mut builder = SceneBuilder::new();
    builder.add_sphere(default_ground());
    builder.add_scatter(companions);
    builder.add_mesh(
        warehouse.prototype(slot),
        Placement::new(Vector::new(0.0, -1.0, -4.0), Vector::new(2.0, 2.0, 2.0), Vector::new(0.0, 0.2, 0.0)),
        Color::new(0.4, 0.3, 0.6),
        Material::metal(1.0, 0.0, 0.5),
    )?;
    builder.with_focus(4.0, 0.2);
    Ok(builder.build())
}

pub(crate) fn suzanne(context: &mut AssemblyContext) -> Result<SceneDescriptor, SceneError> {
    let mut warehouse = MeshWarehouse::new();
    let slot = warehouse.load(&context.asset(SUZANNE_FILE))?;

    let mut builder = SceneBuilder::new();
    builder.add_mesh(
        warehouse.prototype(slot),
        Placement::new(Vector::new(0.0, 0.0, -6.0), Vector::new(2.0, 2.0, 2.0), Vector::new(0.0, 0.0, 0.0)),
        Color::new(0.6, 0.3, 0.7),
        Material::diffuse(),
    )?;
    builder.with_focus(5.0, 0.2);
    Ok(builder.build())
}
