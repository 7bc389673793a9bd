use crate::geometry::aabb::Aabb;
use crate::geometry::alias::Color;
use crate::geometry::transform::Placement;
use crate::material::material_properties::Material;
use crate::mesh::ingest::{ingest_mesh, MeshIngestError};
use crate::mesh::mesh_warehouse::RawMesh;
use crate::objects::cuboid::Cuboid;
use crate::objects::mesh_instance::MeshInstance;
use crate::objects::quad::Quad;
use crate::objects::sphere::Sphere;
use crate::objects::triangle::TriangleBuffer;
use crate::placement::scatter::Scatter;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct SphereIndex(pub(crate) usize);
impl From<usize> for SphereIndex {
    fn from(value: usize) -> Self {
        SphereIndex(value)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct QuadIndex(pub(crate) usize);
impl From<usize> for QuadIndex {
    fn from(value: usize) -> Self {
        QuadIndex(value)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CuboidIndex(pub(crate) usize);
impl From<usize> for CuboidIndex {
    fn from(value: usize) -> Self {
        CuboidIndex(value)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct MeshIndex(pub(crate) usize);
impl From<usize> for MeshIndex {
    fn from(value: usize) -> Self {
        MeshIndex(value)
    }
}

/// Sky colors the renderer blends between for rays escaping the scene.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SkyGradient {
    top: Color,
    bottom: Color,
}

impl SkyGradient {
    #[must_use]
    pub fn new(top: Color, bottom: Color) -> Self {
        for component in [top.red, top.green, top.blue, bottom.red, bottom.green, bottom.blue] {
            assert!((0.0..=1.0).contains(&component), "background components must be within [0, 1]");
        }
        SkyGradient { top, bottom }
    }

    #[must_use]
    pub const fn top(&self) -> Color {
        self.top
    }

    #[must_use]
    pub const fn bottom(&self) -> Color {
        self.bottom
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Focus {
    distance: f64,
    angle: f64,
}

impl Focus {
    #[must_use]
    pub fn new(distance: f64, angle: f64) -> Self {
        assert!(distance > 0.0, "focus distance must be positive");
        assert!(angle >= 0.0, "focus angle must be non-negative");
        Focus { distance, angle }
    }

    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    #[must_use]
    pub const fn angle(&self) -> f64 {
        self.angle
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RenderBudget {
    samples_per_pixel: u32,
    max_bounces: u32,
}

impl RenderBudget {
    #[must_use]
    pub fn new(samples_per_pixel: u32, max_bounces: u32) -> Self {
        assert!(samples_per_pixel > 0, "at least one sample per pixel is required");
        RenderBudget { samples_per_pixel, max_bounces }
    }

    #[must_use]
    pub const fn samples_per_pixel(&self) -> u32 {
        self.samples_per_pixel
    }

    #[must_use]
    pub const fn max_bounces(&self) -> u32 {
        self.max_bounces
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Environment {
    background: SkyGradient,
    focus: Focus,
    sun_intensity: f64,
    budget: RenderBudget,
}

impl Environment {
    #[must_use]
    pub const fn background(&self) -> SkyGradient {
        self.background
    }

    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    #[must_use]
    pub const fn sun_intensity(&self) -> f64 {
        self.sun_intensity
    }

    #[must_use]
    pub const fn budget(&self) -> RenderBudget {
        self.budget
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment {
            background: SkyGradient::new(Color::new(0.0, 0.5, 1.0), Color::new(1.0, 1.0, 1.0)),
            focus: Focus::new(5.0, 0.0),
            sun_intensity: 1.0,
            budget: RenderBudget::new(1, 10),
        }
    }
}

/// Everything the renderer needs for one frame. Produced by
/// [`SceneBuilder::build`] and read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneDescriptor {
    spheres: Vec<Sphere>,
    quads: Vec<Quad>,
    cuboids: Vec<Cuboid>,
    meshes: Vec<MeshInstance>,
    triangles: TriangleBuffer,
    environment: Environment,
    degraded_placements: usize,
}

impl SceneDescriptor {
    #[must_use]
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    #[must_use]
    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }

    #[must_use]
    pub fn cuboids(&self) -> &[Cuboid] {
        &self.cuboids
    }

    #[must_use]
    pub fn meshes(&self) -> &[MeshInstance] {
        &self.meshes
    }

    #[must_use]
    pub fn triangles(&self) -> &TriangleBuffer {
        &self.triangles
    }

    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Procedurally placed spheres that were accepted while still
    /// intersecting a neighbour.
    #[must_use]
    pub const fn degraded_placements(&self) -> usize {
        self.degraded_placements
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.spheres.len() + self.quads.len() + self.cuboids.len() + self.meshes.len()
    }

    /// World-space box around every primitive; `None` for an empty scene.
    #[must_use]
    pub fn bounds(&self) -> Option<Aabb> {
        self.spheres.iter().map(Sphere::bounding_box)
            .chain(self.quads.iter().map(Quad::bounding_box))
            .chain(self.cuboids.iter().map(Cuboid::bounding_box))
            .chain(self.meshes.iter().map(MeshInstance::world_bounding_box))
            .reduce(Aabb::make_union)
    }
}

#[derive(Default)]
pub struct SceneBuilder {
    spheres: Vec<Sphere>,
    quads: Vec<Quad>,
    cuboids: Vec<Cuboid>,
    meshes: Vec<MeshInstance>,
    triangles: TriangleBuffer,
    environment: Environment,
    degraded_placements: usize,
}

impl SceneBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sphere(&mut self, sphere: Sphere) -> SphereIndex {
        SceneBuilder::add_object(&mut self.spheres, sphere)
    }

    pub fn add_spheres<Spheres: IntoIterator<Item = Sphere>>(&mut self, spheres: Spheres) -> Vec<SphereIndex> {
        spheres.into_iter().map(|sphere| self.add_sphere(sphere)).collect()
    }

    /// Adds the scattered spheres and carries their degraded count over to
    /// the built descriptor.
    pub fn add_scatter(&mut self, scatter: Scatter) -> Vec<SphereIndex> {
        self.degraded_placements += scatter.degraded_placements();
        self.add_spheres(scatter.into_spheres())
    }

    pub fn add_quad(&mut self, quad: Quad) -> QuadIndex {
        SceneBuilder::add_object(&mut self.quads, quad)
    }

    pub fn add_cuboid(&mut self, cuboid: Cuboid) -> CuboidIndex {
        SceneBuilder::add_object(&mut self.cuboids, cuboid)
    }

    /// Copies the mesh triangles into the scene's shared buffer. On error
    /// the builder is left as it was.
    pub fn add_mesh(&mut self, source: &RawMesh, placement: Placement, color: Color, material: Material) -> Result<MeshIndex, MeshIngestError> {
        let instance = ingest_mesh(&mut self.triangles, source.vertices(), source.indices(), placement, color, material)?;
        Ok(SceneBuilder::add_object(&mut self.meshes, instance))
    }

    pub fn with_background(&mut self, top: Color, bottom: Color) -> &mut Self {
        self.environment.background = SkyGradient::new(top, bottom);
        self
    }

    pub fn with_focus(&mut self, distance: f64, angle: f64) -> &mut Self {
        self.environment.focus = Focus::new(distance, angle);
        self
    }

    pub fn with_sun_intensity(&mut self, intensity: f64) -> &mut Self {
        assert!(intensity >= 0.0, "sun intensity must be non-negative");
        self.environment.sun_intensity = intensity;
        self
    }

    pub fn with_render_budget(&mut self, samples_per_pixel: u32, max_bounces: u32) -> &mut Self {
        self.environment.budget = RenderBudget::new(samples_per_pixel, max_bounces);
        self
    }

    #[must_use]
    pub fn build(self) -> SceneDescriptor {
        SceneDescriptor {
            spheres: self.spheres,
            quads: self.quads,
            cuboids: self.cuboids,
            meshes: self.meshes,
            triangles: self.triangles,
            environment: self.environment,
            degraded_placements: self.degraded_placements,
        }
    }

    fn add_object<Object, ObjectIndex>(container: &mut Vec<Object>, object: Object) -> ObjectIndex
    where
        ObjectIndex: From<usize>,
    {
        let index = ObjectIndex::from(container.len());
        container.push(object);
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::alias::{Point, Vector};
    use crate::geometry::vertex::Vertex;
    use crate::placement::scatter::{scatter_spheres, ScatterSettings};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    fn unit_triangle() -> RawMesh {
        let normal = Vector::new(0.0, 0.0, 1.0);
        RawMesh::new(
            vec![
                Vertex::new(Point::new(0.0, 0.0, 0.0), normal),
                Vertex::new(Point::new(1.0, 0.0, 0.0), normal),
                Vertex::new(Point::new(0.0, 1.0, 0.0), normal),
            ],
            vec![0, 1, 2],
        )
    }

    fn identity() -> Placement {
        Placement::new(Vector::new(0.0, 0.0, 0.0), Vector::new(1.0, 1.0, 1.0), Vector::new(0.0, 0.0, 0.0))
    }

    #[test]
    fn test_environment_default() {
        let system_under_test = Environment::default();

        assert_eq!(system_under_test.background().top(), Color::new(0.0, 0.5, 1.0));
        assert_eq!(system_under_test.background().bottom(), Color::new(1.0, 1.0, 1.0));
        assert_eq!(system_under_test.focus().distance(), 5.0);
        assert_eq!(system_under_test.focus().angle(), 0.0);
        assert_eq!(system_under_test.sun_intensity(), 1.0);
        assert_eq!(system_under_test.budget().samples_per_pixel(), 1);
        assert_eq!(system_under_test.budget().max_bounces(), 10);
    }

    #[test]
    fn test_empty_builder_populates_every_field() {
        let system_under_test = SceneBuilder::new().build();

        assert!(system_under_test.spheres().is_empty());
        assert!(system_under_test.quads().is_empty());
        assert!(system_under_test.cuboids().is_empty());
        assert!(system_under_test.meshes().is_empty());
        assert!(system_under_test.triangles().is_empty());
        assert_eq!(system_under_test.primitive_count(), 0);
        assert_eq!(system_under_test.bounds(), None);
        assert_eq!(*system_under_test.environment(), Environment::default());
        assert_eq!(system_under_test.degraded_placements(), 0);
    }

    #[test]
    fn test_add_spheres_continues_indices() {
        let mut system_under_test = SceneBuilder::new();
        system_under_test.add_sphere(Sphere::new(Point::new(0.0, 0.0, -1.0), 0.5, WHITE, Material::diffuse()));

        let actual = system_under_test.add_spheres([
            Sphere::new(Point::new(1.0, 0.0, -1.0), 0.5, WHITE, Material::diffuse()),
            Sphere::new(Point::new(2.0, 0.0, -1.0), 0.5, WHITE, Material::diffuse()),
        ]);

        assert_eq!(actual, vec![SphereIndex(1), SphereIndex(2)]);
        assert_eq!(system_under_test.build().spheres().len(), 3);
    }

    #[test]
    fn test_add_scatter_keeps_degraded_count() {
        let crowded = ScatterSettings::new(0.5, 0.5, 0.0, 4);
        let mut rng = StdRng::seed_from_u64(0);
        let mut system_under_test = SceneBuilder::new();

        let first = system_under_test.add_scatter(scatter_spheres(3, Point::new(0.0, 0.0, 0.0), &crowded, &[], &mut rng));
        let second = system_under_test.add_scatter(scatter_spheres(2, Point::new(0.0, 0.0, -10.0), &crowded, &[], &mut rng));
        let scene = system_under_test.build();

        assert_eq!(first, vec![SphereIndex(0), SphereIndex(1), SphereIndex(2)]);
        assert_eq!(second, vec![SphereIndex(3), SphereIndex(4)]);
        assert_eq!(scene.spheres().len(), 5);
        assert_eq!(scene.degraded_placements(), 3);
    }

    #[test]
    fn test_add_objects_returns_sequential_indices() {
        let mut system_under_test = SceneBuilder::new();

        let first = system_under_test.add_sphere(Sphere::new(Point::new(0.0, 0.0, -1.0), 0.5, WHITE, Material::diffuse()));
        let second = system_under_test.add_sphere(Sphere::new(Point::new(1.0, 0.0, -1.0), 0.5, WHITE, Material::diffuse()));
        let quad = system_under_test.add_quad(Quad::new(Point::new(-1.0, -1.0, -2.0), Vector::unit_x(), Vector::unit_y(), WHITE, Material::diffuse()));
        let cuboid = system_under_test.add_cuboid(Cuboid::rectangular(Point::new(0.0, 0.0, -3.0), Vector::new(0.0, 0.0, 0.0), Vector::new(0.5, 0.5, 0.5), WHITE, Material::diffuse()));

        assert_eq!(first, SphereIndex(0));
        assert_eq!(second, SphereIndex(1));
        assert_eq!(quad, QuadIndex(0));
        assert_eq!(cuboid, CuboidIndex(0));
        assert_eq!(system_under_test.build().primitive_count(), 4);
    }

    #[test]
    fn test_add_mesh_fills_shared_buffer() {
        let mut system_under_test = SceneBuilder::new();

        let first = system_under_test.add_mesh(&unit_triangle(), identity(), WHITE, Material::diffuse()).unwrap();
        let second = system_under_test.add_mesh(&unit_triangle(), identity(), WHITE, Material::diffuse()).unwrap();
        let scene = system_under_test.build();

        assert_eq!(first, MeshIndex(0));
        assert_eq!(second, MeshIndex(1));
        assert_eq!(scene.triangles().len(), 2);
        assert_eq!(scene.meshes()[1].triangles().start().as_usize(), 1);
    }

    #[test]
    fn test_failed_mesh_leaves_builder_untouched() {
        let mut system_under_test = SceneBuilder::new();
        let broken = RawMesh::new(unit_triangle().vertices().to_vec(), vec![0, 1]);

        let actual = system_under_test.add_mesh(&broken, identity(), WHITE, Material::diffuse());

        assert_eq!(actual, Err(MeshIngestError::IllegalIndexCount { count: 2 }));
        let scene = system_under_test.build();
        assert!(scene.meshes().is_empty());
        assert!(scene.triangles().is_empty());
    }

    #[test]
    fn test_environment_setters() {
        let mut system_under_test = SceneBuilder::new();

        system_under_test
            .with_background(Color::new(0.0, 0.0, 0.0), Color::new(0.1, 0.2, 0.3))
            .with_focus(4.0, 0.2)
            .with_sun_intensity(0.1)
            .with_render_budget(5, 30);
        let scene = system_under_test.build();

        let environment = scene.environment();
        assert_eq!(environment.background(), SkyGradient::new(Color::new(0.0, 0.0, 0.0), Color::new(0.1, 0.2, 0.3)));
        assert_eq!(environment.focus(), Focus::new(4.0, 0.2));
        assert_eq!(environment.sun_intensity(), 0.1);
        assert_eq!(environment.budget(), RenderBudget::new(5, 30));
    }

    #[test]
    fn test_bounds_cover_every_primitive() {
        let mut system_under_test = SceneBuilder::new();
        system_under_test.add_sphere(Sphere::new(Point::new(0.0, 0.0, 0.0), 1.0, WHITE, Material::diffuse()));
        system_under_test.add_quad(Quad::new(Point::new(2.0, 0.0, 0.0), Vector::new(1.0, 0.0, 0.0), Vector::new(0.0, 3.0, 0.0), WHITE, Material::diffuse()));

        let actual = system_under_test.build().bounds().unwrap();

        assert_eq!(actual.min(), Point::new(-1.0, -1.0, -1.0));
        assert_eq!(actual.max(), Point::new(3.0, 3.0, 1.0));
    }

    #[test]
    #[should_panic(expected = "background components must be within [0, 1]")]
    fn test_background_out_of_range_rejected() {
        let _system_under_test = SkyGradient::new(Color::new(0.0, 0.0, 2.0), WHITE);
    }

    #[test]
    #[should_panic(expected = "at least one sample per pixel is required")]
    fn test_zero_samples_rejected() {
        let _system_under_test = RenderBudget::new(0, 10);
    }
}
