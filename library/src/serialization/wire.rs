use crate::geometry::aabb::Aabb;
use crate::geometry::alias::{Color, Point, Vector};
use crate::material::material_properties::Material;
use crate::material::params::MaterialParams;
use crate::objects::cuboid::Cuboid;
use crate::objects::mesh_instance::MeshInstance;
use crate::objects::quad::Quad;
use crate::objects::sphere::Sphere;
use crate::objects::triangle::Triangle;
use crate::scene::descriptor::SceneDescriptor;
use serde::Serialize;

type Triple = [f64; 3];
type Quartet = [f64; 4];

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WireSphere {
    center: Triple,
    color: Triple,
    /// Negative for hollow spheres.
    radius: f64,
    material: Quartet,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WireQuad {
    origin: Triple,
    local_x: Triple,
    local_y: Triple,
    color: Triple,
    material: Quartet,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WireBox {
    center: Triple,
    color: Triple,
    rotation: Triple,
    /// A negative first component turns the box into a disk of that radius.
    half_extents: Triple,
    material: Quartet,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WireTriangle {
    positions: [Triple; 3],
    normals: [Triple; 3],
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WireMesh {
    translation: Triple,
    scale: Triple,
    rotation: Triple,
    color: Triple,
    material: Quartet,
    first_triangle: usize,
    triangle_count: usize,
    bounding_box_min: Triple,
    bounding_box_max: Triple,
}

/// Scene layout consumed by the renderer. Field names are part of the
/// contract and must not change.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WireScene {
    spheres: Vec<WireSphere>,
    quads: Vec<WireQuad>,
    boxes: Vec<WireBox>,
    triangles: Vec<WireTriangle>,
    meshes: Vec<WireMesh>,
    #[serde(rename = "backgroundColor1")]
    background_top: Triple,
    #[serde(rename = "backgroundColor2")]
    background_bottom: Triple,
    focus_distance: f64,
    focus_angle: f64,
    sun_intensity: f64,
    samples_per_pixel: u32,
    max_bounces: u32,
}

pub fn encode_scene(scene: &SceneDescriptor) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&WireScene::from(scene))
}

fn point(source: Point) -> Triple {
    [source.x, source.y, source.z]
}

fn vector(source: Vector) -> Triple {
    [source.x, source.y, source.z]
}

fn color(source: Color) -> Triple {
    [source.red, source.green, source.blue]
}

fn material(source: Material) -> Quartet {
    MaterialParams::from(source).as_array()
}

impl From<&Sphere> for WireSphere {
    fn from(sphere: &Sphere) -> Self {
        WireSphere {
            center: point(sphere.center()),
            color: color(sphere.color()),
            radius: sphere.signed_radius(),
            material: material(sphere.material()),
        }
    }
}

impl From<&Quad> for WireQuad {
    fn from(quad: &Quad) -> Self {
        WireQuad {
            origin: point(quad.origin()),
            local_x: vector(quad.local_x()),
            local_y: vector(quad.local_y()),
            color: color(quad.color()),
            material: material(quad.material()),
        }
    }
}

impl From<&Cuboid> for WireBox {
    fn from(cuboid: &Cuboid) -> Self {
        WireBox {
            center: point(cuboid.center()),
            color: color(cuboid.color()),
            rotation: vector(cuboid.orientation()),
            half_extents: vector(cuboid.shape().encoded_half_extents()),
            material: material(cuboid.material()),
        }
    }
}

impl From<&Triangle> for WireTriangle {
    fn from(triangle: &Triangle) -> Self {
        let [a, b, c] = triangle.vertices();
        WireTriangle {
            positions: [point(a.position()), point(b.position()), point(c.position())],
            normals: [vector(a.normal()), vector(b.normal()), vector(c.normal())],
        }
    }
}

impl From<&MeshInstance> for WireMesh {
    fn from(mesh: &MeshInstance) -> Self {
        let placement = mesh.placement();
        let bounding_box: Aabb = mesh.bounding_box();
        WireMesh {
            translation: vector(placement.translation()),
            scale: vector(placement.scale()),
            rotation: vector(placement.rotation()),
            color: color(mesh.color()),
            material: material(mesh.material()),
            first_triangle: mesh.triangles().start().as_usize(),
            triangle_count: mesh.triangles().count(),
            bounding_box_min: point(bounding_box.min()),
            bounding_box_max: point(bounding_box.max()),
        }
    }
}

impl From<&SceneDescriptor> for WireScene {
    fn from(scene: &SceneDescriptor) -> Self {
        let environment = scene.environment();
        WireScene {
            spheres: scene.spheres().iter().map(WireSphere::from).collect(),
            quads: scene.quads().iter().map(WireQuad::from).collect(),
            boxes: scene.cuboids().iter().map(WireBox::from).collect(),
            triangles: scene.triangles().triangles().iter().map(WireTriangle::from).collect(),
            meshes: scene.meshes().iter().map(WireMesh::from).collect(),
            background_top: color(environment.background().top()),
            background_bottom: color(environment.background().bottom()),
            focus_distance: environment.focus().distance(),
            focus_angle: environment.focus().angle(),
            sun_intensity: environment.sun_intensity(),
            samples_per_pixel: environment.budget().samples_per_pixel(),
            max_bounces: environment.budget().max_bounces(),
        }
    }
}
