use crate::geometry::aabb::compute_aabb;
use crate::geometry::alias::{Color, Point, VERTICES_IN_TRIANGLE};
use crate::geometry::transform::Placement;
use crate::geometry::vertex::Vertex;
use crate::material::material_properties::Material;
use crate::objects::mesh_instance::MeshInstance;
use crate::objects::triangle::{Triangle, TriangleBuffer, TriangleVertex};
use log::debug;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshIngestError {
    #[error("mesh has no vertices")]
    EmptyVertices,
    #[error("mesh has no triangles")]
    NoTriangles,
    #[error("illegal indices count of {count}")]
    IllegalIndexCount { count: usize },
    #[error("index {index} is out of bounds for {vertex_count} vertices")]
    IndexOutOfBounds { index: u32, vertex_count: usize },
}

/// Appends the triangles described by `indices` to `buffer` and returns an
/// instance referring to them.
///
/// The bounding box of the result is computed over the raw vertex
/// positions, i.e. in model space; `placement` is not applied to it. Use
/// [`MeshInstance::world_bounding_box`] for the transformed box.
///
/// Validation happens before anything is written: on error `buffer` is
/// left untouched.
pub fn ingest_mesh(
    buffer: &mut TriangleBuffer,
    vertices: &[Vertex],
    indices: &[u32],
    placement: Placement,
    color: Color,
    material: Material,
) -> Result<MeshInstance, MeshIngestError> {
    if vertices.is_empty() {
        return Err(MeshIngestError::EmptyVertices);
    }
    if indices.len() % VERTICES_IN_TRIANGLE != 0 {
        return Err(MeshIngestError::IllegalIndexCount { count: indices.len() });
    }
    if indices.is_empty() {
        return Err(MeshIngestError::NoTriangles);
    }
    if let Some(&index) = indices.iter().find(|&&index| index as usize >= vertices.len()) {
        return Err(MeshIngestError::IndexOutOfBounds { index, vertex_count: vertices.len() });
    }

    let positions: Vec<Point> = vertices.iter().map(|vertex| vertex.position()).collect();
    let bounding_box = compute_aabb(&positions).ok_or(MeshIngestError::EmptyVertices)?;

    let triangles: Vec<Triangle> = indices
        .chunks(VERTICES_IN_TRIANGLE)
        .map(|triangle| {
            let a = vertices[triangle[TriangleVertex::A as usize] as usize];
            let b = vertices[triangle[TriangleVertex::B as usize] as usize];
            let c = vertices[triangle[TriangleVertex::C as usize] as usize];
            Triangle::new(a, b, c)
        })
        .collect();

    let range = buffer.append(triangles);
    debug!("ingested mesh of {} vertices into triangles [{}, {})", vertices.len(), range.start().as_usize(), range.end().as_usize());

    Ok(MeshInstance::new(placement, color, material, range, bounding_box))
}
