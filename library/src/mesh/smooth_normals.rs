use crate::geometry::alias::{Point, Vector, VERTICES_IN_TRIANGLE};
use cgmath::{InnerSpace, Zero};

/// Per-vertex normals averaged from the adjacent faces. The face normals are
/// left unnormalized so larger faces weigh more. Vertices without a usable
/// face get `+Y`.
#[must_use]
pub(super) fn smooth_normals(positions: &[Point], indices: &[u32]) -> Vec<Vector> {
    let mut accumulated = vec![Vector::zero(); positions.len()];

    for triangle in indices.chunks_exact(VERTICES_IN_TRIANGLE) {
        let [a, b, c] = [triangle[0] as usize, triangle[1] as usize, triangle[2] as usize];
        if a >= positions.len() || b >= positions.len() || c >= positions.len() {
            continue;
        }
        let face_normal = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        for vertex in [a, b, c] {
            accumulated[vertex] += face_normal;
        }
    }

    accumulated
        .into_iter()
        .map(|normal| if normal.magnitude2() > 0.0 { normal.normalize() } else { Vector::unit_y() })
        .collect()
}
