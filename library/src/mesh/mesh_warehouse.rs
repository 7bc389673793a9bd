use crate::geometry::alias::{Point, Vector, VERTICES_IN_TRIANGLE};
use crate::geometry::axis::Axis;
use crate::geometry::vertex::Vertex;
use crate::mesh::smooth_normals::smooth_normals;
use log::{debug, warn};
use obj::raw::parse_obj;
use obj::{Obj, ObjError};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use strum::EnumCount;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeshLoadError {
    #[error("io problem while loading mesh: {what:?}")]
    IoError { what: String },
    #[error("format problem while loading mesh: {what:?}")]
    FormatError { what: String },
    #[error("invalid mesh content: {what:?}")]
    ContentError { what: String },
}

/// Vertices and triangle indices exactly as they came from the file.
#[derive(Clone, Debug, PartialEq)]
pub struct RawMesh {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl RawMesh {
    #[must_use]
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        RawMesh { vertices, indices }
    }

    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct WarehouseSlot(pub(crate) usize);

#[derive(Default)]
pub struct MeshWarehouse {
    prototypes: Vec<RawMesh>,
}

impl MeshWarehouse {
    #[must_use]
    pub fn new() -> Self {
        Self { prototypes: Vec::new() }
    }

    /// Reads a Wavefront OBJ file. Files without `vn` records get smooth
    /// normals synthesized from the face geometry.
    pub fn load(&mut self, source_file: &Path) -> Result<WarehouseSlot, MeshLoadError> {
        let file = File::open(source_file).map_err(|e| MeshLoadError::IoError { what: format!("{}: {}", source_file.display(), e) })?;
        let raw = parse_obj(BufReader::new(file)).map_err(|e| MeshWarehouse::translate_error(e))?;

        let mesh = if raw.normals.is_empty() {
            let obj: Obj<obj::Position, u32> = Obj::new(raw).map_err(|e| MeshWarehouse::translate_error(e))?;
            warn!("{} carries no normals, smoothing them from faces", source_file.display());
            let positions: Vec<Point> = obj.vertices.iter().map(|v| MeshWarehouse::point(v.position)).collect();
            let normals = smooth_normals(&positions, &obj.indices);
            let vertices = positions.into_iter().zip(normals).map(|(position, normal)| Vertex::new(position, normal)).collect();
            RawMesh { vertices, indices: obj.indices }
        } else {
            let obj: Obj<obj::Vertex, u32> = Obj::new(raw).map_err(|e| MeshWarehouse::translate_error(e))?;
            let vertices = obj.vertices.iter().map(|v| Vertex::new(MeshWarehouse::point(v.position), MeshWarehouse::vector(v.normal))).collect();
            RawMesh { vertices, indices: obj.indices }
        };

        if mesh.indices.is_empty() || mesh.vertices.is_empty() {
            return Err(MeshLoadError::ContentError { what: "empty mesh".to_string() });
        }

        debug!("loaded {}: {} vertices, {} triangles", source_file.display(), mesh.vertices.len(), mesh.indices.len() / VERTICES_IN_TRIANGLE);
        self.prototypes.push(mesh);

        Ok(WarehouseSlot(self.prototypes.len() - 1))
    }

    #[must_use]
    pub fn prototype(&self, slot: WarehouseSlot) -> &RawMesh {
        &self.prototypes[slot.0]
    }

    #[must_use]
    fn point(victim: [f32; Axis::COUNT]) -> Point {
        Point::new(victim[Axis::X as usize] as f64, victim[Axis::Y as usize] as f64, victim[Axis::Z as usize] as f64)
    }

    #[must_use]
    fn vector(victim: [f32; Axis::COUNT]) -> Vector {
        Vector::new(victim[Axis::X as usize] as f64, victim[Axis::Y as usize] as f64, victim[Axis::Z as usize] as f64)
    }

    #[must_use]
    fn translate_error(from: ObjError) -> MeshLoadError {
        match from {
            ObjError::Io(_) => MeshLoadError::IoError { what: from.to_string() },
            ObjError::ParseInt(_) => MeshLoadError::FormatError { what: from.to_string() },
            ObjError::ParseFloat(_) => MeshLoadError::FormatError { what: from.to_string() },
            ObjError::Load(_) => MeshLoadError::FormatError { what: from.to_string() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::assert_abs_diff_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SINGLE_TRIANGLE_OBJ_FILE: &str = r#"
        v  0.0  1.0  0.0
        v -1.0 -1.0  0.0
        v  1.0 -1.0  0.0

        vn  0.0  0.0  1.0

        f 1//1 2//1 3//1
        "#;

    const POSITIONS_ONLY_OBJ_FILE: &str = r#"
        v  0.0  0.0  0.0
        v  1.0  0.0  0.0
        v  0.0  1.0  0.0

        f 1 2 3
        "#;

    fn write_temp_file(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new_in("./").expect("failed to create temp file");
        temp_file.write_all(content.as_bytes()).expect("failed to write dummy data into the temp file");
        temp_file
    }

    #[test]
    fn test_add_mesh() {
        let temp_file = write_temp_file(SINGLE_TRIANGLE_OBJ_FILE);

        let mut system_under_test = MeshWarehouse::new();
        let first_mesh_index = system_under_test.load(temp_file.path()).unwrap();
        let second_mesh_index = system_under_test.load(temp_file.path()).unwrap();
        assert_ne!(first_mesh_index, second_mesh_index);

        assert_eq!(system_under_test.prototype(first_mesh_index), system_under_test.prototype(second_mesh_index));
        let positions: Vec<Point> = system_under_test.prototype(second_mesh_index).vertices().iter().map(|v| v.position()).collect();
        assert_eq!(positions, vec![Point::new(0.0, 1.0, 0.0), Point::new(-1.0, -1.0, 0.0), Point::new(1.0, -1.0, 0.0)]);
    }

    #[test]
    fn test_load_keeps_file_normals() {
        let temp_file = write_temp_file(SINGLE_TRIANGLE_OBJ_FILE);
        let mut system_under_test = MeshWarehouse::new();

        let slot = system_under_test.load(temp_file.path()).unwrap();

        let prototype = system_under_test.prototype(slot);
        assert_eq!(prototype.indices().len(), 3);
        for vertex in prototype.vertices() {
            assert_eq!(vertex.normal(), Vector::new(0.0, 0.0, 1.0));
        }
    }

    #[test]
    fn test_load_synthesizes_missing_normals() {
        let temp_file = write_temp_file(POSITIONS_ONLY_OBJ_FILE);
        let mut system_under_test = MeshWarehouse::new();

        let slot = system_under_test.load(temp_file.path()).unwrap();

        let prototype = system_under_test.prototype(slot);
        assert_eq!(prototype.vertices().len(), 3);
        for vertex in prototype.vertices() {
            assert_abs_diff_eq!(vertex.normal(), Vector::new(0.0, 0.0, 1.0), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_load_missing_file() {
        let mut system_under_test = MeshWarehouse::new();

        let actual = system_under_test.load(Path::new("./no-such-mesh.obj"));

        assert!(matches!(actual, Err(MeshLoadError::IoError { .. })));
    }

    #[test]
    fn test_load_empty_file() {
        let temp_file = write_temp_file("# nothing here\n");
        let mut system_under_test = MeshWarehouse::new();

        let actual = system_under_test.load(temp_file.path());

        assert!(matches!(actual, Err(MeshLoadError::ContentError { .. })));
    }
}
