pub mod ingest;
pub mod mesh_warehouse;
mod smooth_normals;
