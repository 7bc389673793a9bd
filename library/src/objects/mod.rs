pub mod common_properties;
pub mod cuboid;
pub mod mesh_instance;
pub mod quad;
pub mod sphere;
pub mod triangle;
