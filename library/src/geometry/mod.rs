pub mod aabb;
pub mod alias;
pub mod transform;
pub mod vertex;
pub(crate) mod axis;
pub(crate) mod epsilon;
