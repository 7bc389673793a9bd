pub mod random_material;
pub mod scatter;
