pub mod material_properties;
pub mod params;
