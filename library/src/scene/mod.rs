pub(crate) mod catalog;
pub mod descriptor;
pub mod registry;
