//#![deny(warnings)]

#![allow(clippy::bool_assert_comparison)]
#![allow(clippy::bool_comparison)]
#![allow(clippy::needless_range_loop)]

pub mod geometry;
pub mod material;
pub mod mesh;
pub mod objects;
pub mod placement;
pub mod scene;
pub mod serialization;
