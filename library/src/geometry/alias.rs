use cgmath::Point3;
use cgmath::Vector3;
use palette::Srgb;

pub type Point = Point3<f64>;
pub type Vector = Vector3<f64>;
pub type Color = Srgb<f64>;

pub(crate) const VERTICES_IN_TRIANGLE: usize = 3;
