use crate::geometry::alias;
use crate::geometry::axis::Axis;
use crate::geometry::epsilon::DEFAULT_EPSILON_F64;
use crate::geometry::transform::Transformation;
use alias::Point;
use alias::Vector;
use cgmath::AbsDiffEq;
use strum::IntoEnumIterator;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb {
    min: Point,
    max: Point,
}

/// Minimal box containing every vertex; `None` for an empty slice.
///
/// Emptiness is not treated as an error here: whether an empty vertex set is
/// acceptable is up to the caller.
#[must_use]
pub fn compute_aabb(vertices: &[Point]) -> Option<Aabb> {
    let (first, rest) = vertices.split_first()?;
    let mut result = Aabb { min: *first, max: *first };
    for vertex in rest {
        result.min = result.min.component_wise_min(*vertex);
        result.max = result.max.component_wise_max(*vertex);
    }
    Some(result)
}

impl Aabb {
    #[must_use]
    pub fn from_triangle(a: Point, b: Point, c: Point) -> Self {
        Aabb {
            min: a.component_wise_min(b).component_wise_min(c),
            max: a.component_wise_max(b).component_wise_max(c),
        }
    }

    #[must_use]
    pub fn from_points(a: Point, b: Point) -> Self {
        Aabb {
            min: a.component_wise_min(b),
            max: a.component_wise_max(b),
        }
    }

    #[must_use]
    pub fn make_union(left: Aabb, right: Aabb) -> Self {
        Aabb {
            min: left.min.component_wise_min(right.min),
            max: left.max.component_wise_max(right.max),
        }
    }

    /// Box around the eight transformed corners of `self`.
    #[must_use]
    pub fn transform(&self, transformation: &Transformation) -> Aabb {
        let corners: Vec<Point> = (0..8)
            .map(|mask: u32| {
                Point::new(
                    if mask & 1 == 0 { self.min.x } else { self.max.x },
                    if mask & 2 == 0 { self.min.y } else { self.max.y },
                    if mask & 4 == 0 { self.min.z } else { self.max.z },
                )
            })
            .map(|corner| transformation.of_point(&corner))
            .collect();
        compute_aabb(&corners).unwrap_or(*self)
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        Axis::iter().all(|axis| {
            let index = axis.as_index();
            self.min[index] <= point[index] && point[index] <= self.max[index]
        })
    }

    #[must_use]
    pub fn extent(&self) -> Vector {
        self.max - self.min
    }

    #[must_use]
    pub const fn min(&self) -> Point {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> Point {
        self.max
    }
}

pub trait MinMax {
    fn component_wise_min(self, other: Point) -> Self;
    fn component_wise_max(self, other: Point) -> Self;
}

impl MinMax for Point {
    #[must_use]
    fn component_wise_min(self, other: Point) -> Self {
        Point::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }
    #[must_use]
    fn component_wise_max(self, other: Point) -> Self {
        Point::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }
}

impl AbsDiffEq for Aabb {
    type Epsilon = f64;

    #[must_use]
    fn default_epsilon() -> Self::Epsilon {
        DEFAULT_EPSILON_F64
    }

    #[must_use]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        Point::abs_diff_eq(&self.min, &other.min, epsilon) && Point::abs_diff_eq(&self.max, &other.max, epsilon)
    }
}
