use crate::geometry::aabb::Aabb;
use crate::geometry::epsilon::DEFAULT_EPSILON_F64;
use crate::geometry::vertex::Vertex;
use cgmath::AbsDiffEq;
use std::ops::Add;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct TriangleIndex(pub(crate) usize);

impl TriangleIndex {
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0
    }
}

impl Add<usize> for TriangleIndex {
    type Output = TriangleIndex;
    fn add(self, right: usize) -> Self::Output {
        TriangleIndex(self.0 + right)
    }
}

pub(crate) enum TriangleVertex {
    A,
    B,
    C,
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Triangle {
    a: Vertex,
    b: Vertex,
    c: Vertex,
}

impl Triangle {
    #[must_use]
    pub const fn new(a: Vertex, b: Vertex, c: Vertex) -> Self {
        Self { a, b, c }
    }

    #[must_use]
    pub const fn vertices(&self) -> [Vertex; 3] {
        [self.a, self.b, self.c]
    }

    #[must_use]
    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_triangle(self.a.position(), self.b.position(), self.c.position())
    }
}

impl AbsDiffEq for Triangle {
    type Epsilon = f64;

    #[must_use]
    fn default_epsilon() -> Self::Epsilon {
        DEFAULT_EPSILON_F64
    }

    #[must_use]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
           Vertex::abs_diff_eq(&self.a, &other.a, epsilon)
        && Vertex::abs_diff_eq(&self.b, &other.b, epsilon)
        && Vertex::abs_diff_eq(&self.c, &other.c, epsilon)
    }
}

/// Half-open run `[start, start + count)` of triangles inside a [`TriangleBuffer`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct TriangleRange {
    start: TriangleIndex,
    count: usize,
}

impl TriangleRange {
    #[must_use]
    pub const fn new(start: TriangleIndex, count: usize) -> Self {
        TriangleRange { start, count }
    }

    #[must_use]
    pub const fn start(&self) -> TriangleIndex {
        self.start
    }

    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn end(&self) -> TriangleIndex {
        self.start + self.count
    }
}

/// Flat triangle storage shared by every mesh instance of a scene. Instances
/// refer to their triangles by range and never copy them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriangleBuffer {
    triangles: Vec<Triangle>,
}

impl TriangleBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, triangles: Vec<Triangle>) -> TriangleRange {
        let range = TriangleRange::new(TriangleIndex(self.triangles.len()), triangles.len());
        self.triangles.extend(triangles);
        range
    }

    #[must_use]
    pub fn slice(&self, range: TriangleRange) -> &[Triangle] {
        &self.triangles[range.start().as_usize()..range.end().as_usize()]
    }

    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}
