use crate::geometry::aabb::Aabb;
use crate::geometry::alias::Color;
use crate::geometry::transform::Placement;
use crate::material::material_properties::Material;
use crate::objects::common_properties::Appearance;
use crate::objects::triangle::TriangleRange;

/// A placed reference to triangles stored in the scene's shared buffer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MeshInstance {
    placement: Placement,
    appearance: Appearance,
    triangles: TriangleRange,
    bounding_box: Aabb,
}

impl MeshInstance {
    #[must_use]
    pub(crate) fn new(placement: Placement, color: Color, material: Material, triangles: TriangleRange, bounding_box: Aabb) -> Self {
        MeshInstance { placement, appearance: Appearance::new(color, material), triangles, bounding_box }
    }

    /// Model-space box; the renderer applies [`Self::placement`] itself.
    #[must_use]
    pub const fn bounding_box(&self) -> Aabb {
        self.bounding_box
    }

    #[must_use]
    pub fn world_bounding_box(&self) -> Aabb {
        self.bounding_box.transform(&self.placement.transformation())
    }

    #[must_use]
    pub const fn placement(&self) -> Placement {
        self.placement
    }

    #[must_use]
    pub const fn triangles(&self) -> TriangleRange {
        self.triangles
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.appearance.color()
    }

    #[must_use]
    pub const fn material(&self) -> Material {
        self.appearance.material()
    }
}
