use glam::Vec3;
use crate::components::mesh::SDFColor;

/// A static cloud of world-space points rendered as size-attenuated dots.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud {
    pub positions: Vec<Vec3>,
    pub color: SDFColor,
    /// Point size in world units (projected with perspective, like the sphere radius).
    pub size: f32,
}

impl PointCloud {
    pub fn new(positions: Vec<Vec3>, color: SDFColor, size: f32) -> Self {
        Self { positions, color, size }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
