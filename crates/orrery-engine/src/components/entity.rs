use glam::Vec3;
use crate::api::types::EntityId;
use crate::components::mesh::MeshComponent;
use crate::components::points::PointCloud;

/// Fat Entity: a single struct with optional components.
/// Designed for simplicity over ECS purity.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Whether this entity is active (inactive entities are neither drawn nor hit).
    pub active: bool,
    /// Position in world space.
    pub pos: Vec3,
    /// Self-rotation about the world Y axis, in radians.
    pub spin: f32,
    /// SDF mesh (optional; entities without a mesh or points are invisible).
    pub mesh: Option<MeshComponent>,
    /// Point cloud, positions relative to `pos`.
    pub points: Option<PointCloud>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec3::ZERO,
            spin: 0.0,
            mesh: None,
            points: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_mesh(mut self, mesh: MeshComponent) -> Self {
        self.mesh = Some(mesh);
        self
    }

    pub fn with_points(mut self, points: PointCloud) -> Self {
        self.points = Some(points);
        self
    }
}
