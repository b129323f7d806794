use bytemuck::{Pod, Zeroable};

/// Per-point data for the star-field pass. 8 floats = 32 bytes per point.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct PointInstance {
    pub x: f32,
    pub y: f32,
    /// Diameter in pixels.
    pub size: f32,
    pub depth: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub alpha: f32,
}

impl PointInstance {
    pub const FLOATS: usize = 8;
}

/// Buffer of projected points. Order is irrelevant (points are additive).
pub struct PointBuffer {
    points: Vec<PointInstance>,
    max: usize,
}

impl PointBuffer {
    pub fn with_capacity(max: usize) -> Self {
        Self {
            points: Vec::with_capacity(max),
            max,
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Push a point; silently dropped once the buffer is full.
    pub fn push(&mut self, point: PointInstance) -> bool {
        if self.points.len() >= self.max {
            return false;
        }
        self.points.push(point);
        true
    }

    pub fn as_slice(&self) -> &[PointInstance] {
        &self.points
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn points_ptr(&self) -> *const f32 {
        self.points.as_ptr() as *const f32
    }
}
