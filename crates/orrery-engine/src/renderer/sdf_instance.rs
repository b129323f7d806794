use bytemuck::{Pod, Zeroable};

/// Per-instance SDF sphere data read by the host renderer.
/// 16 floats = 64 bytes per instance.
///
/// Lighting is resolved on the Rust side: `light_*` is the unit direction
/// from the sphere center toward its key light in view space (x right,
/// y up, z toward the viewer) and `light_strength` its intensity.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct SDFInstance {
    /// Viewport position in pixels.
    pub x: f32,
    pub y: f32,
    /// Projected radius in pixels.
    pub radius: f32,
    /// Self-rotation about world Y, radians.
    pub rotation: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub shininess: f32,
    pub emissive: f32,
    /// View-space depth (world units in front of the camera).
    pub depth: f32,
    pub light_x: f32,
    pub light_y: f32,
    pub light_z: f32,
    pub light_strength: f32,
    pub _pad0: f32,
    pub _pad1: f32,
}

impl SDFInstance {
    pub const FLOATS: usize = 16;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Buffer of SDF instances in painter's order (farthest first).
pub struct SDFBuffer {
    instances: Vec<SDFInstance>,
}

impl SDFBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: SDFInstance) {
        self.instances.push(instance);
    }

    pub fn as_slice(&self) -> &[SDFInstance] {
        &self.instances
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    /// Sort back-to-front so nearer spheres are drawn over farther ones.
    pub fn sort_back_to_front(&mut self) {
        self.instances
            .sort_by(|a, b| b.depth.partial_cmp(&a.depth).unwrap_or(std::cmp::Ordering::Equal));
    }

    /// Drop instances beyond `max` (farthest ones go first once sorted).
    pub fn truncate_front(&mut self, max: usize) {
        if self.instances.len() > max {
            let excess = self.instances.len() - max;
            self.instances.drain(..excess);
        }
    }
}

impl Default for SDFBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_depth(depth: f32) -> SDFInstance {
        SDFInstance { depth, ..Default::default() }
    }

    #[test]
    fn sdf_instance_is_64_bytes() {
        assert_eq!(std::mem::size_of::<SDFInstance>(), 64);
        assert_eq!(SDFInstance::STRIDE_BYTES, 64);
    }

    #[test]
    fn sorts_farthest_first() {
        let mut buf = SDFBuffer::new();
        buf.push(at_depth(10.0));
        buf.push(at_depth(90.0));
        buf.push(at_depth(40.0));
        buf.sort_back_to_front();
        let depths: Vec<f32> = buf.as_slice().iter().map(|i| i.depth).collect();
        assert_eq!(depths, vec![90.0, 40.0, 10.0]);
    }

    #[test]
    fn truncate_keeps_nearest() {
        let mut buf = SDFBuffer::new();
        for d in [50.0, 30.0, 10.0] {
            buf.push(at_depth(d));
        }
        buf.truncate_front(2);
        assert_eq!(buf.instance_count(), 2);
        assert_eq!(buf.as_slice()[0].depth, 30.0);
    }
}
