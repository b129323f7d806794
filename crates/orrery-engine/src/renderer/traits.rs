//! Renderer contract for frame submission.
//!
//! In the browser the host page draws straight from linear memory, so the
//! WASM build never implements this trait. Native hosts and tests submit
//! frames through it instead.

use super::point_instance::PointInstance;
use super::sdf_instance::SDFInstance;

/// Everything a backend needs to draw one frame.
pub struct FrameData<'a> {
    pub frame: u64,
    /// Spheres in painter's order (farthest first).
    pub sdf_instances: &'a [SDFInstance],
    pub points: &'a [PointInstance],
    /// Ambient light RGB applied to non-emissive spheres.
    pub ambient: [f32; 3],
    /// Viewport size in pixels.
    pub viewport: [f32; 2],
}

/// Backend that turns frame data into pixels.
pub trait Renderer {
    /// Backend identifier (e.g. "canvas2d", "webgpu", "headless").
    fn backend(&self) -> &'static str;

    /// Draw a complete frame.
    fn draw(&mut self, frame: &FrameData);

    /// Handle viewport resize.
    fn resize(&mut self, width: u32, height: u32);
}
