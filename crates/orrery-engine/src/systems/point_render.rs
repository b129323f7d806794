use crate::components::entity::Entity;
use crate::renderer::camera::Camera3D;
use crate::renderer::point_instance::{PointBuffer, PointInstance};

/// Smallest diameter a visible point is drawn at, in pixels.
pub const MIN_POINT_PX: f32 = 1.0;

/// Project every point-cloud point into the point buffer.
///
/// Sizes are attenuated with distance: `size * (viewport_height / 2) / depth`.
/// Points behind the camera or past the far plane are culled.
pub fn build_point_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    camera: &Camera3D,
    buffer: &mut PointBuffer,
) {
    buffer.clear();
    let half_h = camera.viewport.y * 0.5;

    for entity in entities {
        if !entity.active {
            continue;
        }
        let cloud = match &entity.points {
            Some(c) => c,
            None => continue,
        };
        for local in &cloud.positions {
            let proj = match camera.project(entity.pos + *local) {
                Some(p) => p,
                None => continue,
            };
            let pushed = buffer.push(PointInstance {
                x: proj.pos.x,
                y: proj.pos.y,
                size: (cloud.size * half_h / proj.depth).max(MIN_POINT_PX),
                depth: proj.depth,
                r: cloud.color.r,
                g: cloud.color.g,
                b: cloud.color.b,
                alpha: 1.0,
            });
            if !pushed {
                return;
            }
        }
    }
}
