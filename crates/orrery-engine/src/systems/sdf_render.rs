use crate::components::entity::Entity;
use crate::renderer::camera::Camera3D;
use crate::renderer::sdf_instance::{SDFBuffer, SDFInstance};
use crate::systems::lighting::LightState;

/// Build the SDF instance buffer from entities with mesh components.
///
/// Projects every visible sphere through `camera`, resolves its key light
/// into view space, and sorts back-to-front (painter's algorithm). When more
/// than `max_instances` spheres are visible the farthest are dropped.
pub fn build_sdf_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    camera: &Camera3D,
    lights: &LightState,
    buffer: &mut SDFBuffer,
    max_instances: usize,
) {
    buffer.clear();
    let view = camera.view_matrix();

    for entity in entities {
        if !entity.active {
            continue;
        }
        let mesh = match &entity.mesh {
            Some(m) => m,
            None => continue,
        };
        let proj = match camera.project(entity.pos) {
            Some(p) => p,
            None => continue,
        };

        let (light_dir, light_strength) = match lights.key_light(entity.pos) {
            Some(inc) => (view.transform_vector3(inc.direction).normalize_or_zero(), inc.strength),
            None => (glam::Vec3::ZERO, 0.0),
        };

        buffer.push(SDFInstance {
            x: proj.pos.x,
            y: proj.pos.y,
            radius: mesh.shape.bounding_radius() * proj.scale,
            rotation: entity.spin,
            r: mesh.color.r,
            g: mesh.color.g,
            b: mesh.color.b,
            shininess: mesh.shininess,
            emissive: mesh.emissive,
            depth: proj.depth,
            light_x: light_dir.x,
            light_y: light_dir.y,
            light_z: light_dir.z,
            light_strength,
            _pad0: 0.0,
            _pad1: 0.0,
        });
    }

    buffer.sort_back_to_front();
    buffer.truncate_front(max_instances);
}
