use glam::{Mat4, Vec2, Vec3};
use crate::systems::raycast::Ray;

/// Result of projecting a world point onto the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Viewport position in pixels, origin top-left, Y down.
    pub pos: Vec2,
    /// Distance in front of the camera along its view axis (world units).
    pub depth: f32,
    /// Pixels per world unit at this depth.
    pub scale: f32,
}

/// Perspective camera that always stays aimed at `target`.
///
/// Matches a conventional right-handed, Y-up setup: the default camera at
/// (0, 0, 50) looks down -Z at the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera3D {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    /// Viewport size in pixels.
    pub viewport: Vec2,
}

impl Default for Camera3D {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 50.0),
            target: Vec3::ZERO,
            fov_y: 75.0_f32.to_radians(),
            near: 0.1,
            far: 1000.0,
            viewport: Vec2::new(800.0, 600.0),
        }
    }
}

impl Camera3D {
    pub fn new(fov_y_degrees: f32, near: f32, far: f32, width: f32, height: f32) -> Self {
        Self {
            fov_y: fov_y_degrees.to_radians(),
            near,
            far,
            viewport: Vec2::new(width, height),
            ..Default::default()
        }
    }

    pub fn aspect(&self) -> f32 {
        if self.viewport.y > 0.0 {
            self.viewport.x / self.viewport.y
        } else {
            1.0
        }
    }

    /// Update the viewport after a window resize.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width.max(1.0), height.max(1.0));
    }

    /// Aim the camera at a world point.
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Distance from the camera to its target.
    pub fn distance(&self) -> f32 {
        self.position.distance(self.target)
    }

    /// Up vector used to build the view basis.
    /// Looking straight along ±Y makes world-up degenerate; fall back to ∓Z so
    /// the top view shows the far side of the scene at the top of the screen.
    fn up_hint(&self) -> Vec3 {
        let back = (self.position - self.target).normalize_or_zero();
        if back.cross(Vec3::Y).length_squared() < 1e-8 {
            Vec3::new(0.0, 0.0, -back.y.signum())
        } else {
            Vec3::Y
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up_hint())
    }

    /// Focal length in pixels (vertical).
    fn focal_px(&self) -> f32 {
        (self.viewport.y * 0.5) / (self.fov_y * 0.5).tan()
    }

    /// Transform a world point into view space (camera looks down -Z).
    pub fn to_view(&self, world: Vec3) -> Vec3 {
        self.view_matrix().transform_point3(world)
    }

    /// Project a world point to viewport pixels.
    /// Returns `None` for points outside the near/far range.
    pub fn project(&self, world: Vec3) -> Option<Projection> {
        let view = self.to_view(world);
        let depth = -view.z;
        if depth < self.near || depth > self.far {
            return None;
        }
        let scale = self.focal_px() / depth;
        Some(Projection {
            pos: Vec2::new(
                self.viewport.x * 0.5 + view.x * scale,
                self.viewport.y * 0.5 - view.y * scale,
            ),
            depth,
            scale,
        })
    }

    /// Ray from the camera through a viewport pixel, in world space.
    pub fn screen_ray(&self, screen: Vec2) -> Ray {
        let ndc_x = (screen.x / self.viewport.x) * 2.0 - 1.0;
        let ndc_y = -((screen.y / self.viewport.y) * 2.0 - 1.0);
        let half_h = (self.fov_y * 0.5).tan();
        let dir_view = Vec3::new(ndc_x * half_h * self.aspect(), ndc_y * half_h, -1.0);
        let dir = self.view_matrix().inverse().transform_vector3(dir_view);
        Ray::new(self.position, dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera3D {
        Camera3D::new(75.0, 0.1, 1000.0, 800.0, 600.0)
    }

    #[test]
    fn origin_projects_to_center() {
        let proj = camera().project(Vec3::ZERO).unwrap();
        assert!((proj.pos.x - 400.0).abs() < 1e-3);
        assert!((proj.pos.y - 300.0).abs() < 1e-3);
        assert!((proj.depth - 50.0).abs() < 1e-3);
    }

    #[test]
    fn up_is_up_on_screen() {
        let cam = camera();
        let above = cam.project(Vec3::new(0.0, 5.0, 0.0)).unwrap();
        let right = cam.project(Vec3::new(5.0, 0.0, 0.0)).unwrap();
        assert!(above.pos.y < 300.0);
        assert!(right.pos.x > 400.0);
    }

    #[test]
    fn nearer_points_scale_larger() {
        let cam = camera();
        let near = cam.project(Vec3::new(0.0, 0.0, 20.0)).unwrap();
        let far = cam.project(Vec3::new(0.0, 0.0, -20.0)).unwrap();
        assert!(near.scale > far.scale);
    }

    #[test]
    fn points_behind_camera_are_culled() {
        assert!(camera().project(Vec3::new(0.0, 0.0, 80.0)).is_none());
    }

    #[test]
    fn top_view_has_a_valid_basis() {
        let mut cam = camera();
        cam.position = Vec3::new(0.0, 50.0, 0.0);
        let proj = cam.project(Vec3::new(0.0, 0.0, -10.0)).unwrap();
        assert!(proj.pos.x.is_finite() && proj.pos.y.is_finite());
        // Far side (-Z) appears above the center.
        assert!(proj.pos.y < 300.0);

        cam.position = Vec3::new(0.0, -50.0, 0.0);
        assert!(cam.project(Vec3::ZERO).is_some());
    }

    #[test]
    fn center_ray_points_at_target() {
        let cam = camera();
        let ray = cam.screen_ray(Vec2::new(400.0, 300.0));
        assert!((ray.direction - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-4);
    }

    #[test]
    fn screen_ray_passes_through_projected_point() {
        let mut cam = camera();
        cam.position = Vec3::new(30.0, 20.0, 35.0);
        let world = Vec3::new(12.0, -3.0, 4.0);
        let proj = cam.project(world).unwrap();
        let ray = cam.screen_ray(proj.pos);
        let along = (world - ray.origin).dot(ray.direction);
        let closest = ray.at(along);
        assert!(closest.distance(world) < 1e-2, "miss by {}", closest.distance(world));
    }

    #[test]
    fn resize_changes_aspect() {
        let mut cam = camera();
        cam.set_viewport(1920.0, 1080.0);
        assert!((cam.aspect() - 1920.0 / 1080.0).abs() < 1e-5);
    }
}
