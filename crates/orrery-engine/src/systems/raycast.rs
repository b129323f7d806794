//! Ray casting against scene entities: analytic spheres and point clouds.

use glam::Vec3;
use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// A half-line in world space. `direction` is always unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at parameter `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Parameter of the closest point on the ray to `p` (never negative).
    pub fn closest_t(&self, p: Vec3) -> f32 {
        (p - self.origin).dot(self.direction).max(0.0)
    }

    /// Squared distance from `p` to the ray.
    pub fn distance_squared_to_point(&self, p: Vec3) -> f32 {
        self.at(self.closest_t(p)).distance_squared(p)
    }

    /// Nearest non-negative hit parameter against a sphere, if any.
    /// A ray starting inside the sphere hits its far wall.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let sq = disc.sqrt();
        let t0 = -b - sq;
        let t1 = -b + sq;
        if t0 >= 0.0 {
            Some(t0)
        } else if t1 >= 0.0 {
            Some(t1)
        } else {
            None
        }
    }
}

/// What part of an entity the ray struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitKind {
    Mesh,
    /// Index into the entity's point cloud.
    Point(usize),
}

/// One intersection, in world units from the ray origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub entity: EntityId,
    pub distance: f32,
    pub kind: HitKind,
}

/// Intersect a ray with every active entity.
///
/// Meshes are tested against their bounding sphere; point-cloud points count
/// as hit when the ray passes within `point_threshold` of them. Hits are
/// returned nearest first.
pub fn raycast<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    ray: &Ray,
    point_threshold: f32,
) -> Vec<RayHit> {
    let mut hits = Vec::new();
    let threshold_sq = point_threshold * point_threshold;

    for entity in entities {
        if !entity.active {
            continue;
        }
        if let Some(mesh) = &entity.mesh {
            if let Some(t) = ray.intersect_sphere(entity.pos, mesh.shape.bounding_radius()) {
                hits.push(RayHit {
                    entity: entity.id,
                    distance: t,
                    kind: HitKind::Mesh,
                });
            }
        }
        if let Some(cloud) = &entity.points {
            for (i, local) in cloud.positions.iter().enumerate() {
                let p = entity.pos + *local;
                if ray.distance_squared_to_point(p) < threshold_sq {
                    hits.push(RayHit {
                        entity: entity.id,
                        distance: ray.at(ray.closest_t(p)).distance(ray.origin),
                        kind: HitKind::Point(i),
                    });
                }
            }
        }
    }

    hits.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(std::cmp::Ordering::Equal));
    hits
}

/// The nearest hit, if any.
pub fn first_hit<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    ray: &Ray,
    point_threshold: f32,
) -> Option<RayHit> {
    raycast(entities, ray, point_threshold).into_iter().next()
}
