/// Celestial bodies: the sun, the planets and the star field backdrop.

use glam::Vec3;
use orrery_engine::*;

use crate::config::{PlanetSpec, SolarConfig, StarFieldConfig, SunConfig};

/// A sphere that spins about Y and, unless it is the sun, circles the origin
/// in the XZ plane.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    pub name: String,
    pub radius: f32,
    pub base_color: SDFColor,
    pub orbital_distance: f32,
    /// Scales both orbital and spin rate. 0 halts the body.
    pub angular_speed_multiplier: f32,
    /// Radians, measured from +X toward +Z.
    pub current_orbital_angle: f32,
    /// Self-rotation about Y, radians.
    pub spin: f32,
    pub is_emissive: bool,
    /// Scene entity this body drives.
    pub entity: EntityId,
}

impl CelestialBody {
    pub fn from_spec(spec: &PlanetSpec, entity: EntityId) -> Self {
        Self {
            name: spec.name.clone(),
            radius: spec.radius,
            base_color: SDFColor::from_hex(spec.color),
            orbital_distance: spec.distance,
            angular_speed_multiplier: 1.0,
            current_orbital_angle: 0.0,
            spin: 0.0,
            is_emissive: false,
            entity,
        }
    }

    pub fn sun(config: &SunConfig, entity: EntityId) -> Self {
        Self {
            name: "sun".to_string(),
            radius: config.radius,
            base_color: SDFColor::from_hex(config.color),
            orbital_distance: 0.0,
            angular_speed_multiplier: 1.0,
            current_orbital_angle: 0.0,
            spin: 0.0,
            is_emissive: true,
            entity,
        }
    }

    /// World position for the current orbital angle.
    pub fn position(&self) -> Vec3 {
        let (sin, cos) = self.current_orbital_angle.sin_cos();
        Vec3::new(cos * self.orbital_distance, 0.0, sin * self.orbital_distance)
    }

    /// Copy position and spin onto the scene entity.
    pub fn sync(&self, scene: &mut Scene) {
        if let Some(entity) = scene.get_mut(self.entity) {
            entity.pos = self.position();
            entity.spin = self.spin;
        }
    }
}

/// Spawn a lit sphere on the +X axis at `distance`.
///
/// Emissive bodies glow in their own color at `emissive` intensity; others
/// are shaded by the scene lights only.
pub fn create_planet(
    ctx: &mut EngineContext,
    tag: &str,
    radius: f32,
    color: SDFColor,
    distance: f32,
    emissive: Option<f32>,
    shininess: f32,
) -> EntityId {
    let mut mesh = MeshComponent::sphere(radius, color).with_shininess(shininess);
    if let Some(intensity) = emissive {
        mesh = mesh.with_emissive(intensity);
    }

    let id = ctx.next_id();
    ctx.scene.spawn(
        Entity::new(id)
            .with_tag(tag)
            .with_pos(Vec3::new(distance, 0.0, 0.0))
            .with_mesh(mesh),
    );
    id
}

/// Spawn the sun and every planet of `config`, in declared order.
pub fn spawn_bodies(ctx: &mut EngineContext, config: &SolarConfig) -> (CelestialBody, Vec<CelestialBody>) {
    let sun_id = create_planet(
        ctx,
        "sun",
        config.sun.radius,
        SDFColor::from_hex(config.sun.color),
        0.0,
        Some(config.sun.emissive),
        config.shininess,
    );
    let sun = CelestialBody::sun(&config.sun, sun_id);

    let planets = config
        .planets
        .iter()
        .map(|spec| {
            let id = create_planet(
                ctx,
                &spec.name,
                spec.radius,
                SDFColor::from_hex(spec.color),
                spec.distance,
                None,
                config.shininess,
            );
            CelestialBody::from_spec(spec, id)
        })
        .collect();

    (sun, planets)
}

// ── Star field ───────────────────────────────────────────────────────

/// Scatter `config.count` points uniformly in a cube of edge `config.spread`.
pub fn generate_star_field(config: &StarFieldConfig) -> PointCloud {
    let mut rng = Rng::new(config.seed);
    let half = config.spread * 0.5;
    let positions = (0..config.count)
        .map(|_| Vec3::new(rng.next_centered(half), rng.next_centered(half), rng.next_centered(half)))
        .collect();
    PointCloud::new(positions, SDFColor::from_hex(config.color), config.size)
}

pub fn spawn_star_field(ctx: &mut EngineContext, config: &StarFieldConfig) -> EntityId {
    let id = ctx.next_id();
    ctx.scene.spawn(
        Entity::new(id)
            .with_tag("stars")
            .with_points(generate_star_field(config)),
    );
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planets_start_on_positive_x() {
        let mut ctx = EngineContext::new();
        let config = SolarConfig::default();
        let (sun, planets) = spawn_bodies(&mut ctx, &config);

        assert!(sun.is_emissive);
        assert_eq!(ctx.scene.get(sun.entity).unwrap().pos, Vec3::ZERO);
        assert_eq!(planets.len(), 8);
        for (body, spec) in planets.iter().zip(&config.planets) {
            let entity = ctx.scene.get(body.entity).unwrap();
            assert_eq!(entity.pos, Vec3::new(spec.distance, 0.0, 0.0));
            assert_eq!(entity.tag, spec.name);
            assert!((body.position().length() - spec.distance).abs() < 1e-4);
        }
    }

    #[test]
    fn planets_are_lit_and_sun_glows() {
        let mut ctx = EngineContext::new();
        let (sun, planets) = spawn_bodies(&mut ctx, &SolarConfig::default());

        let sun_mesh = ctx.scene.get(sun.entity).unwrap().mesh.unwrap();
        assert_eq!(sun_mesh.emissive, 0.7);
        assert_eq!(sun_mesh.shininess, 25.0);
        assert_eq!(sun_mesh.color, SDFColor::from_hex(0xffff00));

        let earth = &planets[2];
        let mesh = ctx.scene.get(earth.entity).unwrap().mesh.unwrap();
        assert!(!mesh.is_emissive());
        assert_eq!(mesh.shape.bounding_radius(), 1.5);
    }

    #[test]
    fn position_follows_angle() {
        let mut ctx = EngineContext::new();
        let (_, mut planets) = spawn_bodies(&mut ctx, &SolarConfig::default());
        let mercury = &mut planets[0];
        mercury.current_orbital_angle = std::f32::consts::FRAC_PI_2;
        let pos = mercury.position();
        assert!(pos.x.abs() < 1e-4);
        assert!((pos.z - 8.0).abs() < 1e-4);

        mercury.spin = 1.25;
        mercury.sync(&mut ctx.scene);
        let entity = ctx.scene.get(mercury.entity).unwrap();
        assert_eq!(entity.pos, pos);
        assert_eq!(entity.spin, 1.25);
    }

    #[test]
    fn star_field_fills_cube() {
        let config = StarFieldConfig::default();
        let cloud = generate_star_field(&config);
        assert_eq!(cloud.len(), 5000);
        assert!(cloud
            .positions
            .iter()
            .all(|p| p.abs().max_element() <= 1000.0));
        assert_eq!(cloud.size, 0.1);
    }

    #[test]
    fn star_field_is_reproducible() {
        let config = StarFieldConfig { count: 16, ..Default::default() };
        assert_eq!(generate_star_field(&config), generate_star_field(&config));
        let other = StarFieldConfig { seed: 7, ..config.clone() };
        assert_ne!(generate_star_field(&config).positions, generate_star_field(&other).positions);
    }
}
