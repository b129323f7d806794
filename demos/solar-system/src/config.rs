/// Solar system settings, loadable from JSON.
///
/// Every field has a default, so `{}` is a complete document and a partial
/// document only overrides what it names. Colors are packed `0xRRGGBB`
/// integers.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use orrery_engine::ConfigError;

// ── Planets ──────────────────────────────────────────────────────────

/// One orbiting body of the default table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetSpec {
    /// Lowercase identifier; the tooltip shows it capitalized.
    pub name: String,
    pub radius: f32,
    pub color: u32,
    /// Orbit radius in world units.
    pub distance: f32,
}

impl PlanetSpec {
    fn new(name: &str, radius: f32, color: u32, distance: f32) -> Self {
        Self { name: name.to_string(), radius, color, distance }
    }
}

pub fn default_planets() -> Vec<PlanetSpec> {
    vec![
        PlanetSpec::new("mercury", 0.8, 0x8c8c8c, 8.0),  // gray
        PlanetSpec::new("venus", 1.2, 0xffd700, 12.0),   // golden yellow
        PlanetSpec::new("earth", 1.5, 0x0077be, 16.0),   // blue
        PlanetSpec::new("mars", 1.1, 0xff4500, 20.0),    // red-orange
        PlanetSpec::new("jupiter", 3.0, 0xf4a460, 28.0), // sandy brown
        PlanetSpec::new("saturn", 2.5, 0xdeb887, 34.0),  // burlywood
        PlanetSpec::new("uranus", 2.0, 0x40e0d0, 40.0),  // turquoise
        PlanetSpec::new("neptune", 1.8, 0x4169e1, 46.0), // royal blue
    ]
}

// ── Sections ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SunConfig {
    pub radius: f32,
    pub color: u32,
    /// Self-rotation per logic tick, radians.
    pub spin_rate: f32,
    pub emissive: f32,
}

impl Default for SunConfig {
    fn default() -> Self {
        Self { radius: 5.0, color: 0xffff00, spin_rate: 0.004, emissive: 0.7 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarFieldConfig {
    pub count: usize,
    /// Edge length of the cube the stars are scattered in, centered on the sun.
    pub spread: f32,
    /// Point size in world units.
    pub size: f32,
    pub color: u32,
    pub seed: u64,
}

impl Default for StarFieldConfig {
    fn default() -> Self {
        Self { count: 5000, spread: 2000.0, size: 0.1, color: 0xffffff, seed: 0x5eed_57a2 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self { fov_deg: 75.0, near: 0.1, far: 1000.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Distance of every preset view from the sun.
    pub preset_distance: f32,
    pub transition_ms: f64,
    pub zoom_min: f32,
    pub zoom_max: f32,
    /// World units per wheel delta unit.
    pub zoom_speed: f32,
    /// Radians per dragged pixel.
    pub orbit_sensitivity: f32,
    /// Fraction of the remaining yaw/pitch gap closed per tick.
    pub orbit_smoothing: f32,
    /// Largest pitch magnitude a drag may reach, radians. Stays short of
    /// ±π/2, where the look-at basis degenerates at the poles.
    pub pitch_limit: f32,
    /// Ray-to-star distance that counts as a hover hit.
    pub star_hit_threshold: f32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            preset_distance: 50.0,
            transition_ms: 1000.0,
            zoom_min: 20.0,
            zoom_max: 100.0,
            zoom_speed: 0.1,
            orbit_sensitivity: 0.005,
            orbit_smoothing: 0.1,
            pitch_limit: 1.55,
            star_hit_threshold: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    pub ambient: u32,
    pub sun_light_color: u32,
    pub sun_light_intensity: f32,
    /// Distance at which the sun light fades to zero (0 = unlimited).
    pub sun_light_range: f32,
    pub sun_light_decay: f32,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient: 0x333333,
            sun_light_color: 0xffffff,
            sun_light_intensity: 2.0,
            sun_light_range: 300.0,
            sun_light_decay: 1.0,
        }
    }
}

/// How a planet's orbital angle is derived each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseMode {
    /// `angle = now · orbit_rate · speed`. Changing a speed jumps the planet.
    #[default]
    WallClock,
    /// `angle += dt · orbit_rate · speed`. Speed changes keep the planet in place.
    Integrated,
}

// ── Root ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolarConfig {
    pub sun: SunConfig,
    pub planets: Vec<PlanetSpec>,
    pub stars: StarFieldConfig,
    pub camera: CameraConfig,
    pub navigation: NavigationConfig,
    pub lighting: LightingConfig,
    /// Self-rotation per logic tick at speed 1, radians.
    pub planet_spin_rate: f32,
    /// Orbital angular rate at speed 1, radians per second.
    pub orbit_rate: f32,
    pub shininess: f32,
    /// Tooltip offset from the pointer, pixels.
    pub tooltip_offset: f32,
    pub phase_mode: PhaseMode,
}

impl Default for SolarConfig {
    fn default() -> Self {
        Self {
            sun: SunConfig::default(),
            planets: default_planets(),
            stars: StarFieldConfig::default(),
            camera: CameraConfig::default(),
            navigation: NavigationConfig::default(),
            lighting: LightingConfig::default(),
            planet_spin_rate: 0.02,
            orbit_rate: 0.5,
            shininess: 25.0,
            tooltip_offset: 10.0,
            phase_mode: PhaseMode::WallClock,
        }
    }
}

impl SolarConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.sun.radius > 0.0) {
            return Err(ConfigError::invalid("sun radius must be positive"));
        }

        let mut names = HashSet::new();
        let mut last_distance = 0.0_f32;
        for planet in &self.planets {
            if planet.name.is_empty() {
                return Err(ConfigError::invalid("planet name must not be empty"));
            }
            if !names.insert(planet.name.as_str()) {
                return Err(ConfigError::invalid(format!("duplicate planet `{}`", planet.name)));
            }
            if !(planet.radius > 0.0) {
                return Err(ConfigError::invalid(format!("planet `{}` needs a positive radius", planet.name)));
            }
            if !(planet.distance > last_distance) {
                return Err(ConfigError::invalid(format!(
                    "planet `{}` must orbit farther out than the body before it",
                    planet.name
                )));
            }
            last_distance = planet.distance;
        }

        let nav = &self.navigation;
        if !(nav.zoom_min > 0.0 && nav.zoom_min <= nav.zoom_max) {
            return Err(ConfigError::invalid("zoom range must satisfy 0 < zoom_min <= zoom_max"));
        }
        if !(nav.transition_ms > 0.0) {
            return Err(ConfigError::invalid("transition_ms must be positive"));
        }
        if !(nav.preset_distance > 0.0) {
            return Err(ConfigError::invalid("preset_distance must be positive"));
        }

        let cam = &self.camera;
        if !(cam.fov_deg > 0.0 && cam.fov_deg < 180.0) {
            return Err(ConfigError::invalid("fov_deg must lie in (0, 180)"));
        }
        if !(cam.near > 0.0 && cam.far > cam.near) {
            return Err(ConfigError::invalid("camera planes must satisfy 0 < near < far"));
        }
        Ok(())
    }
}
