/// Point lights and ambient color for sphere shading.
///
/// Lights are persistent: they stay until explicitly removed. The host
/// renderer never sees the light list: each frame the SDF pass resolves the
/// strongest light per sphere into a view-space direction and strength.

use glam::Vec3;

/// An omnidirectional light with linear-power falloff to zero at `range`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    /// RGB color (typically [0..1]).
    pub color: [f32; 3],
    /// Strength multiplier.
    pub intensity: f32,
    /// Distance at which the light reaches zero. 0 means unbounded.
    pub range: f32,
    /// Falloff exponent applied to `1 - d / range`.
    pub decay: f32,
}

impl PointLight {
    pub fn new(position: Vec3, color: [f32; 3], intensity: f32, range: f32) -> Self {
        Self {
            position,
            color,
            intensity,
            range,
            decay: 1.0,
        }
    }

    pub fn with_decay(mut self, decay: f32) -> Self {
        self.decay = decay;
        self
    }

    /// Light strength arriving at `point`.
    pub fn strength_at(&self, point: Vec3) -> f32 {
        if self.range <= 0.0 {
            return self.intensity;
        }
        let d = self.position.distance(point);
        let falloff = (1.0 - d / self.range).clamp(0.0, 1.0);
        self.intensity * falloff.powf(self.decay)
    }
}

/// The light reaching a surface point: unit direction toward the light and strength.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Incident {
    pub direction: Vec3,
    pub strength: f32,
}

/// Manages active lights and ambient color for the scene.
pub struct LightState {
    lights: Vec<PointLight>,
    ambient: [f32; 3],
}

impl LightState {
    /// Empty light set with white ambient, which renders everything unlit.
    pub fn new() -> Self {
        Self {
            lights: Vec::new(),
            ambient: [1.0, 1.0, 1.0],
        }
    }

    pub fn add(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn clear(&mut self) {
        self.lights.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointLight> {
        self.lights.iter()
    }

    pub fn count(&self) -> usize {
        self.lights.len()
    }

    /// Set the ambient light color. For a dark space scene use low values like 0x333333.
    pub fn set_ambient(&mut self, r: f32, g: f32, b: f32) {
        self.ambient = [r, g, b];
    }

    pub fn ambient(&self) -> [f32; 3] {
        self.ambient
    }

    /// Strongest light reaching `point`, if any light reaches it at all.
    /// A point at the light's own position gets no direction and is skipped.
    pub fn key_light(&self, point: Vec3) -> Option<Incident> {
        self.lights
            .iter()
            .filter_map(|light| {
                let to_light = light.position - point;
                if to_light.length_squared() < 1e-8 {
                    return None;
                }
                let strength = light.strength_at(point);
                (strength > 0.0).then(|| Incident {
                    direction: to_light.normalize(),
                    strength,
                })
            })
            .max_by(|a, b| a.strength.partial_cmp(&b.strength).unwrap_or(std::cmp::Ordering::Equal))
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falloff_reaches_zero_at_range() {
        let light = PointLight::new(Vec3::ZERO, [1.0; 3], 2.0, 300.0);
        assert_eq!(light.strength_at(Vec3::ZERO), 2.0);
        assert!((light.strength_at(Vec3::new(150.0, 0.0, 0.0)) - 1.0).abs() < 1e-5);
        assert_eq!(light.strength_at(Vec3::new(400.0, 0.0, 0.0)), 0.0);
    }

    #[test]
    fn unbounded_light_is_constant() {
        let light = PointLight::new(Vec3::ZERO, [1.0; 3], 1.5, 0.0);
        assert_eq!(light.strength_at(Vec3::new(1e4, 0.0, 0.0)), 1.5);
    }

    #[test]
    fn key_light_points_toward_source() {
        let mut state = LightState::new();
        state.add(PointLight::new(Vec3::ZERO, [1.0; 3], 2.0, 300.0));
        let inc = state.key_light(Vec3::new(16.0, 0.0, 0.0)).unwrap();
        assert!((inc.direction - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-6);
        assert!(inc.strength > 1.8);
    }

    #[test]
    fn key_light_picks_strongest() {
        let mut state = LightState::new();
        state.add(PointLight::new(Vec3::new(-10.0, 0.0, 0.0), [1.0; 3], 0.5, 0.0));
        state.add(PointLight::new(Vec3::new(10.0, 0.0, 0.0), [1.0; 3], 3.0, 0.0));
        let inc = state.key_light(Vec3::ZERO).unwrap();
        assert!(inc.direction.x > 0.0);
        assert_eq!(inc.strength, 3.0);
    }

    #[test]
    fn no_light_at_source_or_out_of_range() {
        let mut state = LightState::new();
        state.add(PointLight::new(Vec3::ZERO, [1.0; 3], 2.0, 300.0));
        assert!(state.key_light(Vec3::ZERO).is_none());
        assert!(state.key_light(Vec3::new(0.0, 0.0, 500.0)).is_none());
    }

    #[test]
    fn ambient_defaults_to_white() {
        let mut state = LightState::new();
        assert_eq!(state.ambient(), [1.0, 1.0, 1.0]);
        state.set_ambient(0.2, 0.2, 0.2);
        assert_eq!(state.ambient(), [0.2, 0.2, 0.2]);
    }
}
