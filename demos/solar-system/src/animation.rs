/// Animation driver. Advances orbital angles and spins once per logic tick.

use std::f64::consts::TAU;

use crate::bodies::CelestialBody;
use crate::config::{PhaseMode, SolarConfig};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationDriver {
    pub phase_mode: PhaseMode,
    /// Radians per second at speed 1.
    pub orbit_rate: f32,
    /// Radians per tick at speed 1.
    pub planet_spin_rate: f32,
    /// Radians per tick.
    pub sun_spin_rate: f32,
}

impl AnimationDriver {
    pub fn from_config(config: &SolarConfig) -> Self {
        Self {
            phase_mode: config.phase_mode,
            orbit_rate: config.orbit_rate,
            planet_spin_rate: config.planet_spin_rate,
            sun_spin_rate: config.sun.spin_rate,
        }
    }

    /// Advance one tick. `now` is wall-clock seconds since the Unix epoch,
    /// `dt` the tick length in seconds.
    pub fn step(&self, sun: &mut CelestialBody, planets: &mut [CelestialBody], now: f64, dt: f32) {
        sun.spin = wrap(sun.spin as f64 + self.sun_spin_rate as f64);

        for planet in planets.iter_mut() {
            let speed = planet.angular_speed_multiplier;
            planet.spin = wrap(planet.spin as f64 + (self.planet_spin_rate * speed) as f64);
            planet.current_orbital_angle = match self.phase_mode {
                // f64 product first: `now` is ~1.7e9 and would swamp an f32.
                PhaseMode::WallClock => wrap(now * self.orbit_rate as f64 * speed as f64),
                PhaseMode::Integrated => {
                    wrap(planet.current_orbital_angle as f64 + (self.orbit_rate * speed * dt) as f64)
                }
            };
        }
    }
}

fn wrap(angle: f64) -> f32 {
    angle.rem_euclid(TAU) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_planets;
    use orrery_engine::EntityId;

    const NOW: f64 = 1_700_000_000.0;
    const DT: f32 = 1.0 / 60.0;

    fn bodies() -> (CelestialBody, Vec<CelestialBody>) {
        let config = SolarConfig::default();
        let sun = CelestialBody::sun(&config.sun, EntityId(1));
        let planets = default_planets()
            .iter()
            .enumerate()
            .map(|(i, spec)| CelestialBody::from_spec(spec, EntityId(i as u32 + 2)))
            .collect();
        (sun, planets)
    }

    fn driver(mode: PhaseMode) -> AnimationDriver {
        AnimationDriver { phase_mode: mode, ..AnimationDriver::from_config(&SolarConfig::default()) }
    }

    #[test]
    fn wall_clock_phase_matches_formula() {
        let (mut sun, mut planets) = bodies();
        planets[3].angular_speed_multiplier = 2.5;
        driver(PhaseMode::WallClock).step(&mut sun, &mut planets, NOW, DT);

        let expected = (NOW * 0.5 * 2.5).rem_euclid(TAU);
        assert!((planets[3].current_orbital_angle as f64 - expected).abs() < 1e-5);
        let pos = planets[3].position();
        assert!((pos.x - expected.cos() as f32 * 20.0).abs() < 1e-3);
        assert!((pos.z - expected.sin() as f32 * 20.0).abs() < 1e-3);
        assert_eq!(pos.y, 0.0);
    }

    #[test]
    fn spins_advance_per_tick() {
        let (mut sun, mut planets) = bodies();
        planets[0].angular_speed_multiplier = 2.0;
        let d = driver(PhaseMode::WallClock);
        for i in 0..10 {
            d.step(&mut sun, &mut planets, NOW + i as f64 * DT as f64, DT);
        }
        assert!((sun.spin - 0.04).abs() < 1e-5);
        assert!((planets[0].spin - 0.4).abs() < 1e-5);
        assert!((planets[1].spin - 0.2).abs() < 1e-5);
    }

    #[test]
    fn zero_speed_halts_only_that_planet() {
        let (mut sun, mut planets) = bodies();
        planets[2].angular_speed_multiplier = 0.0;
        let d = driver(PhaseMode::WallClock);

        d.step(&mut sun, &mut planets, NOW, DT);
        let earth_before = planets[2].position();
        let mars_before = planets[3].position();
        d.step(&mut sun, &mut planets, NOW + 1.0, DT);

        assert_eq!(planets[2].position(), earth_before);
        assert_eq!(planets[2].spin, 0.0);
        assert!(planets[3].position().distance(mars_before) > 1.0);
    }

    #[test]
    fn distances_hold_at_every_angle() {
        let (mut sun, mut planets) = bodies();
        let d = driver(PhaseMode::WallClock);
        for i in 0..50 {
            d.step(&mut sun, &mut planets, NOW + i as f64 * 0.37, DT);
            for (body, spec) in planets.iter().zip(default_planets()) {
                assert!((body.position().length() - spec.distance).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn integrated_phase_is_continuous_across_speed_change() {
        let (mut sun, mut planets) = bodies();
        let d = driver(PhaseMode::Integrated);
        for _ in 0..60 {
            d.step(&mut sun, &mut planets, NOW, DT);
        }
        // One second at speed 1 → 0.5 rad.
        assert!((planets[0].current_orbital_angle - 0.5).abs() < 1e-4);

        let before = planets[0].position();
        planets[0].angular_speed_multiplier = 5.0;
        d.step(&mut sun, &mut planets, NOW, DT);
        // 5 × 0.5 / 60 rad along an 8-unit orbit.
        assert!(planets[0].position().distance(before) < 0.4);
    }
}
