// extensions/easing.rs
//
// Pure easing functions for camera and UI interpolation.
// No dependencies on Entity/Scene, just math.

use glam::Vec3;

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant velocity.
    #[default]
    Linear,
    /// Strong slow end: `1 - (1 - t)^3`. Used for preset camera moves.
    CubicOut,
}

impl Easing {
    /// Apply the easing function to a normalized time value `t`, clamped to [0, 1].
    /// Both curves map 0 to 0 and 1 to 1 and are monotonic in between.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

// ── Interpolation helpers ────────────────────────────────────────────────

/// Linearly interpolate between two points.
#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

/// Interpolate a point with easing.
#[inline]
pub fn ease_vec3(a: Vec3, b: Vec3, t: f32, easing: Easing) -> Vec3 {
    lerp_vec3(a, b, easing.apply(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 2] = [Easing::Linear, Easing::CubicOut];

    #[test]
    fn endpoints_are_fixed() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-6, "{:?} at 0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{:?} at 1", easing);
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in ALL {
            let mut prev = easing.apply(0.0);
            for i in 1..=100 {
                let v = easing.apply(i as f32 / 100.0);
                assert!(v >= prev, "{:?} decreased at step {}", easing, i);
                prev = v;
            }
        }
    }

    #[test]
    fn cubic_out_matches_formula() {
        let t = 0.3_f32;
        let expected = 1.0 - (1.0 - t).powi(3);
        assert!((Easing::CubicOut.apply(t) - expected).abs() < 1e-6);
        assert!(Easing::CubicOut.apply(0.5) > 0.5);
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Easing::CubicOut.apply(2.0), 1.0);
        assert_eq!(Easing::CubicOut.apply(-1.0), 0.0);
    }

    #[test]
    fn ease_vec3_interpolates() {
        let a = Vec3::new(0.0, 0.0, 50.0);
        let b = Vec3::new(0.0, 50.0, 0.0);
        assert_eq!(ease_vec3(a, b, 1.0, Easing::CubicOut), b);
        let mid = ease_vec3(a, b, 0.5, Easing::Linear);
        assert!((mid - Vec3::new(0.0, 25.0, 25.0)).length() < 1e-5);
        assert_eq!(lerp_vec3(a, b, 0.0), a);
    }
}
