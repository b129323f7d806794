// extensions/mod.rs
//
// Optional extension modules. Decoupled from core Entity/Scene; games opt in.

pub mod easing;

pub use easing::{Easing, lerp_vec3, ease_vec3};
