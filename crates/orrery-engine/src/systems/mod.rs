pub mod lighting;
pub mod point_render;
pub mod raycast;
pub mod rng;
pub mod sdf_render;
