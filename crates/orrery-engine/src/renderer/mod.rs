pub mod camera;
pub mod point_instance;
pub mod sdf_instance;
pub mod traits;

pub use traits::{FrameData, Renderer};
