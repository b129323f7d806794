pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::error::ConfigError;
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{EntityId, GameEvent};
pub use components::entity::Entity;
pub use components::mesh::{MeshComponent, SDFShape, SDFColor};
pub use components::points::PointCloud;
pub use core::scene::Scene;
pub use core::time::{FixedTimestep, FrameClock};
pub use renderer::camera::{Camera3D, Projection};
pub use renderer::sdf_instance::{SDFInstance, SDFBuffer};
pub use renderer::point_instance::{PointInstance, PointBuffer};
pub use renderer::traits::{FrameData, Renderer};
pub use input::queue::{InputEvent, InputQueue};
pub use bridge::protocol::{ProtocolLayout, FrameCounts, HEADER_FLOATS};
pub use systems::lighting::{PointLight, LightState, Incident};
pub use systems::raycast::{Ray, RayHit, HitKind, raycast, first_hit};
pub use systems::rng::Rng;
pub use systems::sdf_render::build_sdf_buffer;
pub use systems::point_render::build_point_buffer;

// Extensions: decoupled optional systems
pub use extensions::{Easing, lerp_vec3, ease_vec3};
