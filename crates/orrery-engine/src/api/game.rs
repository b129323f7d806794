use crate::api::error::ConfigError;
use crate::api::types::{EntityId, GameEvent};
use crate::core::scene::Scene;
use crate::core::time::FrameClock;
use crate::input::queue::InputQueue;
use crate::renderer::camera::Camera3D;
use crate::systems::lighting::LightState;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Initial viewport width in pixels, until the host reports a resize.
    pub viewport_width: f32,
    /// Initial viewport height in pixels.
    pub viewport_height: f32,
    /// Maximum number of SDF sphere instances per frame (default: 64).
    pub max_sdf_instances: usize,
    /// Maximum number of point instances per frame (default: 8192).
    pub max_points: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            viewport_width: 800.0,
            viewport_height: 600.0,
            max_sdf_instances: 64,
            max_points: 8192,
            max_events: 32,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Replace game settings from a JSON document. The runner re-runs
    /// `init` on a fresh context afterwards. Games without settings accept anything.
    fn reconfigure(&mut self, _json: &str) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Setup initial state, spawn entities, place camera and lights.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One logic tick. Consume input, move entities and camera.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: Camera3D,
    pub lights: LightState,
    pub clock: FrameClock,
    pub events: Vec<GameEvent>,
    /// Cap on `events` per frame; the oldest are dropped past it.
    max_events: usize,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            camera: Camera3D::default(),
            lights: LightState::new(),
            clock: FrameClock::default(),
            events: Vec::new(),
            max_events: GameConfig::default().max_events,
            next_id: 1,
        }
    }

    /// Context sized to a config's initial viewport.
    pub fn from_config(config: &GameConfig) -> Self {
        let mut ctx = Self::new();
        ctx.camera.set_viewport(config.viewport_width, config.viewport_height);
        ctx.max_events = config.max_events;
        ctx
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to the host page.
    /// Past `max_events` the oldest event of the frame is dropped.
    pub fn emit_event(&mut self, event: GameEvent) {
        if self.max_events == 0 {
            return;
        }
        if self.events.len() >= self.max_events {
            log::debug!("event buffer full, dropping oldest");
            self.events.remove(0);
        }
        self.events.push(event);
    }

    /// Emit `event`, overwriting an earlier event of this frame that `same`
    /// matches. State updates use this so the host only sees the latest.
    pub fn emit_latest(&mut self, event: GameEvent, same: impl Fn(&GameEvent) -> bool) {
        match self.events.iter_mut().find(|e| same(e)) {
            Some(slot) => *slot = event,
            None => self.emit_event(event),
        }
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
