use orrery_engine::{
    Game, GameConfig, EngineContext, ConfigError,
    InputEvent, InputQueue, FixedTimestep, ProtocolLayout, FrameCounts,
    SDFBuffer, PointBuffer, FrameData, Renderer, HEADER_FLOATS,
    build_sdf_buffer, build_point_buffer,
};
use orrery_engine::bridge::protocol::write_header;

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    /// Stands in for `input` on the extra logic steps of a slow frame, so
    /// one click is never applied twice.
    no_input: InputQueue,
    sdf_buffer: SDFBuffer,
    point_buffer: PointBuffer,
    header: [f32; HEADER_FLOATS],
    timestep: FixedTimestep,
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self {
            game,
            ctx: EngineContext::from_config(&config),
            input: InputQueue::new(),
            no_input: InputQueue::new(),
            sdf_buffer: SDFBuffer::with_capacity(config.max_sdf_instances),
            point_buffer: PointBuffer::with_capacity(config.max_points),
            header: [0.0; HEADER_FLOATS],
            timestep: FixedTimestep::new(config.fixed_dt),
            layout: ProtocolLayout::from_config(&config),
            config,
            initialized: false,
        }
    }

    /// Initialize the game on a fresh context. Call once after construction.
    pub fn init(&mut self) {
        let now = self.ctx.clock.now();
        self.config = self.game.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.timestep = FixedTimestep::new(self.config.fixed_dt);
        self.sdf_buffer = SDFBuffer::with_capacity(self.config.max_sdf_instances);
        self.point_buffer = PointBuffer::with_capacity(self.config.max_points);
        self.ctx = EngineContext::from_config(&self.config);
        self.ctx.clock.advance(now);
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Apply a JSON config to the game. A running game is rebuilt in place,
    /// keeping the current viewport size.
    pub fn load_config(&mut self, json: &str) -> Result<(), ConfigError> {
        self.game.reconfigure(json)?;
        if self.initialized {
            let viewport = self.ctx.camera.viewport;
            self.init();
            self.ctx.camera.set_viewport(viewport.x, viewport.y);
        }
        log::info!("config applied");
        Ok(())
    }

    /// Push an input event into the queue. Resizes also take effect on the
    /// camera immediately so the next frame projects at the new size.
    pub fn push_input(&mut self, event: InputEvent) {
        if let InputEvent::Resize { width, height } = event {
            self.ctx.camera.set_viewport(width, height);
        }
        self.input.push(event);
    }

    /// Run one frame: advance the clock, run due logic steps, rebuild the
    /// frame buffers. Buffers are rebuilt every frame even when no logic
    /// step ran, so the host always has a current frame to draw.
    pub fn tick(&mut self, dt: f32, now_secs: f64) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();
        self.ctx.clock.advance(now_secs);

        let steps = self.timestep.accumulate(dt);
        for step in 0..steps {
            let input = if step == 0 { &self.input } else { &self.no_input };
            self.game.update(&mut self.ctx, input);
        }
        // Input that arrived between logic steps waits for the next one.
        if steps > 0 {
            self.input.drain();
        }

        build_sdf_buffer(
            self.ctx.scene.iter(),
            &self.ctx.camera,
            &self.ctx.lights,
            &mut self.sdf_buffer,
            self.config.max_sdf_instances,
        );
        build_point_buffer(self.ctx.scene.iter(), &self.ctx.camera, &mut self.point_buffer);

        let viewport = self.ctx.camera.viewport;
        write_header(&mut self.header, &self.layout, &FrameCounts {
            frame: self.ctx.clock.frame(),
            sdf_instances: self.sdf_buffer.instance_count(),
            points: self.point_buffer.point_count(),
            events: self.ctx.events.len(),
            viewport: [viewport.x, viewport.y],
            ambient: self.ctx.lights.ambient(),
        });
    }

    /// Current frame as backend-neutral data.
    pub fn frame_data(&self) -> FrameData<'_> {
        let viewport = self.ctx.camera.viewport;
        FrameData {
            frame: self.ctx.clock.frame(),
            sdf_instances: self.sdf_buffer.as_slice(),
            points: self.point_buffer.as_slice(),
            ambient: self.ctx.lights.ambient(),
            viewport: [viewport.x, viewport.y],
        }
    }

    /// Hand the current frame to a native renderer.
    pub fn submit(&self, renderer: &mut impl Renderer) {
        renderer.draw(&self.frame_data());
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    // ---- Pointer accessors for linear-memory reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn sdf_instances_ptr(&self) -> *const f32 {
        self.sdf_buffer.instances_ptr()
    }

    pub fn sdf_instance_count(&self) -> u32 {
        self.sdf_buffer.instance_count() as u32
    }

    pub fn points_ptr(&self) -> *const f32 {
        self.point_buffer.points_ptr()
    }

    pub fn point_count(&self) -> u32 {
        self.point_buffer.point_count() as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    // ---- Capacity accessors ----

    pub fn max_sdf_instances(&self) -> u32 {
        self.layout.max_sdf_instances as u32
    }

    pub fn max_points(&self) -> u32 {
        self.layout.max_points as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
