/// Solar System: sun, eight planets and a star field in perspective 3D.
///
/// Preset camera views on keys and double-click, drag-to-orbit, wheel zoom,
/// per-planet speed sliders, play/pause, theme toggle and hover tooltip.

use glam::{Vec2, Vec3};
use orrery_engine::*;

use crate::animation::AnimationDriver;
use crate::bodies::{self, CelestialBody};
use crate::config::SolarConfig;
use crate::navigator::{Navigator, Preset};
use crate::ui::{self, Tooltip, UiState};

const FIXED_DT: f32 = 1.0 / 60.0;

pub struct SolarSystem {
    config: SolarConfig,
    sun: Option<CelestialBody>,
    planets: Vec<CelestialBody>,
    navigator: Navigator,
    driver: AnimationDriver,
    ui: UiState,
    /// Last pointer position seen this tick, for the hover test.
    hover_at: Option<Vec2>,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self::with_config(SolarConfig::default())
    }

    pub fn with_config(config: SolarConfig) -> Self {
        Self {
            navigator: Navigator::new(config.navigation.clone()),
            driver: AnimationDriver::from_config(&config),
            ui: UiState::new(&[]),
            sun: None,
            planets: Vec::new(),
            hover_at: None,
            config,
        }
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn planets(&self) -> &[CelestialBody] {
        &self.planets
    }

    pub fn is_playing(&self) -> bool {
        self.ui.playing
    }

    // ── Input handlers ─────────────────────────────────────────────

    fn set_speed(&mut self, ctx: &mut EngineContext, index: f32, value: f32) {
        if !value.is_finite() || value < 0.0 {
            log::warn!("ignoring speed {} for planet {}", value, index);
            return;
        }
        let i = index as usize;
        if !(index >= 0.0) || i >= self.planets.len() {
            log::warn!("ignoring speed for unknown planet {}", index);
            return;
        }
        self.planets[i].angular_speed_multiplier = value;
        self.ui.speed_labels[i] = ui::speed_label(value);
        let slot = i as f32;
        ctx.emit_latest(GameEvent::new(ui::EVENT_SPEED, slot, value, 0.0), |e| {
            e.kind == ui::EVENT_SPEED && e.a == slot
        });
    }

    fn toggle_play(&mut self, ctx: &mut EngineContext) {
        self.ui.playing = !self.ui.playing;
        log::debug!("playback {}", if self.ui.playing { "resumed" } else { "paused" });
        ctx.emit_latest(self.ui.playback_event(), |e| e.kind == ui::EVENT_PLAYBACK);
    }

    fn toggle_theme(&mut self, ctx: &mut EngineContext) {
        self.ui.theme = self.ui.theme.toggled();
        log::info!("theme: {:?}", self.ui.theme);
        ctx.emit_latest(self.ui.theme_event(), |e| e.kind == ui::EVENT_THEME);
    }

    fn handle_input(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        let now = ctx.clock.now();
        for event in input.iter() {
            match *event {
                InputEvent::KeyDown { .. } => {
                    if let Some(preset) = event.key_char().and_then(Preset::from_key) {
                        self.navigator.request_preset(preset, &ctx.camera, now);
                    }
                }
                InputEvent::DoubleClick { .. } => {
                    self.navigator.request_preset(Preset::Default, &ctx.camera, now);
                }
                InputEvent::PointerDown { x, y } => {
                    self.navigator.pointer_down(Vec2::new(x, y), &ctx.camera);
                }
                InputEvent::PointerUp { .. } => {
                    self.navigator.pointer_up();
                }
                InputEvent::PointerMove { x, y } => {
                    let pos = Vec2::new(x, y);
                    self.navigator.pointer_move(pos);
                    self.hover_at = Some(pos);
                }
                InputEvent::Wheel { delta_y } => {
                    self.navigator.wheel(delta_y, &mut ctx.camera);
                }
                InputEvent::Custom { kind, a, b, .. } => match kind {
                    ui::CUSTOM_SET_SPEED => self.set_speed(ctx, a, b),
                    ui::CUSTOM_TOGGLE_PLAY => self.toggle_play(ctx),
                    ui::CUSTOM_TOGGLE_THEME => self.toggle_theme(ctx),
                    other => log::warn!("unknown custom event {}", other),
                },
                _ => {}
            }
        }
    }

    /// Re-test the tooltip at the pointer; emits only when it changed.
    fn update_tooltip(&mut self, ctx: &mut EngineContext) {
        let Some(pointer) = self.hover_at.take() else {
            return;
        };
        let tooltip: Option<Tooltip> = ui::hover(
            ctx.scene.iter(),
            &ctx.camera,
            pointer,
            &self.planets,
            self.config.navigation.star_hit_threshold,
            self.config.tooltip_offset,
        );
        if tooltip != self.ui.tooltip {
            self.ui.tooltip = tooltip;
            ctx.emit_latest(self.ui.tooltip_event(), |e| e.kind == ui::EVENT_TOOLTIP);
        }
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        GameConfig {
            fixed_dt: FIXED_DT,
            max_sdf_instances: self.config.planets.len() + 1,
            max_points: self.config.stars.count,
            max_events: 32,
            ..GameConfig::default()
        }
    }

    fn reconfigure(&mut self, json: &str) -> Result<(), ConfigError> {
        *self = Self::with_config(SolarConfig::from_json(json)?);
        Ok(())
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        let cam = &self.config.camera;
        let viewport = ctx.camera.viewport;
        ctx.camera = Camera3D::new(cam.fov_deg, cam.near, cam.far, viewport.x, viewport.y);
        ctx.camera.position = Preset::Default.position(self.config.navigation.preset_distance);
        ctx.camera.look_at(Vec3::ZERO);

        let light = &self.config.lighting;
        let ambient = SDFColor::from_hex(light.ambient);
        let sun_light = SDFColor::from_hex(light.sun_light_color);
        ctx.lights.clear();
        ctx.lights.set_ambient(ambient.r, ambient.g, ambient.b);
        ctx.lights.add(
            PointLight::new(
                Vec3::ZERO,
                [sun_light.r, sun_light.g, sun_light.b],
                light.sun_light_intensity,
                light.sun_light_range,
            )
            .with_decay(light.sun_light_decay),
        );

        bodies::spawn_star_field(ctx, &self.config.stars);
        let (sun, planets) = bodies::spawn_bodies(ctx, &self.config);
        self.ui = UiState::new(&planets);
        self.sun = Some(sun);
        self.planets = planets;
        self.navigator = Navigator::new(self.config.navigation.clone());
        self.driver = AnimationDriver::from_config(&self.config);

        log::info!(
            "solar system: {} planets, {} stars",
            self.planets.len(),
            self.config.stars.count
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        self.handle_input(ctx, input);
        self.navigator.update(&mut ctx.camera, ctx.clock.now());

        if self.ui.playing {
            if let Some(sun) = self.sun.as_mut() {
                self.driver.step(sun, &mut self.planets, ctx.clock.now(), FIXED_DT);
                sun.sync(&mut ctx.scene);
            }
            for planet in &self.planets {
                planet.sync(&mut ctx.scene);
            }
        }

        self.update_tooltip(ctx);
    }
}
