/// UI bridge state: what the host page shows besides the canvas.
///
/// Rust owns the state; the host learns about changes through game events
/// and reads strings back through the exported accessors.

use glam::Vec2;
use orrery_engine::*;

use crate::bodies::CelestialBody;

// ── Custom event kinds from the host page ────────────────────────────

/// a = planet index, b = slider value.
pub const CUSTOM_SET_SPEED: u32 = 1;
pub const CUSTOM_TOGGLE_PLAY: u32 = 2;
pub const CUSTOM_TOGGLE_THEME: u32 = 3;

// ── Game event kinds to the host page ────────────────────────────────

/// a = 1 visible / 0 hidden, b = left px, c = top px. Text via `get_tooltip_text`.
pub const EVENT_TOOLTIP: f32 = 1.0;
/// a = planet index, b = speed. Label via `get_speed_label`.
pub const EVENT_SPEED: f32 = 2.0;
/// a = 1 playing / 0 paused. Label via `get_play_label`.
pub const EVENT_PLAYBACK: f32 = 3.0;
/// a = 1 when the light theme is on.
pub const EVENT_THEME: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Class the host page puts on `<body>`.
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Dark => "",
            Theme::Light => "light-theme",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub text: String,
    /// Top-left corner in viewport pixels.
    pub pos: Vec2,
}

/// First letter upper-cased, the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Slider readout, e.g. `1.5x`.
pub fn speed_label(speed: f32) -> String {
    format!("{speed}x")
}

pub fn play_label(playing: bool) -> &'static str {
    if playing {
        "Pause"
    } else {
        "Play"
    }
}

/// Tooltip for whatever lies under `pointer`.
///
/// Only the nearest hit counts: a star or the sun in front of a planet hides
/// the tooltip just like empty space does.
pub fn hover<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    camera: &Camera3D,
    pointer: Vec2,
    planets: &[CelestialBody],
    star_threshold: f32,
    offset: f32,
) -> Option<Tooltip> {
    let ray = camera.screen_ray(pointer);
    let hit = first_hit(entities, &ray, star_threshold)?;
    planets.iter().find(|p| p.entity == hit.entity).map(|planet| Tooltip {
        text: capitalize(&planet.name),
        pos: pointer + Vec2::splat(offset),
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub tooltip: Option<Tooltip>,
    pub theme: Theme,
    pub speed_labels: Vec<String>,
    pub playing: bool,
}

impl UiState {
    pub fn new(planets: &[CelestialBody]) -> Self {
        Self {
            tooltip: None,
            theme: Theme::default(),
            speed_labels: planets.iter().map(|p| speed_label(p.angular_speed_multiplier)).collect(),
            playing: true,
        }
    }

    pub fn tooltip_text(&self) -> &str {
        self.tooltip.as_ref().map_or("", |t| t.text.as_str())
    }

    pub fn speed_label(&self, index: usize) -> &str {
        self.speed_labels.get(index).map_or("", String::as_str)
    }

    pub fn play_label(&self) -> &'static str {
        play_label(self.playing)
    }

    pub fn tooltip_event(&self) -> GameEvent {
        match &self.tooltip {
            Some(t) => GameEvent::new(EVENT_TOOLTIP, 1.0, t.pos.x, t.pos.y),
            None => GameEvent::new(EVENT_TOOLTIP, 0.0, 0.0, 0.0),
        }
    }

    pub fn playback_event(&self) -> GameEvent {
        GameEvent::new(EVENT_PLAYBACK, if self.playing { 1.0 } else { 0.0 }, 0.0, 0.0)
    }

    pub fn theme_event(&self) -> GameEvent {
        GameEvent::new(EVENT_THEME, if self.theme == Theme::Light { 1.0 } else { 0.0 }, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{spawn_bodies, spawn_star_field};
    use crate::config::{SolarConfig, StarFieldConfig};
    use glam::Vec3;

    #[test]
    fn capitalizes_first_letter() {
        assert_eq!(capitalize("jupiter"), "Jupiter");
        assert_eq!(capitalize("e"), "E");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn labels() {
        assert_eq!(speed_label(1.0), "1x");
        assert_eq!(speed_label(2.5), "2.5x");
        assert_eq!(speed_label(0.0), "0x");
        assert_eq!(play_label(true), "Pause");
        assert_eq!(play_label(false), "Play");
    }

    #[test]
    fn theme_toggles() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.css_class(), "light-theme");
        assert_eq!(Theme::Light.toggled().css_class(), "");
    }

    fn scene_with(config: &SolarConfig) -> (EngineContext, Vec<CelestialBody>) {
        let mut ctx = EngineContext::new();
        let (_, planets) = spawn_bodies(&mut ctx, config);
        ctx.camera = Camera3D::new(75.0, 0.1, 1000.0, 800.0, 600.0);
        ctx.camera.position = Vec3::new(0.0, 0.0, 50.0);
        (ctx, planets)
    }

    fn screen_of(ctx: &EngineContext, world: Vec3) -> Vec2 {
        ctx.camera.project(world).unwrap().pos
    }

    #[test]
    fn hovering_a_planet_shows_its_name() {
        let config = SolarConfig::default();
        let (ctx, planets) = scene_with(&config);
        let pointer = screen_of(&ctx, Vec3::new(28.0, 0.0, 0.0));

        let tip = hover(ctx.scene.iter(), &ctx.camera, pointer, &planets, 1.0, 10.0).unwrap();
        assert_eq!(tip.text, "Jupiter");
        assert_eq!(tip.pos, pointer + Vec2::new(10.0, 10.0));
    }

    #[test]
    fn sun_and_empty_space_hide_tooltip() {
        let config = SolarConfig::default();
        let (ctx, planets) = scene_with(&config);

        let sun = screen_of(&ctx, Vec3::ZERO);
        assert!(hover(ctx.scene.iter(), &ctx.camera, sun, &planets, 1.0, 10.0).is_none());

        let empty = screen_of(&ctx, Vec3::new(0.0, 20.0, 0.0));
        assert!(hover(ctx.scene.iter(), &ctx.camera, empty, &planets, 1.0, 10.0).is_none());
    }

    #[test]
    fn star_in_front_hides_tooltip() {
        let config = SolarConfig {
            stars: StarFieldConfig { count: 0, ..Default::default() },
            ..Default::default()
        };
        let (mut ctx, planets) = scene_with(&config);
        let stars = spawn_star_field(&mut ctx, &config.stars);
        // One star on the line of sight between camera and Earth.
        ctx.scene.get_mut(stars).unwrap().points = Some(PointCloud::new(
            vec![Vec3::new(8.0, 0.0, 25.0)],
            SDFColor::WHITE,
            0.1,
        ));
        let pointer = screen_of(&ctx, Vec3::new(16.0, 0.0, 0.0));
        assert!(hover(ctx.scene.iter(), &ctx.camera, pointer, &planets, 1.0, 10.0).is_none());
    }

    #[test]
    fn state_reports_labels_and_events() {
        let config = SolarConfig::default();
        let (_, planets) = scene_with(&config);
        let mut ui = UiState::new(&planets);
        assert_eq!(ui.speed_label(0), "1x");
        assert_eq!(ui.speed_label(99), "");
        assert_eq!(ui.play_label(), "Pause");
        assert_eq!(ui.tooltip_text(), "");
        assert_eq!(ui.tooltip_event().a, 0.0);

        ui.tooltip = Some(Tooltip { text: "Mars".into(), pos: Vec2::new(5.0, 6.0) });
        assert_eq!(ui.tooltip_text(), "Mars");
        assert_eq!(ui.tooltip_event(), GameEvent::new(EVENT_TOOLTIP, 1.0, 5.0, 6.0));

        ui.playing = false;
        ui.theme = Theme::Light;
        assert_eq!(ui.playback_event().a, 0.0);
        assert_eq!(ui.theme_event().a, 1.0);
    }
}
