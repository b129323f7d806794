/// Camera navigation: preset views, drag-to-orbit and wheel zoom.
///
/// Exactly one interaction owns the camera at a time:
///
/// | event           | Idle          | PresetTransitioning | Dragging             |
/// |-----------------|---------------|---------------------|----------------------|
/// | preset request  | → transition  | restart from here   | end drag, transition |
/// | pointer down    | → dragging    | cancel, → dragging  | restart drag         |
/// | pointer up      | -             | -                   | → idle               |
/// | wheel           | zoom          | cancel, zoom, idle  | zoom                 |

use glam::{Vec2, Vec3};
use orrery_engine::{ease_vec3, Camera3D, Easing};

use crate::config::NavigationConfig;

// ── Presets ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Default,
    Top,
    Bottom,
    Left,
    Right,
    Front,
    Back,
}

impl Preset {
    /// Keyboard binding, case-insensitive. `k` is "back" since `b` is taken.
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'd' => Some(Preset::Default),
            't' => Some(Preset::Top),
            'b' => Some(Preset::Bottom),
            'l' => Some(Preset::Left),
            'r' => Some(Preset::Right),
            'f' => Some(Preset::Front),
            'k' => Some(Preset::Back),
            _ => None,
        }
    }

    /// Unit vector from the sun toward the camera.
    pub fn direction(self) -> Vec3 {
        match self {
            Preset::Default | Preset::Front => Vec3::Z,
            Preset::Top => Vec3::Y,
            Preset::Bottom => Vec3::NEG_Y,
            Preset::Left => Vec3::NEG_X,
            Preset::Right => Vec3::X,
            Preset::Back => Vec3::NEG_Z,
        }
    }

    pub fn position(self, distance: f32) -> Vec3 {
        self.direction() * distance
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Default => "default",
            Preset::Top => "top",
            Preset::Bottom => "bottom",
            Preset::Left => "left",
            Preset::Right => "right",
            Preset::Front => "front",
            Preset::Back => "back",
        }
    }
}

// ── Transition ───────────────────────────────────────────────────────

/// Eased camera move between two positions, sampled against the frame clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: Vec3,
    pub to: Vec3,
    /// Clock seconds at which the move began.
    pub started_at: f64,
    /// Seconds.
    pub duration: f64,
}

impl Transition {
    pub fn new(from: Vec3, to: Vec3, started_at: f64, duration: f64) -> Self {
        Self { from, to, started_at, duration }
    }

    /// Linear progress in [0, 1].
    pub fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.started_at) / self.duration).clamp(0.0, 1.0) as f32
    }

    pub fn is_finished(&self, now: f64) -> bool {
        now - self.started_at >= self.duration
    }

    /// Camera position at `now`. Lands exactly on `to` once finished.
    pub fn sample(&self, now: f64) -> Vec3 {
        if self.is_finished(now) {
            return self.to;
        }
        ease_vec3(self.from, self.to, self.progress(now), Easing::CubicOut)
    }
}

// ── Interaction state ────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction {
    Idle,
    PresetTransitioning(Transition),
    /// `last` is the previous pointer position in viewport pixels.
    Dragging { last: Vec2 },
}

/// Camera position on a sphere of radius `r` around the origin.
pub fn orbit_position(r: f32, yaw: f32, pitch: f32) -> Vec3 {
    let (sin_yaw, cos_yaw) = yaw.sin_cos();
    let (sin_pitch, cos_pitch) = pitch.sin_cos();
    Vec3::new(r * sin_yaw * cos_pitch, r * sin_pitch, r * cos_yaw * cos_pitch)
}

/// Move `position` along its axis by `delta_y · zoom_speed`, keeping the
/// distance from the origin inside the zoom range.
pub fn zoom_position(position: Vec3, delta_y: f32, settings: &NavigationConfig) -> Vec3 {
    let axis = position.try_normalize().unwrap_or(Vec3::Z);
    let distance = (position.length() + delta_y * settings.zoom_speed)
        .clamp(settings.zoom_min, settings.zoom_max);
    axis * distance
}

pub struct Navigator {
    settings: NavigationConfig,
    mode: Interaction,
    yaw: f32,
    pitch: f32,
    target_yaw: f32,
    target_pitch: f32,
}

impl Navigator {
    pub fn new(settings: NavigationConfig) -> Self {
        Self {
            settings,
            mode: Interaction::Idle,
            yaw: 0.0,
            pitch: 0.0,
            target_yaw: 0.0,
            target_pitch: 0.0,
        }
    }

    pub fn mode(&self) -> Interaction {
        self.mode
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.mode, Interaction::Dragging { .. })
    }

    /// Live and target (yaw, pitch), radians.
    pub fn angles(&self) -> ((f32, f32), (f32, f32)) {
        ((self.yaw, self.pitch), (self.target_yaw, self.target_pitch))
    }

    /// Start an eased move to `preset` from wherever the camera is now.
    pub fn request_preset(&mut self, preset: Preset, camera: &Camera3D, now: f64) {
        if self.is_dragging() {
            log::debug!("drag ended by preset request");
        }
        let target = preset.position(self.settings.preset_distance);
        let duration = self.settings.transition_ms / 1000.0;
        self.mode = Interaction::PresetTransitioning(Transition::new(camera.position, target, now, duration));
        log::debug!("camera → {} view", preset.name());
    }

    pub fn pointer_down(&mut self, pos: Vec2, camera: &Camera3D) {
        if let Interaction::PresetTransitioning(_) = self.mode {
            log::debug!("preset transition cancelled by drag");
        }
        self.sync_angles(camera.position);
        self.mode = Interaction::Dragging { last: pos };
        log::debug!("drag start at ({}, {})", pos.x, pos.y);
    }

    pub fn pointer_move(&mut self, pos: Vec2) {
        if let Interaction::Dragging { last } = self.mode {
            let delta = pos - last;
            let limit = self.settings.pitch_limit;
            self.target_yaw += delta.x * self.settings.orbit_sensitivity;
            self.target_pitch = (self.target_pitch + delta.y * self.settings.orbit_sensitivity).clamp(-limit, limit);
            self.mode = Interaction::Dragging { last: pos };
        }
    }

    pub fn pointer_up(&mut self) {
        if self.is_dragging() {
            self.mode = Interaction::Idle;
            log::debug!("drag end");
        }
    }

    /// Zoom along the camera's current axis.
    pub fn wheel(&mut self, delta_y: f32, camera: &mut Camera3D) {
        if !delta_y.is_finite() {
            log::warn!("ignoring non-finite wheel delta {}", delta_y);
            return;
        }
        if let Interaction::PresetTransitioning(_) = self.mode {
            self.mode = Interaction::Idle;
            log::debug!("preset transition cancelled by zoom");
        }
        camera.position = zoom_position(camera.position, delta_y, &self.settings);
        camera.look_at(Vec3::ZERO);
    }

    /// Per-tick camera update for the active interaction.
    pub fn update(&mut self, camera: &mut Camera3D, now: f64) {
        match self.mode {
            Interaction::Idle => {}
            Interaction::PresetTransitioning(transition) => {
                camera.position = transition.sample(now);
                camera.look_at(Vec3::ZERO);
                if transition.is_finished(now) {
                    self.mode = Interaction::Idle;
                }
            }
            Interaction::Dragging { .. } => {
                let k = self.settings.orbit_smoothing;
                self.yaw += (self.target_yaw - self.yaw) * k;
                self.pitch += (self.target_pitch - self.pitch) * k;
                let r = camera.position.length();
                camera.position = orbit_position(r, self.yaw, self.pitch);
                camera.look_at(Vec3::ZERO);
            }
        }
    }

    /// Read yaw/pitch back from a camera position so a drag continues from
    /// the current view instead of snapping.
    fn sync_angles(&mut self, position: Vec3) {
        let r = position.length();
        if r < 1e-6 {
            return;
        }
        self.yaw = position.x.atan2(position.z);
        self.pitch = (position.y / r).clamp(-1.0, 1.0).asin();
        let limit = self.settings.pitch_limit;
        self.target_yaw = self.yaw;
        self.target_pitch = self.pitch.clamp(-limit, limit);
    }
}
