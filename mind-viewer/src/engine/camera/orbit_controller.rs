use std::f32::consts::{PI, TAU};

use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use serde::Deserialize;

use constants::camera::{AUTO_ROTATE_SPEED, DAMPING_FACTOR, POLAR_EPSILON, ROTATE_SPEED, ZOOM_STEP_SCALE};

use crate::engine::scene::layout::SurfaceLayout;
use crate::engine::scene::layers::ViewerScene;

/// Behaviour switches for one orbit controller. Panning is never available.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrbitSettings {
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub auto_rotate: bool,
    /// Full turns per minute (2.0 = one turn every 30 s).
    pub auto_rotate_speed: f32,
    pub rotate_speed: f32,
    pub enable_zoom: bool,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            enable_damping: true,
            damping_factor: DAMPING_FACTOR,
            auto_rotate: false,
            auto_rotate_speed: AUTO_ROTATE_SPEED,
            rotate_speed: ROTATE_SPEED,
            enable_zoom: false,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
        }
    }
}

/// Camera orbiting a fixed target on a sphere.
///
/// Input accumulates into pending deltas; `update` applies them. With damping
/// enabled only `damping_factor` of the pending delta is applied per update and
/// the remainder decays into an eased stop.
#[derive(Component, Debug, Clone)]
pub struct OrbitController {
    pub target: Vec3,
    pub settings: OrbitSettings,
    radius: f32,
    /// Azimuth around +Y, measured from +Z towards +X.
    theta: f32,
    /// Polar angle from +Y.
    phi: f32,
    delta_theta: f32,
    delta_phi: f32,
    pending_scale: f32,
}

impl OrbitController {
    pub fn new(position: Vec3, target: Vec3, settings: OrbitSettings) -> Self {
        let offset = position - target;
        let radius = offset.length();
        let (theta, phi) = if radius > 0.0 {
            (
                offset.x.atan2(offset.z),
                (offset.y / radius).clamp(-1.0, 1.0).acos(),
            )
        } else {
            (0.0, PI / 2.0)
        };

        Self {
            target,
            settings,
            radius,
            theta,
            phi,
            delta_theta: 0.0,
            delta_phi: 0.0,
            pending_scale: 1.0,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn rotate_left(&mut self, angle: f32) {
        self.delta_theta -= angle;
    }

    pub fn rotate_up(&mut self, angle: f32) {
        self.delta_phi -= angle;
    }

    /// Pointer drag of `delta` logical pixels over a surface `surface_height` pixels tall.
    pub fn drag(&mut self, delta: Vec2, surface_height: f32) {
        if surface_height <= 0.0 {
            return;
        }
        let speed = self.settings.rotate_speed;
        self.rotate_left(TAU * delta.x / surface_height * speed);
        self.rotate_up(TAU * delta.y / surface_height * speed);
    }

    /// Positive steps move towards the target.
    pub fn zoom(&mut self, steps: f32) {
        if !self.settings.enable_zoom {
            return;
        }
        self.pending_scale *= ZOOM_STEP_SCALE.powf(steps);
    }

    /// Advance one frame and return the new camera position.
    pub fn update(&mut self, dt: f32) -> Vec3 {
        if self.settings.auto_rotate {
            self.rotate_left(TAU / 60.0 * self.settings.auto_rotate_speed * dt);
        }

        if self.settings.enable_damping {
            let factor = self.settings.damping_factor;
            self.theta += self.delta_theta * factor;
            self.phi += self.delta_phi * factor;
        } else {
            self.theta += self.delta_theta;
            self.phi += self.delta_phi;
        }
        self.phi = self.phi.clamp(POLAR_EPSILON, PI - POLAR_EPSILON);

        self.radius = (self.radius * self.pending_scale)
            .clamp(self.settings.min_distance, self.settings.max_distance);
        self.pending_scale = 1.0;

        if self.settings.enable_damping {
            let keep = 1.0 - self.settings.damping_factor;
            self.delta_theta *= keep;
            self.delta_phi *= keep;
        } else {
            self.delta_theta = 0.0;
            self.delta_phi = 0.0;
        }

        self.position()
    }

    pub fn position(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        self.target
            + self.radius
                * Vec3::new(
                    sin_phi * self.theta.sin(),
                    self.phi.cos(),
                    sin_phi * self.theta.cos(),
                )
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position()).looking_at(self.target, Vec3::Y)
    }
}

/// Route drags and wheel input to the controller of the topmost surface under the cursor.
pub fn orbit_input(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut controllers: Query<(&ViewerScene, &mut OrbitController)>,
) {
    let drag: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    let mut scroll = 0.0;
    for ev in scroll_events.read() {
        scroll += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.01,
        };
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    let layout = SurfaceLayout::for_window(window.width(), window.height(), window.scale_factor());
    let scene = layout.topmost_at(cursor);
    let surface_height = layout.surface(scene).size.y;

    for (owner, mut controller) in &mut controllers {
        if *owner != scene {
            continue;
        }
        if mouse_button.pressed(MouseButton::Left) && drag != Vec2::ZERO {
            controller.drag(drag, surface_height);
        }
        if scroll.abs() > f32::EPSILON {
            controller.zoom(scroll);
        }
    }
}

/// Apply damping, auto-rotation and zoom to every orbit camera.
pub fn advance_orbit_controllers(
    time: Res<Time>,
    mut cameras: Query<(&mut OrbitController, &mut Transform)>,
) {
    let dt = time.delta_secs();
    for (mut controller, mut transform) in &mut cameras {
        controller.update(dt);
        *transform = controller.transform();
    }
}
