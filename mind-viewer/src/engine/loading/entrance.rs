use bevy::prelude::*;

use constants::render_settings::ENTRANCE_DURATION_SECS;

/// One-shot uniform scale-up from zero, removed when finished.
#[derive(Component, Debug, Clone)]
pub struct EntranceAnimation {
    target_scale: f32,
    duration: f32,
    elapsed: f32,
}

impl EntranceAnimation {
    pub fn new(target_scale: f32) -> Self {
        Self {
            target_scale,
            duration: ENTRANCE_DURATION_SECS,
            elapsed: 0.0,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    pub fn scale(&self) -> f32 {
        let t = if self.duration > 0.0 { self.elapsed / self.duration } else { 1.0 };
        self.target_scale * ease_out_quad(t)
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Decelerating ease, `1 - (1 - t)^2`, clamped to `[0, 1]`.
pub fn ease_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

pub fn advance_entrance_animations(
    mut commands: Commands,
    time: Res<Time>,
    mut animated: Query<(Entity, &mut EntranceAnimation, &mut Transform)>,
) {
    for (entity, mut animation, mut transform) in &mut animated {
        animation.advance(time.delta_secs());
        transform.scale = Vec3::splat(animation.scale());
        if animation.finished() {
            commands.entity(entity).remove::<EntranceAnimation>();
        }
    }
}
