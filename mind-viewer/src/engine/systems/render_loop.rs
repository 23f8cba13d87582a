use bevy::prelude::*;

use crate::engine::core::context::ViewerContext;
use crate::engine::loading::model_loader::{ModelRole, ModelSlot};

/// Slow continuous yaw of the loaded interactive model.
pub fn spin_interactive_model(time: Res<Time>, mut models: Query<(&ModelSlot, &mut Transform)>) {
    let dt = time.delta_secs();
    for (slot, mut transform) in &mut models {
        if slot.role == ModelRole::Interactive && slot.state.is_loaded() && slot.spin_speed != 0.0 {
            transform.rotate_y(slot.spin_speed * dt);
        }
    }
}

/// Run condition: hover picking only makes sense once the interactive model is in.
pub fn interactive_model_loaded(
    context: Option<Res<ViewerContext>>,
    slots: Query<&ModelSlot>,
) -> bool {
    context
        .and_then(|context| context.interactive_model)
        .and_then(|entity| slots.get(entity).ok())
        .is_some_and(|slot| slot.state.is_loaded())
}
