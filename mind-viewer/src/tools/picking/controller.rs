use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::hit_test::{PickShape, RayHit, cast_ray};
use super::state::{InfoPanelState, SelectionState};
use crate::engine::assets::page_config::{InfoRecord, MetadataRecord};
use crate::engine::core::context::ViewerContext;
use crate::engine::scene::layers::ViewerScene;

pub type PickTargets<'w, 's> =
    Query<'w, 's, (Entity, &'static GlobalTransform, &'static PickShape, &'static ViewerScene)>;

/// Ray from `camera` through `pointer`, in logical window pixels.
///
/// The camera's own viewport decides which part of the window it covers, so the
/// same call serves the full-window scenes and the logo square.
pub fn surface_ray(
    pointer: Vec2,
    camera: Entity,
    cameras: &Query<(&Camera, &GlobalTransform)>,
) -> Option<Ray3d> {
    let (camera, transform) = cameras.get(camera).ok()?;
    camera.viewport_to_world(transform, pointer).ok()
}

/// Intersections with the pickable leaves of one scene, nearest first.
pub fn cast_into_scene(ray: Ray3d, scene: ViewerScene, targets: &PickTargets) -> Vec<RayHit> {
    cast_ray(
        ray,
        targets
            .iter()
            .filter(|(.., owner)| **owner == scene)
            .map(|(entity, transform, shape, _)| (entity, transform, shape)),
    )
}

/// Fold one pick result into the selection and info panel.
///
/// A hit selects exactly that entity and shows its record, or empty fields
/// when it has none. A miss clears the selection and restores the page default.
/// Writes go through `set_if_neq`, so repeating a result changes nothing.
pub fn apply_pick(
    hit: Option<(Entity, Option<&MetadataRecord>)>,
    selection: &mut impl DetectChangesMut<Inner = SelectionState>,
    panel: &mut impl DetectChangesMut<Inner = InfoPanelState>,
    default_info: &InfoRecord,
) {
    match hit {
        Some((entity, record)) => {
            selection.set_if_neq(SelectionState::holding(entity));
            let info = record.map(|r| r.info.clone()).unwrap_or_default();
            panel.set_if_neq(InfoPanelState::showing(info));
        }
        None => {
            selection.set_if_neq(SelectionState::default());
            panel.set_if_neq(InfoPanelState::hidden(default_info.clone()));
        }
    }
}

/// Hover picking against the interactive scene, once per frame for the latest pointer position.
pub fn pick_on_pointer_move(
    mut cursor_moved: EventReader<CursorMoved>,
    windows: Query<&Window, With<PrimaryWindow>>,
    context: Res<ViewerContext>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    targets: PickTargets,
    records: Query<&MetadataRecord>,
    mut selection: ResMut<SelectionState>,
    mut panel: ResMut<InfoPanelState>,
) {
    let Some(moved) = cursor_moved.read().last() else {
        return;
    };
    if windows.get(moved.window).is_err() {
        return;
    }
    let Some(ray) = surface_ray(moved.position, context.cameras.interactive, &cameras) else {
        return;
    };

    let nearest = cast_into_scene(ray, ViewerScene::Interactive, &targets)
        .first()
        .map(|hit| (hit.entity, records.get(hit.entity).ok()));

    apply_pick(
        nearest,
        &mut selection,
        &mut panel,
        &context.config.default_info,
    );
}

/// App with the camera systems a headless pick needs: projections and
/// viewports resolve in `PostUpdate`, the same as with the render plugins.
#[cfg(test)]
pub(crate) fn headless_camera_app() -> App {
    use bevy::asset::AssetEvent;
    use bevy::render::camera::{ManualTextureViews, camera_system};
    use bevy::window::{WindowCreated, WindowResized, WindowScaleFactorChanged};

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_event::<WindowResized>()
        .add_event::<WindowCreated>()
        .add_event::<WindowScaleFactorChanged>()
        .add_event::<AssetEvent<Image>>()
        .init_resource::<Assets<Image>>()
        .init_resource::<ManualTextureViews>()
        .add_systems(PostUpdate, camera_system);
    app
}
