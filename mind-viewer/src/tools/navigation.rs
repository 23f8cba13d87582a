use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use constants::render_settings::DOUBLE_CLICK_WINDOW_SECS;

use crate::engine::assets::page_config::MetadataRecord;
use crate::engine::core::context::ViewerContext;
use crate::engine::scene::layers::ViewerScene;
use crate::engine::scene::layout::SurfaceLayout;
use crate::tools::picking::controller::{PickTargets, cast_into_scene, surface_ray};

/// Request to leave the page for `url`. One-way; nothing is retried.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub url: String,
}

/// Pairs presses into double clicks.
#[derive(Resource, Debug, Default)]
pub struct ClickTracker {
    last_press: Option<f64>,
}

impl ClickTracker {
    /// Register a press at `now` seconds; true when it completes a double click.
    pub fn register(&mut self, now: f64) -> bool {
        match self.last_press.take() {
            Some(previous) if now - previous <= f64::from(DOUBLE_CLICK_WINDOW_SECS) => true,
            _ => {
                self.last_press = Some(now);
                false
            }
        }
    }
}

/// The hit leaf's own link wins over the page fallback.
pub fn resolve_logo_target(hit: Option<&MetadataRecord>, fallback: &str) -> String {
    hit.and_then(|r| r.page_url.clone())
        .unwrap_or_else(|| fallback.to_string())
}

pub fn navigate_on_logo_click(
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    context: Res<ViewerContext>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    targets: PickTargets,
    records: Query<&MetadataRecord>,
    mut requests: EventWriter<NavigationRequest>,
) {
    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    let layout = SurfaceLayout::for_window(window.width(), window.height(), window.scale_factor());
    if !layout.logo.contains(cursor) {
        return;
    }
    let Some(ray) = surface_ray(cursor, context.cameras.logo, &cameras) else {
        return;
    };

    let Some(hit) = cast_into_scene(ray, ViewerScene::Logo, &targets).first().copied() else {
        return;
    };

    let url = resolve_logo_target(
        records.get(hit.entity).ok(),
        &context.config.navigation.fallback_url,
    );
    requests.write(NavigationRequest { url });
}

/// Double-clicking a linked part of the interactive model opens its page.
pub fn follow_links_on_double_click(
    time: Res<Time>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut tracker: ResMut<ClickTracker>,
    windows: Query<&Window, With<PrimaryWindow>>,
    context: Res<ViewerContext>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    targets: PickTargets,
    records: Query<&MetadataRecord>,
    mut requests: EventWriter<NavigationRequest>,
) {
    if !context.config.navigation.open_links_on_double_click
        || !mouse_button.just_pressed(MouseButton::Left)
    {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    let layout = SurfaceLayout::for_window(window.width(), window.height(), window.scale_factor());
    if layout.topmost_at(cursor) != ViewerScene::Interactive {
        return;
    }
    if !tracker.register(time.elapsed_secs_f64()) {
        return;
    }

    let Some(ray) = surface_ray(cursor, context.cameras.interactive, &cameras) else {
        return;
    };
    let url = cast_into_scene(ray, ViewerScene::Interactive, &targets)
        .first()
        .and_then(|hit| records.get(hit.entity).ok())
        .and_then(|record| record.page_url.clone());

    if let Some(url) = url {
        requests.write(NavigationRequest { url });
    }
}

pub fn perform_navigation(mut requests: EventReader<NavigationRequest>) {
    let Some(request) = requests.read().last() else {
        return;
    };

    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            error!("Navigation to {} failed: no browser window", request.url);
            return;
        };
        info!("Navigating to {}", request.url);
        if let Err(err) = window.location().set_href(&request.url) {
            error!("Navigation to {} failed: {:?}", request.url, err);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        info!("Navigation requested: {}", request.url);
    }
}
