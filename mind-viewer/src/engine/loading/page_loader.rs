use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::model_loader::{ModelRole, spawn_model_slot};
use super::progress::AssetProgress;
use crate::engine::assets::page_config::PageConfig;
use crate::engine::core::app_state::AppState;
use crate::engine::core::context::ViewerContext;
use crate::engine::core::page_selection::PageSelection;
use crate::engine::render::normal_material::{LogoMaterial, NormalDebugMaterial};
use crate::engine::scene::composer::compose_scenes;
use crate::engine::scene::layout::SurfaceLayout;
use crate::error::ViewerError;
use crate::tools::picking::state::InfoPanelState;

/// Layout assumed until the window reports its size.
const FALLBACK_WINDOW_SIZE: Vec2 = Vec2::new(1280.0, 720.0);

#[derive(Resource, Default)]
pub struct PageLoader {
    handle: Option<Handle<PageConfig>>,
}

pub fn start_page_load(
    mut loader: ResMut<PageLoader>,
    selection: Res<PageSelection>,
    asset_server: Res<AssetServer>,
) {
    let path = PageConfig::asset_path(selection.name());
    info!("Loading page configuration from {path}");
    loader.handle = Some(asset_server.load(path));
}

/// Once the configuration is in, build the page and enter `Running`; a broken page ends in `PageFailed`.
pub fn await_page_config(
    mut commands: Commands,
    loader: Res<PageLoader>,
    selection: Res<PageSelection>,
    asset_server: Res<AssetServer>,
    configs: Res<Assets<PageConfig>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut normal_materials: ResMut<Assets<NormalDebugMaterial>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(handle) = &loader.handle else {
        return;
    };
    let path = PageConfig::asset_path(selection.name());

    match AssetProgress::from_load_state(asset_server.get_load_state(handle.id())) {
        AssetProgress::Loading => return,
        AssetProgress::Failed(reason) => {
            error!("{}", ViewerError::ConfigLoad { path, reason });
            next_state.set(AppState::PageFailed);
            return;
        }
        AssetProgress::Ready => {}
    }
    let Some(config) = configs.get(handle) else {
        return;
    };
    if let Err(err) = config.validate() {
        error!("Page {path} is invalid: {err}");
        next_state.set(AppState::PageFailed);
        return;
    }
    let config = config.clone();

    let layout = match windows.single() {
        Ok(window) => SurfaceLayout::for_window(window.width(), window.height(), window.scale_factor()),
        Err(_) => SurfaceLayout::for_window(FALLBACK_WINDOW_SIZE.x, FALLBACK_WINDOW_SIZE.y, 1.0),
    };
    let mut rng = rand::thread_rng();
    let cameras = match compose_scenes(
        &mut commands,
        &mut meshes,
        &mut materials,
        &config,
        &layout,
        &mut rng,
    ) {
        Ok(cameras) => cameras,
        Err(err) => {
            error!("Page {path} could not be composed: {err}");
            next_state.set(AppState::PageFailed);
            return;
        }
    };

    let interactive_model = config
        .model
        .as_ref()
        .map(|model| spawn_model_slot(&mut commands, &asset_server, ModelRole::Interactive, model));
    let logo_model = spawn_model_slot(&mut commands, &asset_server, ModelRole::Logo, &config.logo);

    commands.insert_resource(LogoMaterial(
        normal_materials.add(NormalDebugMaterial::default()),
    ));
    commands.insert_resource(InfoPanelState::hidden(config.default_info.clone()));
    info!(
        "Page '{}' composed with {} metadata records",
        selection.name(),
        config.metadata.len()
    );
    commands.insert_resource(ViewerContext {
        page: selection.name().to_string(),
        config,
        cameras,
        interactive_model,
        logo_model,
    });

    next_state.set(AppState::Running);
}
