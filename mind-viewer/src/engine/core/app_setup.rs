use bevy::asset::AssetMetaCheck;
use bevy::log::{Level, LogPlugin};
use bevy::pbr::wireframe::{WireframeConfig, WireframePlugin};
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use constants::paths::PAGE_CONFIG_EXTENSION;
use constants::render_settings::LOG_FILTER;

// Crate engine modules
use crate::engine::assets::page_config::PageConfig;
use crate::engine::camera::orbit_controller::{advance_orbit_controllers, orbit_input};
use crate::engine::core::app_state::AppState;
use crate::engine::core::page_selection::PageSelection;
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::decorate::decorate_ready_models;
use crate::engine::loading::entrance::advance_entrance_animations;
use crate::engine::loading::model_loader::advance_model_loads;
use crate::engine::loading::page_loader::{PageLoader, await_page_config, start_page_load};
use crate::engine::render::normal_material::{LogoMaterial, NormalDebugMaterial};
use crate::engine::render::outline::sync_outline_selection;
use crate::engine::scene::layout::handle_window_resize;
use crate::engine::scene::particles::drift_particles;
use crate::engine::systems::render_loop::{interactive_model_loaded, spin_interactive_model};
use crate::engine::systems::visibility::{PageVisibility, page_is_visible, track_page_visibility};
// Crate tools modules
use crate::tools::info_panel::InfoPanelPlugin;
use crate::tools::navigation::{
    ClickTracker, NavigationRequest, follow_links_on_double_click, navigate_on_logo_click,
    perform_navigation,
};
use crate::tools::picking::controller::pick_on_pointer_move;
use crate::tools::picking::state::SelectionState;

pub fn create_app(page: PageSelection) -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins(page.name()))
        .init_state::<AppState>()
        // Registers PageConfig as a loadable asset type from `*.page.json` files.
        .add_plugins(JsonAssetPlugin::<PageConfig>::new(&[PAGE_CONFIG_EXTENSION]))
        .add_plugins(MaterialPlugin::<NormalDebugMaterial>::default())
        .add_plugins(WireframePlugin::default())
        .insert_resource(WireframeConfig {
            global: false,
            default_color: Color::WHITE,
        })
        .add_plugins(InfoPanelPlugin);

    // Initialise resources early
    app.insert_resource(page)
        .init_resource::<PageLoader>()
        .init_resource::<SelectionState>()
        .init_resource::<PageVisibility>()
        .init_resource::<ClickTracker>()
        .init_resource::<LogoMaterial>()
        .add_event::<NavigationRequest>();

    // State-based system scheduling
    app.add_systems(Startup, start_page_load).add_systems(
        Update,
        await_page_config.run_if(in_state(AppState::LoadingPage)),
    );

    let runtime_systems = (
        track_page_visibility,
        handle_window_resize,
        advance_model_loads,
        decorate_ready_models,
        orbit_input,
        (
            advance_entrance_animations,
            spin_interactive_model,
            drift_particles,
            advance_orbit_controllers,
        )
            .run_if(page_is_visible),
        (pick_on_pointer_move, follow_links_on_double_click).run_if(interactive_model_loaded),
        navigate_on_logo_click,
        perform_navigation,
        sync_outline_selection.run_if(resource_changed::<SelectionState>),
    )
        .chain();

    app.add_systems(Update, runtime_systems.run_if(in_state(AppState::Running)));

    app
}

fn create_default_plugins(page: &str) -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config(page)),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let log_config = LogPlugin {
        filter: LOG_FILTER.to_string(),
        level: Level::INFO,
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}
