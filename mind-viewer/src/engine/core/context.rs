use bevy::prelude::*;

use crate::engine::assets::page_config::PageConfig;
use crate::engine::scene::composer::SceneCameras;

/// Everything one running page owns, inserted once its configuration has loaded.
#[derive(Resource, Debug, Clone)]
pub struct ViewerContext {
    pub page: String,
    pub config: PageConfig,
    pub cameras: SceneCameras,
    /// Slot of the interactive model; pages without one have only particles and the logo.
    pub interactive_model: Option<Entity>,
    pub logo_model: Entity,
}
