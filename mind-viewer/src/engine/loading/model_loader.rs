use bevy::gltf::Gltf;
use bevy::prelude::*;
use bevy::scene::SceneInstanceReady;

use super::entrance::EntranceAnimation;
use super::progress::{AssetProgress, ModelLoadState};
use crate::engine::assets::page_config::ModelConfig;
use crate::engine::scene::layers::ViewerScene;
use crate::error::ViewerError;
use crate::tools::picking::state::InfoPanelState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelRole {
    /// Pickable model in the interactive scene.
    Interactive,
    /// Decorative, clickable model in the logo scene.
    Logo,
}

impl ModelRole {
    pub fn scene(self) -> ViewerScene {
        match self {
            Self::Interactive => ViewerScene::Interactive,
            Self::Logo => ViewerScene::Logo,
        }
    }
}

/// Root entity a model is spawned under, tracking its load.
#[derive(Component, Debug, Clone)]
pub struct ModelSlot {
    pub role: ModelRole,
    pub path: String,
    pub gltf: Handle<Gltf>,
    pub target_scale: f32,
    /// Yaw in radians per second while loaded.
    pub spin_speed: f32,
    pub state: ModelLoadState,
}

/// Inserted on a slot once its scene instance has spawned.
#[derive(Component, Debug)]
pub struct ModelReady;

/// Start loading `model` and spawn its slot, collapsed to zero scale until the entrance plays.
pub fn spawn_model_slot(
    commands: &mut Commands,
    asset_server: &AssetServer,
    role: ModelRole,
    model: &ModelConfig,
) -> Entity {
    let scene = role.scene();
    let gltf = asset_server.load::<Gltf>(model.path.clone());
    info!("Loading {:?} model from {}", role, model.path);

    commands
        .spawn((
            Name::new(format!("{role:?}Model")),
            ModelSlot {
                role,
                path: model.path.clone(),
                gltf,
                target_scale: model.target_scale,
                spin_speed: model.spin_speed,
                state: ModelLoadState::Pending,
            },
            Transform::from_translation(model.translation())
                .with_rotation(Quat::from_rotation_y(model.rotation_y))
                .with_scale(Vec3::ZERO),
            Visibility::default(),
            scene,
            scene.render_layers(),
        ))
        .id()
}

/// What a slot's file can offer once the asset server reports it.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneSource {
    /// The `Gltf` asset is not in storage yet.
    Unavailable,
    /// The file loaded but holds no scene.
    Empty,
    Scene(Handle<Scene>),
}

impl SceneSource {
    fn of(gltf: Option<&Gltf>) -> Self {
        let Some(gltf) = gltf else {
            return Self::Unavailable;
        };
        gltf.default_scene
            .clone()
            .or_else(|| gltf.scenes.first().cloned())
            .map_or(Self::Empty, Self::Scene)
    }
}

/// Resolve pending slots: spawn the scene with its entrance on success, or record the failure.
pub fn advance_model_loads(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
    mut slots: Query<(Entity, &mut ModelSlot)>,
    mut panel: ResMut<InfoPanelState>,
) {
    for (entity, mut slot) in &mut slots {
        let progress = AssetProgress::from_load_state(asset_server.get_load_state(slot.gltf.id()));
        let source = SceneSource::of(gltfs.get(&slot.gltf));
        resolve_slot(&mut commands, entity, &mut slot, progress, source, &mut panel);
    }
}

/// One step of a slot's load. Only a `Pending` slot ever changes.
pub fn resolve_slot(
    commands: &mut Commands,
    entity: Entity,
    slot: &mut ModelSlot,
    progress: AssetProgress,
    source: SceneSource,
    panel: &mut InfoPanelState,
) {
    let Some(mut next) = slot.state.advance(progress) else {
        return;
    };

    if next == ModelLoadState::Loaded {
        match source {
            SceneSource::Unavailable => return,
            SceneSource::Empty => next = ModelLoadState::Failed("file contains no scenes".to_string()),
            SceneSource::Scene(scene) => {
                commands
                    .entity(entity)
                    .insert((SceneRoot(scene), EntranceAnimation::new(slot.target_scale)))
                    .observe(mark_model_ready);
                info!("Model {} loaded", slot.path);
            }
        }
    }

    if let ModelLoadState::Failed(reason) = &next {
        let err = ViewerError::ModelLoad {
            path: slot.path.clone(),
            reason: reason.clone(),
        };
        error!("{err}");
        if slot.role == ModelRole::Interactive {
            *panel = InfoPanelState::load_failure(&slot.path);
        }
    }

    slot.state = next;
}

fn mark_model_ready(trigger: Trigger<SceneInstanceReady>, mut commands: Commands) {
    commands.entity(trigger.target()).insert(ModelReady);
}
