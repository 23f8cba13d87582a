use std::collections::HashMap;

use bevy::prelude::*;

use super::model_loader::{ModelReady, ModelRole, ModelSlot};
use crate::engine::assets::colour::parse_hex_colour;
use crate::engine::assets::page_config::{MetadataRecord, SurfaceOverride};
use crate::engine::core::context::ViewerContext;
use crate::engine::render::normal_material::LogoMaterial;
use crate::tools::picking::hit_test::PickShape;

/// Record for a leaf: keyed by its own name, else by its parent's.
///
/// glTF nodes carry the authored name while their mesh primitives are spawned
/// as children, so a primitive usually matches through its parent.
pub fn resolve_metadata<'a>(
    own: Option<&str>,
    parent: Option<&str>,
    table: &'a HashMap<String, MetadataRecord>,
) -> Option<&'a MetadataRecord> {
    own.and_then(|name| table.get(name))
        .or_else(|| parent.and_then(|name| table.get(name)))
}

/// Walk a freshly spawned model and prepare every node for its scene.
///
/// Every descendant joins the slot's render layer. Leaves also get their pick
/// shape and metadata; logo leaves switch to normal shading and interactive
/// leaves take the page's surface override.
pub fn decorate_ready_models(
    mut commands: Commands,
    context: Res<ViewerContext>,
    ready: Query<(Entity, &ModelSlot), Added<ModelReady>>,
    children: Query<&Children>,
    names: Query<&Name>,
    parents: Query<&ChildOf>,
    leaves: Query<(&Mesh3d, Option<&MeshMaterial3d<StandardMaterial>>)>,
    meshes: Res<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    logo_material: Res<LogoMaterial>,
) {
    let surface = context.config.model.as_ref().and_then(|m| m.surface.as_ref());

    for (root, slot) in &ready {
        let scene = slot.role.scene();
        let mut tagged = 0usize;
        let mut described = 0usize;

        for node in children.iter_descendants(root) {
            let mut entity = commands.entity(node);
            entity.insert((scene, scene.render_layers()));
            tagged += 1;

            let Ok((mesh, material)) = leaves.get(node) else {
                continue;
            };

            let own = names.get(node).ok().map(Name::as_str);
            let parent = parents
                .get(node)
                .ok()
                .and_then(|child_of| names.get(child_of.parent()).ok())
                .map(Name::as_str);
            if let Some(record) = resolve_metadata(own, parent, &context.config.metadata) {
                entity.insert(record.clone());
                described += 1;
            }

            match meshes.get(&mesh.0).and_then(PickShape::from_mesh) {
                Some(shape) => {
                    entity.insert(shape);
                }
                None => debug!("{:?} has no pickable triangles", own),
            }

            match slot.role {
                ModelRole::Logo => {
                    entity
                        .remove::<MeshMaterial3d<StandardMaterial>>()
                        .insert(MeshMaterial3d(logo_material.0.clone()));
                }
                ModelRole::Interactive => {
                    if let (Some(surface), Some(material)) = (surface, material) {
                        if let Some(material) = materials.get_mut(&material.0) {
                            apply_surface_override(material, surface);
                        }
                    }
                }
            }
        }

        info!(
            "{} ready on page '{}': {tagged} nodes, {described} with metadata",
            slot.path, context.page
        );
    }
}

pub fn apply_surface_override(material: &mut StandardMaterial, surface: &SurfaceOverride) {
    if let Some(roughness) = surface.roughness {
        material.perceptual_roughness = roughness.clamp(0.0, 1.0);
    }
    if let Some(metallic) = surface.metallic {
        material.metallic = metallic.clamp(0.0, 1.0);
    }
    // Colours were checked when the page loaded.
    if let Some(emissive) = surface.emissive.as_deref().and_then(|hex| parse_hex_colour(hex).ok()) {
        material.emissive = emissive.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::page_config::{InfoRecord, PageConfig};
    use crate::engine::loading::progress::ModelLoadState;
    use crate::engine::render::normal_material::NormalDebugMaterial;
    use crate::engine::scene::composer::SceneCameras;
    use crate::engine::scene::layers::ViewerScene;
    use bevy::render::view::RenderLayers;

    fn record(name: &str) -> MetadataRecord {
        MetadataRecord {
            info: InfoRecord {
                name: name.to_string(),
                ..default()
            },
            page_url: None,
        }
    }

    fn table() -> HashMap<String, MetadataRecord> {
        HashMap::from([
            ("Current".to_string(), record("Current state")),
            ("Primitive".to_string(), record("Own name")),
        ])
    }

    #[test]
    fn own_name_wins_over_parent_name() {
        let table = table();
        assert_eq!(
            resolve_metadata(Some("Primitive"), Some("Current"), &table),
            Some(&record("Own name"))
        );
        assert_eq!(
            resolve_metadata(Some("Current.0"), Some("Current"), &table),
            Some(&record("Current state"))
        );
        assert_eq!(resolve_metadata(Some("Frontal"), None, &table), None);
        assert_eq!(resolve_metadata(None, None, &table), None);
    }

    #[test]
    fn surface_override_only_touches_given_fields() {
        let mut material = StandardMaterial {
            metallic: 0.3,
            ..default()
        };
        apply_surface_override(
            &mut material,
            &SurfaceOverride {
                roughness: Some(2.0),
                metallic: None,
                emissive: Some("#ff0000".into()),
            },
        );
        assert_eq!(material.perceptual_roughness, 1.0);
        assert_eq!(material.metallic, 0.3);
        assert!((material.emissive.red - 1.0).abs() < 1e-6);
    }

    fn decorated(role: ModelRole) -> (App, Entity, Entity, Entity) {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .init_resource::<LogoMaterial>()
            .add_systems(Update, decorate_ready_models);

        let cube = app
            .world_mut()
            .resource_mut::<Assets<Mesh>>()
            .add(Cuboid::new(1.0, 1.0, 1.0));

        let world = app.world_mut();
        let root = world
            .spawn((
                ModelSlot {
                    role,
                    path: "models/test.glb".into(),
                    gltf: Handle::default(),
                    target_scale: 1.0,
                    spin_speed: 0.0,
                    state: ModelLoadState::Loaded,
                },
                ModelReady,
            ))
            .id();
        let node = world.spawn((Name::new("Current"), ChildOf(root))).id();
        let leaf = world
            .spawn((Name::new("Current.0"), Mesh3d(cube.clone()), ChildOf(node)))
            .id();
        let stranger = world
            .spawn((Name::new("Occipital"), Mesh3d(cube), ChildOf(root)))
            .id();

        world.insert_resource(ViewerContext {
            page: "education".into(),
            config: PageConfig {
                metadata: table(),
                ..default()
            },
            cameras: SceneCameras {
                ambient: root,
                interactive: root,
                logo: root,
            },
            interactive_model: Some(root),
            logo_model: root,
        });

        app.update();
        (app, node, leaf, stranger)
    }

    #[test]
    fn leaves_get_layers_shapes_and_matching_records() {
        let (app, node, leaf, stranger) = decorated(ModelRole::Interactive);
        let world = app.world();
        let layers = ViewerScene::Interactive.render_layers();

        for entity in [node, leaf, stranger] {
            assert_eq!(world.get::<RenderLayers>(entity), Some(&layers));
            assert_eq!(world.get::<ViewerScene>(entity), Some(&ViewerScene::Interactive));
        }
        assert_eq!(world.get::<MetadataRecord>(leaf), Some(&record("Current state")));
        assert!(world.get::<MetadataRecord>(stranger).is_none());
        assert_eq!(world.get::<PickShape>(leaf).map(PickShape::triangle_count), Some(12));
        assert!(world.get::<PickShape>(node).is_none());
    }

    #[test]
    fn logo_leaves_switch_to_normal_shading() {
        let (app, _, leaf, _) = decorated(ModelRole::Logo);
        let world = app.world();
        assert!(world.get::<MeshMaterial3d<NormalDebugMaterial>>(leaf).is_some());
        assert_eq!(world.get::<ViewerScene>(leaf), Some(&ViewerScene::Logo));
    }
}
