use bevy::prelude::*;
use rand::Rng;

use constants::camera::{FULL_WINDOW_FAR, FULL_WINDOW_FOV_DEGREES, FULL_WINDOW_NEAR, LOGO_FAR, LOGO_FOV_DEGREES, LOGO_NEAR};
use constants::render_settings::AMBIENT_CLEAR_COLOUR;

use super::layers::ViewerScene;
use super::layout::SurfaceLayout;
use super::lighting::spawn_lighting;
use super::particles::spawn_particle_field;
use crate::engine::assets::page_config::PageConfig;
use crate::engine::camera::orbit_controller::{OrbitController, OrbitSettings};
use crate::engine::render::outline::HighlightStyle;
use crate::error::ViewerResult;

/// Camera entity of each scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneCameras {
    pub ambient: Entity,
    pub interactive: Entity,
    pub logo: Entity,
}

impl SceneCameras {
    pub fn camera(&self, scene: ViewerScene) -> Entity {
        match scene {
            ViewerScene::Ambient => self.ambient,
            ViewerScene::Interactive => self.interactive,
            ViewerScene::Logo => self.logo,
        }
    }
}

struct Lens {
    fov_degrees: f32,
    near: f32,
    far: f32,
}

/// Build the three scenes of a page: cameras with their controllers, the
/// particle field and the interactive lights. Models are spawned separately
/// once their slots exist.
pub fn compose_scenes(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    config: &PageConfig,
    layout: &SurfaceLayout,
    rng: &mut impl Rng,
) -> ViewerResult<SceneCameras> {
    let outline = HighlightStyle::from_style(&config.outline)?;
    spawn_particle_field(commands, meshes, materials, &config.particles, rng)?;
    spawn_lighting(commands, &config.lighting);

    let full_window = |fov_degrees| Lens {
        fov_degrees,
        near: FULL_WINDOW_NEAR,
        far: FULL_WINDOW_FAR,
    };

    let ambient = spawn_scene_camera(
        commands,
        ViewerScene::Ambient,
        layout,
        full_window(FULL_WINDOW_FOV_DEGREES),
        config.cameras.ambient_distance,
        &config.controls.ambient,
    );
    let interactive = spawn_scene_camera(
        commands,
        ViewerScene::Interactive,
        layout,
        full_window(config.cameras.interactive_fov),
        config.cameras.interactive_distance,
        &config.controls.interactive,
    );
    commands.entity(interactive).insert(outline);
    let logo = spawn_scene_camera(
        commands,
        ViewerScene::Logo,
        layout,
        Lens {
            fov_degrees: LOGO_FOV_DEGREES,
            near: LOGO_NEAR,
            far: LOGO_FAR,
        },
        config.cameras.logo_distance,
        &config.controls.logo,
    );

    debug!("Composed scenes for page '{}'", config.title);
    Ok(SceneCameras {
        ambient,
        interactive,
        logo,
    })
}

fn spawn_scene_camera(
    commands: &mut Commands,
    scene: ViewerScene,
    layout: &SurfaceLayout,
    lens: Lens,
    distance: f32,
    settings: &OrbitSettings,
) -> Entity {
    let orbit = OrbitController::new(Vec3::new(0.0, 0.0, distance), Vec3::ZERO, settings.clone());
    let clear_color = match scene {
        ViewerScene::Ambient => ClearColorConfig::Custom(AMBIENT_CLEAR_COLOUR),
        ViewerScene::Interactive | ViewerScene::Logo => ClearColorConfig::None,
    };

    commands
        .spawn((
            Name::new(format!("{scene:?}Camera")),
            Camera3d::default(),
            Camera {
                order: scene.camera_order(),
                clear_color,
                viewport: layout.viewport(scene),
                ..default()
            },
            Projection::Perspective(PerspectiveProjection {
                fov: lens.fov_degrees.to_radians(),
                near: lens.near,
                far: lens.far,
                aspect_ratio: layout.surface(scene).aspect_ratio(),
            }),
            orbit.transform(),
            orbit,
            scene,
            scene.render_layers(),
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use bevy::render::view::RenderLayers;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn composed(config: PageConfig) -> (World, ViewerResult<SceneCameras>) {
        let mut world = World::new();
        world.init_resource::<Assets<Mesh>>();
        world.init_resource::<Assets<StandardMaterial>>();
        let layout = SurfaceLayout::for_window(1280.0, 720.0, 2.0);

        let result = world
            .run_system_once(
                move |mut commands: Commands,
                      mut meshes: ResMut<Assets<Mesh>>,
                      mut materials: ResMut<Assets<StandardMaterial>>| {
                    let mut rng = StdRng::seed_from_u64(7);
                    compose_scenes(
                        &mut commands,
                        &mut meshes,
                        &mut materials,
                        &config,
                        &layout,
                        &mut rng,
                    )
                },
            )
            .unwrap();
        (world, result)
    }

    #[test]
    fn each_scene_gets_its_own_ordered_camera() {
        let (mut world, result) = composed(PageConfig::default());
        let cameras = result.unwrap();

        for scene in ViewerScene::ALL {
            let entity = cameras.camera(scene);
            let camera = world.get::<Camera>(entity).unwrap();
            assert_eq!(camera.order, scene.camera_order());
            assert_eq!(world.get::<RenderLayers>(entity), Some(&scene.render_layers()));
            assert_eq!(world.get::<ViewerScene>(entity), Some(&scene));
        }

        let logo = world.get::<Camera>(cameras.logo).unwrap();
        let viewport = logo.viewport.as_ref().unwrap();
        assert_eq!(viewport.physical_size, UVec2::splat(600));
        assert!(world.get::<Camera>(cameras.interactive).unwrap().viewport.is_none());

        assert!(world.get::<HighlightStyle>(cameras.interactive).is_some());
        assert!(world.get::<HighlightStyle>(cameras.logo).is_none());

        let transform = world.get::<Transform>(cameras.interactive).unwrap();
        assert!((transform.translation - Vec3::new(0.0, 0.0, 2.5)).length() < 1e-4);

        let lights = world.query::<&PointLight>().iter(&world).count();
        assert_eq!(lights, 5);
    }

    #[test]
    fn full_window_cameras_use_the_window_aspect() {
        let (world, result) = composed(PageConfig::default());
        let cameras = result.unwrap();
        let Projection::Perspective(perspective) =
            world.get::<Projection>(cameras.ambient).unwrap()
        else {
            panic!("expected a perspective projection");
        };
        assert!((perspective.aspect_ratio - 1280.0 / 720.0).abs() < 1e-6);
        assert!((perspective.fov - 75f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn bad_outline_colour_fails_before_spawning() {
        let mut config = PageConfig::default();
        config.outline.visible_edge_color = "lime".into();
        let (mut world, result) = composed(config);
        assert!(result.is_err());
        assert_eq!(world.query::<&Camera>().iter(&world).count(), 0);
    }
}
