use bevy::prelude::*;
use bevy::render::camera::Viewport;
use bevy::window::{PrimaryWindow, WindowResized};

use constants::surfaces::{LOGO_SURFACE_MARGIN, LOGO_SURFACE_SIZE};

use super::layers::ViewerScene;

/// Rectangle of the window a scene draws into, in logical pixels with a top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl SurfaceRect {
    pub fn contains(&self, point: Vec2) -> bool {
        let local = point - self.origin;
        local.x >= 0.0 && local.y >= 0.0 && local.x <= self.size.x && local.y <= self.size.y
    }

    pub fn aspect_ratio(&self) -> f32 {
        if self.size.y > 0.0 { self.size.x / self.size.y } else { 1.0 }
    }

    pub fn viewport(&self, scale_factor: f32) -> Viewport {
        Viewport {
            physical_position: (self.origin * scale_factor).round().as_uvec2(),
            physical_size: (self.size * scale_factor).round().max(Vec2::ONE).as_uvec2(),
            ..default()
        }
    }
}

/// Where each scene lands inside the window.
///
/// Ambient particles and the interactive model both cover the whole window;
/// the logo is a fixed square in the top-left corner whatever the window size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceLayout {
    pub scale_factor: f32,
    pub ambient: SurfaceRect,
    pub interactive: SurfaceRect,
    pub logo: SurfaceRect,
}

impl SurfaceLayout {
    pub fn for_window(width: f32, height: f32, scale_factor: f32) -> Self {
        let full = SurfaceRect {
            origin: Vec2::ZERO,
            size: Vec2::new(width, height),
        };
        Self {
            scale_factor,
            ambient: full,
            interactive: full,
            logo: SurfaceRect {
                origin: Vec2::splat(LOGO_SURFACE_MARGIN),
                size: Vec2::splat(LOGO_SURFACE_SIZE),
            },
        }
    }

    pub fn surface(&self, scene: ViewerScene) -> SurfaceRect {
        match scene {
            ViewerScene::Ambient => self.ambient,
            ViewerScene::Interactive => self.interactive,
            ViewerScene::Logo => self.logo,
        }
    }

    /// Scene receiving pointer input at `point`.
    pub fn topmost_at(&self, point: Vec2) -> ViewerScene {
        if self.logo.contains(point) {
            ViewerScene::Logo
        } else {
            ViewerScene::Interactive
        }
    }

    /// Full-window scenes follow the window; the logo keeps its own viewport.
    pub fn viewport(&self, scene: ViewerScene) -> Option<Viewport> {
        match scene {
            ViewerScene::Logo => Some(self.logo.viewport(self.scale_factor)),
            ViewerScene::Ambient | ViewerScene::Interactive => None,
        }
    }
}

/// Recompute camera aspect ratios and viewports from the current window size.
pub fn handle_window_resize(
    mut resized: EventReader<WindowResized>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut cameras: Query<(&ViewerScene, &mut Camera, &mut Projection)>,
) {
    let Some(event) = resized.read().last() else {
        return;
    };
    let Ok(window) = windows.get(event.window) else {
        return;
    };

    let layout = SurfaceLayout::for_window(event.width, event.height, window.scale_factor());
    apply_layout(&layout, &mut cameras);
    debug!("Resized surfaces to {}x{}", event.width, event.height);
}

pub fn apply_layout(
    layout: &SurfaceLayout,
    cameras: &mut Query<(&ViewerScene, &mut Camera, &mut Projection)>,
) {
    for (scene, mut camera, mut projection) in cameras.iter_mut() {
        camera.viewport = layout.viewport(*scene);
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.aspect_ratio = layout.surface(*scene).aspect_ratio();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::window::WindowResolution;

    #[test]
    fn logo_square_is_topmost_inside_its_rect() {
        let layout = SurfaceLayout::for_window(1920.0, 1080.0, 1.0);
        let centre = layout.logo.origin + layout.logo.size / 2.0;
        assert!(layout.logo.contains(centre));
        assert_eq!(layout.topmost_at(centre), ViewerScene::Logo);
        assert_eq!(layout.topmost_at(Vec2::new(1000.0, 700.0)), ViewerScene::Interactive);
    }

    #[test]
    fn logo_surface_ignores_window_size() {
        let small = SurfaceLayout::for_window(640.0, 480.0, 1.0);
        let large = SurfaceLayout::for_window(2560.0, 1440.0, 1.0);
        assert_eq!(small.logo, large.logo);
        assert_eq!(large.logo.size, Vec2::splat(LOGO_SURFACE_SIZE));
        assert_eq!(large.interactive.aspect_ratio(), 2560.0 / 1440.0);
    }

    #[test]
    fn logo_viewport_scales_with_pixel_density() {
        let layout = SurfaceLayout::for_window(800.0, 600.0, 2.0);
        let viewport = layout.viewport(ViewerScene::Logo).unwrap();
        assert_eq!(viewport.physical_size, UVec2::splat((LOGO_SURFACE_SIZE * 2.0) as u32));
        assert!(layout.viewport(ViewerScene::Interactive).is_none());
    }

    #[test]
    fn resize_updates_full_window_aspect_only() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<WindowResized>()
            .add_systems(Update, handle_window_resize);

        let window = app
            .world_mut()
            .spawn((
                Window {
                    resolution: WindowResolution::new(1200.0, 600.0),
                    ..default()
                },
                PrimaryWindow,
            ))
            .id();

        let spawn_camera = |app: &mut App, scene: ViewerScene, aspect: f32| {
            app.world_mut()
                .spawn((
                    scene,
                    Camera::default(),
                    Projection::from(PerspectiveProjection {
                        aspect_ratio: aspect,
                        ..default()
                    }),
                ))
                .id()
        };
        let ambient = spawn_camera(&mut app, ViewerScene::Ambient, 1.0);
        let interactive = spawn_camera(&mut app, ViewerScene::Interactive, 1.0);
        let logo = spawn_camera(&mut app, ViewerScene::Logo, 1.0);

        app.world_mut().send_event(WindowResized {
            window,
            width: 1200.0,
            height: 600.0,
        });
        app.update();

        let aspect_of = |app: &App, entity: Entity| match app.world().get::<Projection>(entity) {
            Some(Projection::Perspective(p)) => p.aspect_ratio,
            _ => panic!("expected a perspective projection"),
        };
        assert_eq!(aspect_of(&app, ambient), 2.0);
        assert_eq!(aspect_of(&app, interactive), 2.0);
        assert_eq!(aspect_of(&app, logo), 1.0);

        let logo_camera = app.world().get::<Camera>(logo).unwrap();
        assert_eq!(
            logo_camera.viewport.as_ref().map(|v| v.physical_size),
            Some(UVec2::splat(LOGO_SURFACE_SIZE as u32))
        );
        assert!(app.world().get::<Camera>(interactive).unwrap().viewport.is_none());
    }
}
