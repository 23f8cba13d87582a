use bevy::prelude::*;

use constants::render_settings::{
    AMBIENT_BRIGHTNESS_PER_UNIT, DIRECTIONAL_LUX_PER_UNIT, POINT_LIGHT_LUMENS_PER_UNIT,
};

use super::layers::ViewerScene;
use crate::engine::assets::page_config::LightingConfig;

/// Lights for the interactive scene only; the other scenes are unlit.
pub fn spawn_lighting(commands: &mut Commands, lighting: &LightingConfig) {
    let scene = ViewerScene::Interactive;

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: lighting.ambient * AMBIENT_BRIGHTNESS_PER_UNIT,
        ..default()
    });

    for light in &lighting.point_lights {
        commands.spawn((
            PointLight {
                intensity: light.intensity * POINT_LIGHT_LUMENS_PER_UNIT,
                range: light.range,
                shadows_enabled: lighting.shadows,
                ..default()
            },
            Transform::from_translation(Vec3::from_array(light.position)),
            scene,
            scene.render_layers(),
        ));
    }

    if let Some(spot) = &lighting.spot_light {
        let outer = spot.angle.clamp(0.0, std::f32::consts::FRAC_PI_2);
        commands.spawn((
            SpotLight {
                intensity: spot.intensity * POINT_LIGHT_LUMENS_PER_UNIT,
                outer_angle: outer,
                inner_angle: outer * (1.0 - spot.penumbra.clamp(0.0, 1.0)),
                shadows_enabled: lighting.shadows,
                ..default()
            },
            Transform::from_translation(Vec3::from_array(spot.position))
                .looking_at(Vec3::ZERO, Vec3::Y),
            scene,
            scene.render_layers(),
        ));
    }

    if let Some(directional) = &lighting.directional_light {
        commands.spawn((
            DirectionalLight {
                illuminance: directional.intensity * DIRECTIONAL_LUX_PER_UNIT,
                shadows_enabled: lighting.shadows,
                ..default()
            },
            Transform::from_translation(Vec3::from_array(directional.position))
                .looking_at(Vec3::ZERO, Vec3::Y),
            scene,
            scene.render_layers(),
        ));
    }
}
