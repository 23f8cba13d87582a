use bevy::prelude::*;
use rand::Rng;

use constants::render_settings::{
    PARTICLE_COUNT, PARTICLE_DRIFT_CEILING, PARTICLE_DRIFT_SPEED, PARTICLE_SIZE,
};

use super::layers::ViewerScene;
use crate::engine::assets::colour::{parse_hex_colour, random_colour};
use crate::engine::assets::page_config::ParticleConfig;
use crate::error::ViewerResult;

/// Root of the ambient particle field.
#[derive(Component, Debug, Clone)]
pub struct ParticleField {
    pub drift: bool,
    /// Depth the field resets to after drifting past the ceiling.
    pub rest_z: f32,
}

/// `count` points scattered uniformly in a cube of edge `spread` centred on the origin.
pub fn scatter_positions(count: usize, spread: f32, rng: &mut impl Rng) -> Vec<Vec3> {
    let half = spread.max(0.0) * 0.5;
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-half..=half),
                rng.gen_range(-half..=half),
                rng.gen_range(-half..=half),
            )
        })
        .collect()
}

pub fn spawn_particle_field(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    config: &ParticleConfig,
    rng: &mut impl Rng,
) -> ViewerResult<Entity> {
    let colour = match &config.color {
        Some(hex) => parse_hex_colour(hex)?,
        None => random_colour(rng),
    };
    let opacity = config.opacity.clamp(0.0, 1.0);

    let mesh = meshes.add(Sphere::new(PARTICLE_SIZE * 0.5).mesh().uv(8, 6));
    let material = materials.add(StandardMaterial {
        base_color: colour.with_alpha(opacity),
        alpha_mode: if opacity < 1.0 { AlphaMode::Blend } else { AlphaMode::Opaque },
        unlit: true,
        ..default()
    });

    let scene = ViewerScene::Ambient;
    let positions = scatter_positions(PARTICLE_COUNT, config.spread, rng);
    let root = commands
        .spawn((
            Name::new("ParticleField"),
            Transform::from_xyz(0.0, 0.0, config.offset_z),
            Visibility::default(),
            ParticleField {
                drift: config.drift,
                rest_z: config.offset_z,
            },
            scene,
            scene.render_layers(),
        ))
        .with_children(|parent| {
            for position in positions {
                parent.spawn((
                    Mesh3d(mesh.clone()),
                    MeshMaterial3d(material.clone()),
                    Transform::from_translation(position),
                    scene,
                    scene.render_layers(),
                ));
            }
        })
        .id();

    Ok(root)
}

/// Push drifting fields towards the camera, wrapping back to their rest depth.
pub fn drift_particles(time: Res<Time>, mut fields: Query<(&ParticleField, &mut Transform)>) {
    for (field, mut transform) in &mut fields {
        if !field.drift {
            continue;
        }
        transform.translation.z = drifted_depth(
            transform.translation.z,
            PARTICLE_DRIFT_SPEED * time.delta_secs(),
            field.rest_z,
        );
    }
}

fn drifted_depth(current: f32, step: f32, rest: f32) -> f32 {
    let next = current + step;
    if next > PARTICLE_DRIFT_CEILING { rest } else { next }
}
