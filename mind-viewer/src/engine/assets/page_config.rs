use std::collections::HashMap;

use bevy::prelude::*;
use serde::Deserialize;

use constants::camera::{AMBIENT_DISTANCE, FULL_WINDOW_FOV_DEGREES, INTERACTIVE_DISTANCE, LOGO_DISTANCE};
use constants::paths::{FALLBACK_NAVIGATION_URL, PAGE_CONFIG_EXTENSION, PAGE_DIRECTORY};
use constants::render_settings::{
    OUTLINE_EDGE_COLOUR, OUTLINE_EDGE_GLOW, OUTLINE_EDGE_STRENGTH, PARTICLE_OFFSET_Z,
    PARTICLE_SPREAD,
};

use super::colour::parse_hex_colour;
use crate::engine::camera::orbit_controller::OrbitSettings;
use crate::error::{ViewerError, ViewerResult};

/// Complete description of one page of the site.
#[derive(Asset, TypePath, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub title: String,
    /// Interactive model. Pages without one only show particles and the logo.
    pub model: Option<ModelConfig>,
    pub logo: ModelConfig,
    pub particles: ParticleConfig,
    pub cameras: CameraLayout,
    pub controls: ControlSet,
    pub lighting: LightingConfig,
    pub outline: OutlineStyle,
    /// Mesh name -> descriptive record.
    pub metadata: HashMap<String, MetadataRecord>,
    /// Record shown while the pointer is over nothing.
    pub default_info: InfoRecord,
    pub navigation: NavigationConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            model: None,
            logo: ModelConfig::logo(),
            particles: ParticleConfig::default(),
            cameras: CameraLayout::default(),
            controls: ControlSet::default(),
            lighting: LightingConfig::default(),
            outline: OutlineStyle::default(),
            metadata: HashMap::new(),
            default_info: InfoRecord::default(),
            navigation: NavigationConfig::default(),
        }
    }
}

impl PageConfig {
    /// Asset path for a page name, e.g. `pages/education.page.json`.
    pub fn asset_path(page: &str) -> String {
        format!("{PAGE_DIRECTORY}/{page}.{PAGE_CONFIG_EXTENSION}")
    }

    /// Check authored colours and the particle spread up front so a bad page fails
    /// before any scene is built.
    pub fn validate(&self) -> ViewerResult<()> {
        let spread = self.particles.spread;
        if !(spread.is_finite() && spread > 0.0) {
            return Err(ViewerError::InvalidParticleSpread(spread));
        }
        if let Some(colour) = &self.particles.color {
            parse_hex_colour(colour)?;
        }
        parse_hex_colour(&self.outline.visible_edge_color)?;
        if let Some(surface) = self.model.as_ref().and_then(|m| m.surface.as_ref()) {
            if let Some(emissive) = &surface.emissive {
                parse_hex_colour(emissive)?;
            }
        }
        Ok(())
    }

    pub fn metadata_for(&self, name: &str) -> Option<&MetadataRecord> {
        self.metadata.get(name)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub path: String,
    /// Uniform scale reached at the end of the entrance animation.
    pub target_scale: f32,
    pub position: [f32; 3],
    /// Initial yaw in radians.
    pub rotation_y: f32,
    /// Continuous yaw in radians per second (negative spins clockwise seen from above).
    pub spin_speed: f32,
    pub surface: Option<SurfaceOverride>,
}

impl ModelConfig {
    fn logo() -> Self {
        Self {
            path: "models/text.glb".to_string(),
            target_scale: 0.5,
            position: [0.0, 1.1, 0.0],
            ..default()
        }
    }

    pub fn translation(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: String::new(),
            target_scale: 1.0,
            position: [0.0; 3],
            rotation_y: 0.0,
            spin_speed: 0.0,
            surface: None,
        }
    }
}

/// Material adjustments applied to every interactive leaf after load.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SurfaceOverride {
    pub roughness: Option<f32>,
    pub metallic: Option<f32>,
    pub emissive: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Hex colour; `None` picks a random colour on each load.
    pub color: Option<String>,
    /// Edge length of the cube the particles are scattered in.
    pub spread: f32,
    pub offset_z: f32,
    /// Slowly push the field towards the camera, wrapping back.
    pub drift: bool,
    pub opacity: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            color: Some("#ffffff".to_string()),
            spread: PARTICLE_SPREAD,
            offset_z: PARTICLE_OFFSET_Z,
            drift: false,
            opacity: 1.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CameraLayout {
    pub ambient_distance: f32,
    pub interactive_distance: f32,
    pub logo_distance: f32,
    /// Vertical field of view of the interactive camera in degrees.
    pub interactive_fov: f32,
}

impl Default for CameraLayout {
    fn default() -> Self {
        Self {
            ambient_distance: AMBIENT_DISTANCE,
            interactive_distance: INTERACTIVE_DISTANCE,
            logo_distance: LOGO_DISTANCE,
            interactive_fov: FULL_WINDOW_FOV_DEGREES,
        }
    }
}

/// Orbit controller settings for each of the three scenes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlSet {
    pub ambient: OrbitSettings,
    pub interactive: OrbitSettings,
    pub logo: OrbitSettings,
}

impl Default for ControlSet {
    fn default() -> Self {
        Self {
            ambient: OrbitSettings {
                auto_rotate_speed: 0.1,
                ..default()
            },
            interactive: OrbitSettings::default(),
            logo: OrbitSettings {
                auto_rotate: true,
                ..default()
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    pub ambient: f32,
    pub point_lights: Vec<PointLightConfig>,
    pub spot_light: Option<SpotLightConfig>,
    pub directional_light: Option<DirectionalLightConfig>,
    pub shadows: bool,
}

impl Default for LightingConfig {
    fn default() -> Self {
        let point = |position: [f32; 3], intensity: f32| PointLightConfig {
            position,
            intensity,
            range: 10.0,
        };
        Self {
            ambient: 5.0,
            point_lights: vec![
                point([0.0, -5.0, 2.0], 10.0),
                point([5.0, 0.0, 1.0], 3.0),
                point([-5.0, 0.0, 0.0], 3.0),
                point([0.0, 0.0, -5.0], 5.0),
                point([0.0, 0.0, 7.0], 0.5),
            ],
            spot_light: Some(SpotLightConfig::default()),
            directional_light: None,
            shadows: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PointLightConfig {
    pub position: [f32; 3],
    pub intensity: f32,
    pub range: f32,
}

impl Default for PointLightConfig {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            intensity: 1.0,
            range: 10.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpotLightConfig {
    pub position: [f32; 3],
    pub intensity: f32,
    /// Outer cone angle in radians.
    pub angle: f32,
    /// Fraction of the cone that fades out, 0..=1.
    pub penumbra: f32,
}

impl Default for SpotLightConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 10.0, 0.0],
            intensity: 3.0,
            angle: std::f32::consts::FRAC_PI_3,
            penumbra: 0.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DirectionalLightConfig {
    pub position: [f32; 3],
    pub intensity: f32,
}

impl Default for DirectionalLightConfig {
    fn default() -> Self {
        Self {
            position: [5.0, 10.0, 7.0],
            intensity: 2.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutlineStyle {
    pub edge_strength: f32,
    pub edge_glow: f32,
    pub visible_edge_color: String,
}

impl Default for OutlineStyle {
    fn default() -> Self {
        Self {
            edge_strength: OUTLINE_EDGE_STRENGTH,
            edge_glow: OUTLINE_EDGE_GLOW,
            visible_edge_color: OUTLINE_EDGE_COLOUR.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Where a logo click goes when the hit carries no link of its own.
    pub fallback_url: String,
    /// Double-clicking a linked part of the interactive model follows its link.
    pub open_links_on_double_click: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            fallback_url: FALLBACK_NAVIGATION_URL.to_string(),
            open_links_on_double_click: false,
        }
    }
}

/// What the info panel displays. Missing fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InfoRecord {
    pub name: String,
    pub description: String,
    pub fact_primary: String,
    pub fact_secondary: String,
    /// Caption under the facts, usually the page a part links to.
    pub page: String,
    pub image: String,
}

/// Content attached to a named leaf of a loaded model.
#[derive(Component, Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MetadataRecord {
    #[serde(flatten)]
    pub info: InfoRecord,
    pub page_url: Option<String>,
}
