use bevy::color::Color;

/// Outline defaults, matching the styling used on most pages
pub const OUTLINE_EDGE_STRENGTH: f32 = 5.0;
pub const OUTLINE_EDGE_GLOW: f32 = 0.3;
pub const OUTLINE_EDGE_COLOUR: &str = "#00ff00";

/// Edge strength at which the outline colour is drawn at full intensity
pub const OUTLINE_REFERENCE_STRENGTH: f32 = 5.0;

/// Ambient particle field
pub const PARTICLE_COUNT: usize = 1000;
pub const PARTICLE_SIZE: f32 = 0.02;
pub const PARTICLE_SPREAD: f32 = 10.0;
pub const PARTICLE_OFFSET_Z: f32 = 1.5;
pub const PARTICLE_DRIFT_SPEED: f32 = 0.06;
pub const PARTICLE_DRIFT_CEILING: f32 = 2.0;

/// Entrance scale-up duration in seconds
pub const ENTRANCE_DURATION_SECS: f32 = 1.0;

/// Page configs give unitless light intensities; these scale them into Bevy units
pub const POINT_LIGHT_LUMENS_PER_UNIT: f32 = 100_000.0;
pub const DIRECTIONAL_LUX_PER_UNIT: f32 = 2_000.0;
pub const AMBIENT_BRIGHTNESS_PER_UNIT: f32 = 100.0;

/// Background behind the particle field; later scenes draw over it without clearing
pub const AMBIENT_CLEAR_COLOUR: Color = Color::BLACK;

/// Two presses closer than this count as a double click
pub const DOUBLE_CLICK_WINDOW_SECS: f32 = 0.35;

pub const LOG_FILTER: &str = "wgpu=error,naga=warn,bevy_render=info,mind_viewer=debug";
