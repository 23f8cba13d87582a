/// Vertical field of view for the full-window cameras, in degrees
pub const FULL_WINDOW_FOV_DEGREES: f32 = 75.0;

/// Vertical field of view for the logo camera, in degrees
pub const LOGO_FOV_DEGREES: f32 = 45.0;

pub const FULL_WINDOW_NEAR: f32 = 0.001;
pub const FULL_WINDOW_FAR: f32 = 5000.0;
pub const LOGO_NEAR: f32 = 0.1;
pub const LOGO_FAR: f32 = 100.0;

/// Camera distance along +Z from the scene origin
pub const AMBIENT_DISTANCE: f32 = 5.0;
pub const INTERACTIVE_DISTANCE: f32 = 2.5;
pub const LOGO_DISTANCE: f32 = 5.0;

/// Orbit controller defaults
pub const DAMPING_FACTOR: f32 = 0.05;
pub const AUTO_ROTATE_SPEED: f32 = 2.0;
pub const ROTATE_SPEED: f32 = 1.0;

/// Zoom scale applied per wheel line
pub const ZOOM_STEP_SCALE: f32 = 0.95;

/// Polar angle guard keeping the orbit away from the poles
pub const POLAR_EPSILON: f32 = 0.000001;
