//! The three scenes of a page and how they share the window.

/// Camera, particle and light composition for a page.
pub mod composer;

/// Scene membership tags and their render layers.
pub mod layers;

/// Viewport rectangles and window resize handling.
pub mod layout;

/// Lights of the interactive scene.
pub mod lighting;

/// Ambient particle backdrop.
pub mod particles;
