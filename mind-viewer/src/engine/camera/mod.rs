//! Orbit-style camera control shared by all three scenes.
//!
//! Damped drag rotation, optional auto-rotation and optional bounded zoom
//! around a fixed target. Panning is not supported.

/// Orbit controller component and its input/update systems.
pub mod orbit_controller;
