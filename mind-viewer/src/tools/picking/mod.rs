//! Pointer picking for the interactive and logo scenes.
//!
//! Rays come from each scene camera's viewport and are tested against per-leaf triangle
//! shapes, so the whole path runs without the render world.

/// Hover picking system and the selection/info update rule.
pub mod controller;

/// Triangle shapes attached to pickable leaves and nearest-first ray casts.
pub mod hit_test;

/// Ray against box and triangle intersection.
pub mod ray;

/// Selection and info panel resources.
pub mod state;
