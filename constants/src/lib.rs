//! Shared constants for the mind viewer pages.

pub mod camera;
pub mod paths;
pub mod render_settings;
pub mod surfaces;
