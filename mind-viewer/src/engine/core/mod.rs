//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, page selection and
//! the startup checks that must pass before anything is drawn.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with the page asset loader, materials, and the
/// state-gated per-frame systems.
pub mod app_setup;

/// Application state machine from page loading to running or failure.
pub mod app_state;

/// The page's shared context: configuration, cameras and model slots.
pub mod context;

/// Which page to show, read from the URL or the command line.
pub mod page_selection;

/// Startup verification of the document elements a page writes to.
pub mod surfaces;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
