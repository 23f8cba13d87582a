//! Pointer-driven behaviour on top of the composed scenes.
//!
//! Hover picking keeps the outline selection and the info panel in step with
//! whatever part of the interactive model is under the pointer. Clicking the
//! logo, or double-clicking a linked part on pages that allow it, leaves the
//! page through a `NavigationRequest`.

/// Info panel presentation: document elements on wasm, a bevy_ui overlay natively.
pub mod info_panel;

/// Logo click and double-click link navigation.
pub mod navigation;

/// Ray picking, selection and info panel state.
pub mod picking;
