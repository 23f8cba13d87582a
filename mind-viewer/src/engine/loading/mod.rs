//! Page and model loading.
//!
//! The page configuration is loaded first and composes the scenes. Each model
//! then streams into its own slot, resolving to loaded or failed, and is
//! decorated for picking once its scene instance exists.

/// Post-spawn decoration of model hierarchies.
pub mod decorate;

/// Scale-up played when a model appears.
pub mod entrance;

/// Model slots and their load polling.
pub mod model_loader;

/// Page configuration loading and scene composition.
pub mod page_loader;

/// Load state reduction shared by page and model loading.
pub mod progress;
