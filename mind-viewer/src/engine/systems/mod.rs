//! Per-frame behaviour of a running page.

/// Model spin and the loaded-model run condition.
pub mod render_loop;

/// Pausing animation while the page is hidden.
pub mod visibility;
