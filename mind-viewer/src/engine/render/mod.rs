//! Rendering extras on top of Bevy's standard pipeline.
//!
//! Outline highlighting for the hovered part of the interactive model, and the
//! normal-shaded material used by the decorative logo.

/// Normal-shaded, double-sided material for the logo model.
pub mod normal_material;

/// Selection-driven edge highlight for the interactive scene.
pub mod outline;
