//! Per-page configuration assets.
//!
//! Every page of the site is the same viewer driven by a different
//! `PageConfig`: model paths, particle colour, camera distances, lighting,
//! outline styling, the mesh-name metadata table and the no-hit default record.

/// Hex colour parsing shared by configuration fields.
pub mod colour;

/// JSON page configuration asset and its nested records.
pub mod page_config;
