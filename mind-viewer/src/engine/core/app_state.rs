use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    /// Waiting for the page configuration asset.
    #[default]
    LoadingPage,
    /// Scenes composed; models may still be streaming in.
    Running,
    /// The configuration was missing or invalid. Nothing is drawn.
    PageFailed,
}
