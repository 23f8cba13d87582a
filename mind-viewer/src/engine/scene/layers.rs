use bevy::prelude::*;
use bevy::render::view::RenderLayers;

/// Which of the three independent scenes an entity belongs to.
///
/// Each scene renders on its own layer through its own camera, so lights,
/// particles and loaded models never leak between them.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewerScene {
    Ambient,
    Interactive,
    Logo,
}

impl ViewerScene {
    pub const ALL: [ViewerScene; 3] = [Self::Ambient, Self::Interactive, Self::Logo];

    pub const fn layer(self) -> usize {
        match self {
            Self::Ambient => 1,
            Self::Interactive => 2,
            Self::Logo => 3,
        }
    }

    /// Draw order: particles first, the model over them, the logo on top.
    pub const fn camera_order(self) -> isize {
        match self {
            Self::Ambient => 0,
            Self::Interactive => 1,
            Self::Logo => 2,
        }
    }

    pub fn render_layers(self) -> RenderLayers {
        RenderLayers::layer(self.layer())
    }
}
