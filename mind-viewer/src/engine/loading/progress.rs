use bevy::asset::LoadState;

/// Load result of one model slot. Terminal once it leaves `Pending`; there are no retries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModelLoadState {
    #[default]
    Pending,
    Loaded,
    Failed(String),
}

impl ModelLoadState {
    /// Next state for `progress`, or `None` when nothing changes.
    pub fn advance(&self, progress: AssetProgress) -> Option<ModelLoadState> {
        match (self, progress) {
            (Self::Pending, AssetProgress::Ready) => Some(Self::Loaded),
            (Self::Pending, AssetProgress::Failed(reason)) => Some(Self::Failed(reason)),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }
}

/// What the asset server reports for a handle, reduced to what loading cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetProgress {
    Loading,
    Ready,
    Failed(String),
}

impl AssetProgress {
    pub fn from_load_state(state: Option<LoadState>) -> Self {
        match state {
            Some(LoadState::Loaded) => Self::Ready,
            Some(LoadState::Failed(err)) => Self::Failed(err.to_string()),
            Some(LoadState::NotLoaded | LoadState::Loading) | None => Self::Loading,
        }
    }
}
