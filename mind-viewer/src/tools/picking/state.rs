use bevy::prelude::*;

use crate::engine::assets::page_config::InfoRecord;

/// The part of the interactive model currently outlined, if any.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    highlighted: Option<Entity>,
}

impl SelectionState {
    pub fn holding(entity: Entity) -> Self {
        Self {
            highlighted: Some(entity),
        }
    }

    pub fn highlighted(&self) -> Option<Entity> {
        self.highlighted
    }

    pub fn select(&mut self, entity: Option<Entity>) {
        self.highlighted = entity;
    }
}

/// Text and image mirrored into the info panel.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoPanelState {
    pub record: InfoRecord,
    pub visible: bool,
}

impl InfoPanelState {
    /// Page default content with the panel collapsed.
    pub fn hidden(default_info: InfoRecord) -> Self {
        Self {
            record: default_info,
            visible: false,
        }
    }

    pub fn showing(record: InfoRecord) -> Self {
        Self {
            record,
            visible: true,
        }
    }

    /// Shown in place of hover content when the interactive model cannot be loaded.
    pub fn load_failure(path: &str) -> Self {
        Self::showing(InfoRecord {
            name: "Model unavailable".to_string(),
            description: format!("The 3D model `{path}` could not be loaded."),
            ..default()
        })
    }
}
