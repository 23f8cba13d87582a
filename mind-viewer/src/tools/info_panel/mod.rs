//! Presentation of `InfoPanelState`.
//!
//! On wasm the panel is part of the surrounding document and is written through
//! `web-sys`. Native builds draw an equivalent bevy_ui overlay.

use bevy::prelude::*;

use constants::surfaces::{
    PANEL_DESCRIPTION_ID, PANEL_FACT_PRIMARY_ID, PANEL_FACT_SECONDARY_ID, PANEL_IMAGE_ID,
    PANEL_NAME_ID, PANEL_PAGE_ID,
};

use crate::engine::assets::page_config::InfoRecord;
use crate::engine::core::app_state::AppState;
use crate::tools::picking::state::InfoPanelState;

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(not(target_arch = "wasm32"))]
pub mod native;

/// One displayed field of the panel.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelField {
    Name,
    Description,
    FactPrimary,
    FactSecondary,
    Page,
    Image,
}

impl PanelField {
    pub const ALL: [PanelField; 6] = [
        Self::Name,
        Self::Description,
        Self::FactPrimary,
        Self::FactSecondary,
        Self::Page,
        Self::Image,
    ];

    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Name => PANEL_NAME_ID,
            Self::Description => PANEL_DESCRIPTION_ID,
            Self::FactPrimary => PANEL_FACT_PRIMARY_ID,
            Self::FactSecondary => PANEL_FACT_SECONDARY_ID,
            Self::Page => PANEL_PAGE_ID,
            Self::Image => PANEL_IMAGE_ID,
        }
    }

    pub fn read(self, record: &InfoRecord) -> &str {
        match self {
            Self::Name => &record.name,
            Self::Description => &record.description,
            Self::FactPrimary => &record.fact_primary,
            Self::FactSecondary => &record.fact_secondary,
            Self::Page => &record.page,
            Self::Image => &record.image,
        }
    }
}

pub struct InfoPanelPlugin;

impl Plugin for InfoPanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InfoPanelState>();

        #[cfg(target_arch = "wasm32")]
        app.add_systems(
            Update,
            dom::sync_info_panel
                .run_if(in_state(AppState::Running).and(resource_changed::<InfoPanelState>)),
        );

        #[cfg(not(target_arch = "wasm32"))]
        app.add_systems(Startup, native::spawn_info_overlay).add_systems(
            Update,
            native::sync_info_overlay
                .run_if(in_state(AppState::Running).and(resource_changed::<InfoPanelState>)),
        );
    }
}
