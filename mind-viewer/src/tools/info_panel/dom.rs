use bevy::prelude::*;

use constants::surfaces::{HIDDEN_CLASS, PANEL_CONTAINER_ID};

use super::PanelField;
use crate::error::{ViewerError, ViewerResult};
use crate::tools::picking::state::InfoPanelState;

/// Mirror the panel state into the document.
pub fn sync_info_panel(panel: Res<InfoPanelState>) {
    if let Err(err) = write_panel(&panel) {
        warn!("Info panel update skipped: {err}");
    }
}

fn write_panel(panel: &InfoPanelState) -> ViewerResult<()> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(ViewerError::NoDocument)?;
    let element = |id: &str| {
        document
            .get_element_by_id(id)
            .ok_or_else(|| ViewerError::MissingElement(id.to_string()))
    };

    for field in PanelField::ALL {
        let value = field.read(&panel.record);
        let target = element(field.element_id())?;
        if field == PanelField::Image {
            target
                .set_attribute("src", value)
                .map_err(|_| ViewerError::MissingElement(field.element_id().to_string()))?;
        } else {
            target.set_text_content(Some(value));
        }
    }

    let classes = element(PANEL_CONTAINER_ID)?.class_list();
    let toggled = if panel.visible {
        classes.remove_1(HIDDEN_CLASS)
    } else {
        classes.add_1(HIDDEN_CLASS)
    };
    toggled.map_err(|_| ViewerError::MissingElement(PANEL_CONTAINER_ID.to_string()))
}
