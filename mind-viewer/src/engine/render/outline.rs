use bevy::color::Mix;
use bevy::pbr::wireframe::{Wireframe, WireframeColor};
use bevy::prelude::*;

use constants::render_settings::OUTLINE_REFERENCE_STRENGTH;

use crate::engine::assets::colour::parse_hex_colour;
use crate::engine::assets::page_config::OutlineStyle;
use crate::error::ViewerResult;
use crate::tools::picking::state::SelectionState;

/// Edge highlight look for the interactive camera.
///
/// Which entity gets outlined is `SelectionState`'s call; this only decides
/// how its edges are drawn.
#[derive(Component, Debug, Clone)]
pub struct HighlightStyle {
    pub edge_strength: f32,
    pub edge_glow: f32,
    pub visible_edge_color: Color,
}

impl HighlightStyle {
    pub fn from_style(style: &OutlineStyle) -> ViewerResult<Self> {
        Ok(Self {
            edge_strength: style.edge_strength,
            edge_glow: style.edge_glow,
            visible_edge_color: parse_hex_colour(&style.visible_edge_color)?,
        })
    }

    /// Edge colour dimmed below the reference strength and lifted towards white by glow.
    pub fn edge_colour(&self) -> Color {
        let intensity = (self.edge_strength / OUTLINE_REFERENCE_STRENGTH).clamp(0.0, 1.0);
        let edge = LinearRgba::from(self.visible_edge_color);
        let base = LinearRgba::rgb(
            edge.red * intensity,
            edge.green * intensity,
            edge.blue * intensity,
        );
        Color::from(base).mix(&Color::WHITE, self.edge_glow.clamp(0.0, 1.0) * 0.5)
    }
}

/// Marks the entity currently drawn with the outline.
#[derive(Component)]
pub struct OutlineHighlight;

pub fn sync_outline_selection(
    mut commands: Commands,
    selection: Res<SelectionState>,
    styles: Query<&HighlightStyle>,
    highlighted: Query<Entity, With<OutlineHighlight>>,
) {
    let selected = selection.highlighted();

    for entity in &highlighted {
        if Some(entity) != selected {
            commands
                .entity(entity)
                .try_remove::<(Wireframe, WireframeColor, OutlineHighlight)>();
        }
    }

    let (Some(entity), Ok(style)) = (selected, styles.single()) else {
        return;
    };
    commands.entity(entity).try_insert((
        Wireframe,
        WireframeColor {
            color: style.edge_colour(),
        },
        OutlineHighlight,
    ));
}
