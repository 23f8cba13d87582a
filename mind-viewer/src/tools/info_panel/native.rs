use bevy::prelude::*;

use super::PanelField;
use crate::tools::picking::state::InfoPanelState;

/// Root node of the overlay; hidden while the panel is.
#[derive(Component)]
pub struct InfoOverlay;

pub fn spawn_info_overlay(mut commands: Commands) {
    commands
        .spawn((
            InfoOverlay,
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(12.0),
                bottom: Val::Px(12.0),
                width: Val::Px(360.0),
                padding: UiRect::all(Val::Px(12.0)),
                row_gap: Val::Px(6.0),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            for field in PanelField::ALL {
                let font_size = if field == PanelField::Name { 20.0 } else { 14.0 };
                parent.spawn((
                    Text::new(""),
                    TextFont {
                        font_size,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    field,
                ));
            }
        });
}

pub fn sync_info_overlay(
    panel: Res<InfoPanelState>,
    mut overlay: Query<&mut Visibility, With<InfoOverlay>>,
    mut fields: Query<(&PanelField, &mut Text)>,
) {
    for mut visibility in &mut overlay {
        *visibility = if panel.visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }

    for (field, mut text) in &mut fields {
        let value = field.read(&panel.record);
        // The document shows an image; the overlay can only name it.
        text.0 = match field {
            PanelField::Image if !value.is_empty() => format!("[{value}]"),
            _ => value.to_string(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::page_config::InfoRecord;

    #[test]
    fn overlay_follows_panel_state() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(InfoPanelState::hidden(InfoRecord::default()))
            .add_systems(Startup, spawn_info_overlay)
            .add_systems(Update, sync_info_overlay);
        app.update();

        app.world_mut()
            .insert_resource(InfoPanelState::showing(InfoRecord {
                name: "Conclusion".into(),
                image: "Education_conclusion.png".into(),
                ..default()
            }));
        app.update();

        let world = app.world_mut();
        let visibility = *world
            .query_filtered::<&Visibility, With<InfoOverlay>>()
            .single(world)
            .unwrap();
        assert_eq!(visibility, Visibility::Inherited);

        let texts: Vec<(PanelField, String)> = world
            .query::<(&PanelField, &Text)>()
            .iter(world)
            .map(|(field, text)| (*field, text.0.clone()))
            .collect();
        assert!(texts.contains(&(PanelField::Name, "Conclusion".to_string())));
        assert!(texts.contains(&(PanelField::Image, "[Education_conclusion.png]".to_string())));
        assert!(texts.contains(&(PanelField::Description, String::new())));
    }
}
