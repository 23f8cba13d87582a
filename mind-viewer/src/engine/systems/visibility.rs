use bevy::prelude::*;
use bevy::window::WindowOccluded;

/// Whether the page is currently on screen. Animation pauses while it is not.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageVisibility {
    pub visible: bool,
}

impl Default for PageVisibility {
    fn default() -> Self {
        Self { visible: true }
    }
}

pub fn track_page_visibility(
    mut occluded: EventReader<WindowOccluded>,
    mut visibility: ResMut<PageVisibility>,
) {
    if let Some(event) = occluded.read().last() {
        let next = PageVisibility {
            visible: !event.occluded,
        };
        if visibility.set_if_neq(next) {
            debug!("Page visibility changed: {}", next.visible);
        }
    }
}

pub fn page_is_visible(visibility: Res<PageVisibility>) -> bool {
    visibility.visible
}
