/// Canvas the Bevy window binds to on wasm
pub const CANVAS_SELECTOR: &str = "#mind-viewer";

/// Info panel element ids expected in the surrounding document
pub const PANEL_CONTAINER_ID: &str = "object";
pub const PANEL_NAME_ID: &str = "modelName";
pub const PANEL_DESCRIPTION_ID: &str = "modelDescription";
pub const PANEL_FACT_PRIMARY_ID: &str = "brainconnection";
pub const PANEL_FACT_SECONDARY_ID: &str = "brainconnection1";
pub const PANEL_PAGE_ID: &str = "pageDescription";
pub const PANEL_IMAGE_ID: &str = "modelImage";

/// Every element id the info panel writes to
pub const PANEL_ELEMENT_IDS: [&str; 7] = [
    PANEL_CONTAINER_ID,
    PANEL_NAME_ID,
    PANEL_DESCRIPTION_ID,
    PANEL_FACT_PRIMARY_ID,
    PANEL_FACT_SECONDARY_ID,
    PANEL_PAGE_ID,
    PANEL_IMAGE_ID,
];

/// Class toggled on the container while no part is hovered
pub const HIDDEN_CLASS: &str = "hidden";

/// Logo viewport side length in logical pixels
pub const LOGO_SURFACE_SIZE: f32 = 300.0;

/// Logo viewport offset from the top-left corner in logical pixels
pub const LOGO_SURFACE_MARGIN: f32 = 0.0;
