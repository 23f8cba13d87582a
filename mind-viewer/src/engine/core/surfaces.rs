use crate::error::{ViewerError, ViewerResult};

/// First of `required` that `present` does not report, as an error.
pub fn first_missing<'a>(
    required: impl IntoIterator<Item = &'a str>,
    present: impl Fn(&str) -> bool,
) -> ViewerResult<()> {
    match required.into_iter().find(|item| !present(item)) {
        Some(missing) => Err(ViewerError::MissingElement(missing.to_string())),
        None => Ok(()),
    }
}

/// Check the canvas and every info panel element exist before anything starts.
#[cfg(target_arch = "wasm32")]
pub fn verify_document_surfaces() -> ViewerResult<()> {
    use constants::surfaces::{CANVAS_SELECTOR, PANEL_ELEMENT_IDS};

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(ViewerError::NoDocument)?;

    first_missing([CANVAS_SELECTOR], |selector| {
        matches!(document.query_selector(selector), Ok(Some(_)))
    })?;
    first_missing(PANEL_ELEMENT_IDS, |id| document.get_element_by_id(id).is_some())
}

/// Native builds draw their own surfaces.
#[cfg(not(target_arch = "wasm32"))]
pub fn verify_document_surfaces() -> ViewerResult<()> {
    Ok(())
}
