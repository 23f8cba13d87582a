use bevy::prelude::*;

use constants::paths::DEFAULT_PAGE;

use crate::error::{ViewerError, ViewerResult};

/// Name of the page to show, e.g. `education` for `pages/education.page.json`.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct PageSelection {
    name: String,
}

impl PageSelection {
    /// Accepts letters, digits, `_` and `-` only, so the name can never leave the page directory.
    pub fn new(name: impl Into<String>) -> ViewerResult<Self> {
        let name = name.into();
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(ViewerError::InvalidPageName(name));
        }
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `?page=` on wasm, the first argument natively, else the default page.
    pub fn from_environment() -> ViewerResult<Self> {
        match requested_page()? {
            Some(name) => Self::new(name),
            None => Self::new(DEFAULT_PAGE),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn requested_page() -> ViewerResult<Option<String>> {
    use constants::paths::PAGE_QUERY_PARAMETER;

    let window = web_sys::window().ok_or(ViewerError::NoDocument)?;
    let search = window.location().search().unwrap_or_default();
    let requested = web_sys::UrlSearchParams::new_with_str(&search)
        .ok()
        .and_then(|params| params.get(PAGE_QUERY_PARAMETER))
        .filter(|name| !name.is_empty());
    Ok(requested)
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_page() -> ViewerResult<Option<String>> {
    Ok(std::env::args().nth(1).filter(|name| !name.is_empty()))
}
