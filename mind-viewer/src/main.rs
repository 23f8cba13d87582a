mod engine;
mod error;
mod tools;

use crate::engine::core::app_setup::create_app;
use crate::engine::core::page_selection::PageSelection;
use crate::engine::core::surfaces::verify_document_surfaces;
use crate::error::{ViewerError, ViewerResult};

fn main() {
    if let Err(err) = run() {
        report_startup_error(&err);
    }
}

/// Page selection and document checks happen before the App exists, so a
/// broken page never opens a window.
fn run() -> ViewerResult<()> {
    let page = PageSelection::from_environment()?;
    verify_document_surfaces()?;

    let mut app = create_app(page);

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }

    Ok(())
}

fn report_startup_error(err: &ViewerError) {
    #[cfg(target_arch = "wasm32")]
    {
        let message = format!("mind-viewer failed to start: {err}");
        web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(&message));
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("mind-viewer failed to start: {err}");
        std::process::exit(1);
    }
}
