//! # cgMLST Portal - species selection front page
//!
//! Front page of the cgMLST@Taiwan typing service: a species drop-down that
//! publishes the active organism database, and the information page for it.

pub mod app;
pub mod assets;
pub mod catalog;
pub mod config;
pub mod content;
pub mod selection;
pub mod ui;

pub use app::PortalApp;

/// Common imports for internal use
pub mod prelude {
    pub use crate::catalog::{Availability, Target, TargetCatalog, TargetId};
    pub use crate::content::{ContentEntry, ContentRegistry, DescriptiveContent};
    pub use crate::selection::{SelectionReader, SelectionWriter};
    pub use crate::ui::{InfoPresenter, SelectOutcome, SelectionControl};
}

// WASM entry point
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    // Set up panic hook for better error messages in the browser console
    console_error_panic_hook::set_once();

    // Initialize logging for WASM
    console_log::init_with_level(log::Level::Info).expect("Failed to initialize logger");

    log::info!("cgMLST portal WASM module initialized");
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub async fn run(canvas_id: String) -> Result<(), JsValue> {
    use wasm_bindgen::JsCast;

    log::info!("Starting cgMLST portal (WASM)");

    let canvas = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(&canvas_id))
        .ok_or_else(|| JsValue::from_str(&format!("Canvas #{} not found", canvas_id)))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(JsValue::from)?;

    let config = config::PortalConfig::default();
    let app = PortalApp::new(&config)
        .map_err(|e| JsValue::from_str(&format!("Failed to create app: {}", e)))?;
    let theme = config.ui.theme;

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(move |cc| {
                theme.apply_to_ctx(&cc.egui_ctx);
                Ok(Box::new(app))
            }),
        )
        .await
}
