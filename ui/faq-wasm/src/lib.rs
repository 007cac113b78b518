//! FAQ Manager WASM Frontend
//!
//! Renders categorized questions from the item store, filters and highlights
//! them client-side, and sends create/delete requests. Catalog logic lives in
//! `faq-core`; this crate only binds it to the DOM.

pub mod api;
pub mod catalog_view;
pub mod dom;
pub mod events;
pub mod faq_ops;
pub mod state;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init().await
}

async fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;

    // Listeners first so the page is interactive while the list loads.
    events::bind_events(&els);
    faq_ops::load_questions(&els).await;

    Ok(())
}
