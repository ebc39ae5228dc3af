//! InStyle storefront WASM front end.
//!
//! Renders the catalog, Project Bag, favorites and checkout wizard on top of
//! `is-storefront-core`, persisting to `localStorage`. Each concern lives in
//! its own module; pages are plain HTML strings rendered into `#app`.

pub mod art;
pub mod catalog;
pub mod checkout;
pub mod dom;
pub mod drawers;
pub mod events;
pub mod favorites;
pub mod html;
pub mod listing;
pub mod ratings;
pub mod router;
pub mod share;
pub mod state;
pub mod toast;

use is_storefront_core::Route;
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

    // Badges follow the store; everything else re-renders after each action.
    {
        let els = els.clone();
        state::with_mut(move |s| {
            s.front
                .subscribe(move |event| drawers::on_store_event(&els, event));
        });
    }
    drawers::sync_badges(&els);

    router::show(&els, Route::parse(&router::current_path()));
    events::bind_events(&els);

    gloo_console::log!("InStyle storefront ready");
    Ok(())
}
