//! Client-side routing over the History API.

use is_catalog::query::PAGE_SIZE;
use is_catalog::{CatalogItem, find_art, find_product};
use is_storefront_core::Route;
use wasm_bindgen::JsValue;

use crate::dom::{self, Elements};
use crate::html;
use crate::state::{self, AppState};
use crate::{art, catalog, checkout, drawers, favorites, ratings, toast};

pub fn current_path() -> String {
    dom::window()
        .location()
        .pathname()
        .unwrap_or_else(|_| "/".to_owned())
}

/// Push `path` onto the history stack and show it.
pub fn navigate(els: &Elements, path: &str) {
    if current_path() != path {
        if let Err(e) = gloo_utils::history().push_state_with_url(&JsValue::NULL, "", Some(path)) {
            gloo_console::warn!("pushState failed", e);
        }
    }
    show(els, Route::parse(path));
}

/// Switch to `route` without touching history (initial load, back/forward).
pub fn show(els: &Elements, route: Route) {
    let now = state::now_ms();
    state::with_mut(|s| {
        if s.route != route {
            s.listing.visible = PAGE_SIZE;
            if let (Route::Category(old), Route::Category(new)) = (&s.route, &route) {
                if old != new {
                    s.listing.products = Default::default();
                }
            }
            if let Route::Art(code) = &route {
                s.selection = art::initial_selection(code);
            }
        }
        s.route = route.clone();
        s.drawer = None;

        let viewed = match &route {
            Route::Product(id) => find_product(*id).map(CatalogItem::Product),
            Route::Art(code) => find_art(code),
            _ => None,
        };
        if let Some(item) = viewed {
            s.front.record_view(item.summary(), now);
        }
    });
    dom::set_title(route.title());
    dom::scroll_to_top();
    render(els);
}

fn not_found(path: &str) -> String {
    format!(
        r#"<div class="not-found"><h1>404</h1><p>Nothing lives at <code>{}</code>.</p><a class="btn btn-primary" href="/" data-link="/">Back to home</a></div>"#,
        html::escape(path)
    )
}

fn page_markup(s: &AppState) -> String {
    let missing = || not_found(&s.route.path());
    match &s.route {
        Route::Home => catalog::home(s),
        Route::Category(id) => catalog::category(s, id).unwrap_or_else(missing),
        Route::Product(id) => catalog::product(s, *id).unwrap_or_else(missing),
        Route::Arts => art::landing(),
        Route::Paintings => art::paintings(s),
        Route::Prints => art::prints(s),
        Route::Art(code) => art::detail(s, code).unwrap_or_else(missing),
        Route::Favorites => favorites::page(s),
        Route::Checkout => checkout::page(s),
        Route::Ratings => ratings::page(s),
        Route::NotFound(path) => not_found(path),
    }
}

/// Redraw the current page, the drawers and the toasts from the state.
pub fn render(els: &Elements) {
    let (markup, arts) = state::with(|s| (page_markup(s), s.route.is_arts()));
    dom::set_inner_html(&els.app, &markup);
    dom::toggle_class(&els.body, "arts-mode", arts);
    drawers::render(els);
    toast::render(els);
}
