//! DOM element bindings.
//!
//! The shell in `index.html` is static; page content is rendered into
//! `#app`. All shell fields are resolved once at startup.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

// ── Helpers ──

fn doc() -> Document {
    gloo_utils::document()
}

pub fn by_id(id: &str) -> Option<Element> {
    doc().get_element_by_id(id)
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn set_title(title: &str) {
    doc().set_title(title);
}

pub fn scroll_to_top() {
    gloo_utils::window().scroll_to_with_x_and_y(0.0, 0.0);
}

pub fn window() -> web_sys::Window {
    gloo_utils::window()
}

// ── Elements struct ──

/// Shell element references.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    pub body: HtmlElement,
    pub app: Element,

    // Header
    pub cart_badge: Element,
    pub favorites_badge: Element,

    // Drawers
    pub overlay: Element,
    pub cart_drawer: Element,
    pub cart_body: Element,
    pub favorites_drawer: Element,
    pub favorites_body: Element,

    pub toasts: Element,
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

impl Elements {
    /// Resolve every shell element. Fails on the first missing id.
    pub fn bind() -> Result<Elements, JsValue> {
        let body = doc()
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        Ok(Elements {
            body,
            app: get_el!("app"),
            cart_badge: get_el!("cartBadge"),
            favorites_badge: get_el!("favoritesBadge"),
            overlay: get_el!("drawerOverlay"),
            cart_drawer: get_el!("cartDrawer"),
            cart_body: get_el!("cartDrawerBody"),
            favorites_drawer: get_el!("favoritesDrawer"),
            favorites_body: get_el!("favoritesDrawerBody"),
            toasts: get_el!("toasts"),
        })
    }
}
