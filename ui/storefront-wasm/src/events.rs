//! Event binding.
//!
//! Pages are re-rendered wholesale, so listeners are delegated from the
//! document: clicks dispatch on `data-action` / `data-link`, form controls
//! on `data-filter` / `data-field`. Async handlers are spawned via
//! `wasm_bindgen_futures::spawn_local`.

use is_api_types::ItemKey;
use is_storefront_core::{NoticeKind, Route};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::dom::{self, Elements};
use crate::state::{self, Drawer};
use crate::{art, checkout, listing, ratings, router, share, toast};

/// Helper: attach a listener for `$event` and leak it for the page lifetime.
macro_rules! listen {
    ($target:expr, $event:expr, $ty:ty, $cb:expr) => {{
        let cb = Closure::wrap(Box::new($cb) as Box<dyn FnMut($ty)>);
        if let Err(e) = $target.add_event_listener_with_callback($event, cb.as_ref().unchecked_ref()) {
            gloo_console::error!(format!("cannot bind {}", $event), e);
        }
        cb.forget();
    }};
}

fn event_element(e: &web_sys::Event) -> Option<Element> {
    e.target().and_then(|t| t.dyn_into::<Element>().ok())
}

fn attr(el: &Element, name: &str) -> String {
    el.get_attribute(name).unwrap_or_default()
}

fn key_of(el: &Element) -> Option<ItemKey> {
    let raw = el.get_attribute("data-key")?;
    match raw.parse() {
        Ok(key) => Some(key),
        Err(err) => {
            gloo_console::warn!(format!("bad data-key {raw}: {err}"));
            None
        }
    }
}

/// Bind all UI event listeners. Call once after init.
pub fn bind_events(els: &Elements) {
    let document = gloo_utils::document();

    // ── Clicks: actions and in-app links ──
    {
        let els = els.clone();
        listen!(document, "click", web_sys::MouseEvent, move |e: web_sys::MouseEvent| {
            on_click(&els, &e)
        });
    }

    // ── Form controls ──
    {
        let els = els.clone();
        listen!(document, "input", web_sys::Event, move |e: web_sys::Event| {
            if let Some(target) = event_element(&e) {
                on_input(&els, &target);
            }
        });
    }

    {
        let els = els.clone();
        listen!(document, "submit", web_sys::Event, move |e: web_sys::Event| {
            e.prevent_default();
            if event_element(&e).is_some_and(|form| form.id() == "checkout-form") {
                checkout::next();
                router::render(&els);
            }
        });
    }

    // ── Keyboard ──
    {
        let els = els.clone();
        listen!(document, "keydown", web_sys::KeyboardEvent, move |e: web_sys::KeyboardEvent| {
            if e.key() == "Escape" && state::drawer().is_some() {
                state::set_drawer(None);
                crate::drawers::render(&els);
            }
        });
    }

    // ── Back / forward ──
    {
        let els = els.clone();
        listen!(dom::window(), "popstate", web_sys::PopStateEvent, move |_: web_sys::PopStateEvent| {
            router::show(&els, Route::parse(&router::current_path()));
        });
    }
}

fn on_click(els: &Elements, e: &web_sys::MouseEvent) {
    let Some(target) = event_element(e) else {
        return;
    };

    if let Ok(Some(el)) = target.closest("[data-action]") {
        e.prevent_default();
        let action = attr(&el, "data-action");
        dispatch(els, &action, &el);
        return;
    }

    if let Ok(Some(link)) = target.closest("[data-link]") {
        // Let the browser handle new-tab clicks.
        if e.ctrl_key() || e.meta_key() || e.shift_key() || e.button() != 0 {
            return;
        }
        e.prevent_default();
        router::navigate(els, &attr(&link, "data-link"));
    }
}

fn dispatch(els: &Elements, action: &str, el: &Element) {
    let now = state::now_ms();
    match action {
        // ── Project Bag ──
        "add-to-cart" => {
            let Some(key) = key_of(el) else { return };
            state::with_mut(|s| {
                if let Err(err) = s.front.add_catalog_item(&key, now) {
                    gloo_console::warn!(format!("add to cart: {err}"));
                    s.front.notify(NoticeKind::Error, err.to_string(), now);
                }
            });
        }
        "cart-inc" | "cart-dec" => {
            let Some(key) = key_of(el) else { return };
            let delta = if action == "cart-inc" { 1 } else { -1 };
            state::with_mut(|s| s.front.adjust_quantity(&key, delta));
        }
        "cart-remove" => {
            let Some(key) = key_of(el) else { return };
            state::with_mut(|s| s.front.remove_from_cart(&key));
        }
        "cart-clear" => state::with_mut(|s| s.front.clear_cart()),

        // ── Favorites and recents ──
        "toggle-favorite" => {
            let Some(key) = key_of(el) else { return };
            state::with_mut(|s| s.front.toggle_favorite(&key, now));
        }
        "clear-recents" => state::with_mut(|s| s.front.clear_recents()),

        // ── Drawers ──
        "open-cart" => state::set_drawer(Some(Drawer::Cart)),
        "open-favorites" => state::set_drawer(Some(Drawer::Favorites)),
        "close-drawer" => state::set_drawer(None),

        // ── Listings ──
        "show-more" => listing::show_more(),
        "reset-filters" => listing::reset_filters(),
        "toggle-material" => listing::toggle_material(&attr(el, "data-material")),

        // ── Artwork ──
        "select-variant" => art::select_variant(
            el.get_attribute("data-size").as_deref(),
            el.get_attribute("data-glass").as_deref(),
            el.get_attribute("data-frame").as_deref(),
        ),
        "share" => {
            let els = els.clone();
            let path = attr(el, "data-path");
            let title = attr(el, "data-title");
            wasm_bindgen_futures::spawn_local(async move {
                share::share(&els, &path, &title).await;
            });
            return;
        }

        // ── Checkout ──
        "checkout-next" => checkout::next(),
        "checkout-back" => checkout::back(),
        "checkout-goto" => checkout::go_to(&attr(el, "data-step")),
        "place-order" => checkout::place_order(els),

        // ── Ratings ──
        "rate" => ratings::rate(
            &attr(el, "data-code"),
            &attr(el, "data-rater"),
            &attr(el, "data-score"),
        ),
        "reset-ratings" => ratings::reset(),

        "dismiss-toast" => {
            toast::dismiss(els, &attr(el, "data-id"));
            return;
        }
        other => {
            gloo_console::warn!(format!("unhandled action {other}"));
            return;
        }
    }
    router::render(els);
}

fn control_value(target: &Element) -> Option<String> {
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        if input.type_() == "checkbox" {
            return Some(input.checked().to_string());
        }
        return Some(input.value());
    }
    if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        return Some(area.value());
    }
    target.dyn_ref::<HtmlSelectElement>().map(HtmlSelectElement::value)
}

fn on_input(els: &Elements, target: &Element) {
    let Some(value) = control_value(target) else {
        return;
    };
    if let Some(field) = target.get_attribute("data-field") {
        checkout::on_field(&field, &value);
        return;
    }
    let Some(name) = target.get_attribute("data-filter") else {
        return;
    };
    if ratings::set_control(&name, &value) {
        router::render(els);
    } else if listing::set_filter(&name, &value) {
        listing::render_results();
    }
}
