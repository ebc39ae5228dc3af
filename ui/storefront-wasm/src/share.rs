//! Sharing a page link: Web Share API, then clipboard, then a plain alert.
//!
//! Both browser APIs are looked up dynamically; neither is guaranteed to
//! exist. Failures are logged and never abort the caller.

use is_storefront_core::NoticeKind;
use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::dom::{self, Elements};
use crate::state;
use crate::toast;

fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
}

async fn call_promise(f: &Function, this: &JsValue, arg: &JsValue) -> Result<JsValue, JsValue> {
    let promise: Promise = f.call1(this, arg)?.dyn_into()?;
    JsFuture::from(promise).await
}

async fn web_share(navigator: &JsValue, title: &str, url: &str) -> Option<Result<(), JsValue>> {
    let share = method(navigator, "share")?;
    let data = Object::new();
    let _ = Reflect::set(&data, &"title".into(), &title.into());
    let _ = Reflect::set(&data, &"url".into(), &url.into());
    Some(call_promise(&share, navigator, &data).await.map(|_| ()))
}

async fn copy_to_clipboard(navigator: &JsValue, text: &str) -> Result<(), JsValue> {
    let clipboard = Reflect::get(navigator, &"clipboard".into())?;
    let write = method(&clipboard, "writeText")
        .ok_or_else(|| JsValue::from_str("clipboard unavailable"))?;
    call_promise(&write, &clipboard, &text.into()).await.map(|_| ())
}

fn is_abort(err: &JsValue) -> bool {
    Reflect::get(err, &"name".into())
        .ok()
        .and_then(|name| name.as_string())
        .is_some_and(|name| name == "AbortError")
}

/// Share `path` on this origin.
pub async fn share(els: &Elements, path: &str, title: &str) {
    let window = dom::window();
    let origin = window.location().origin().unwrap_or_default();
    let url = format!("{origin}{path}");
    let navigator: JsValue = window.navigator().into();

    match web_share(&navigator, title, &url).await {
        Some(Ok(())) => return,
        // The user closed the share sheet.
        Some(Err(err)) if is_abort(&err) => return,
        Some(Err(err)) => gloo_console::warn!("share failed", err),
        None => {}
    }

    match copy_to_clipboard(&navigator, &url).await {
        Ok(()) => {
            state::with_mut(|s| {
                s.front
                    .notify(NoticeKind::Success, "Link copied to clipboard", state::now_ms())
            });
            toast::render(els);
        }
        Err(err) => {
            gloo_console::warn!("clipboard failed", err);
            let _ = window.alert_with_message(&format!("Share this link:\n{url}"));
        }
    }
}
