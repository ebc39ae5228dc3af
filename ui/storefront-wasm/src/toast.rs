//! Toasts rendered from the storefront notice queue.

use gloo_timers::callback::Timeout;
use is_storefront_core::notice::{NOTICE_EXIT_MS, NOTICE_TTL_MS};

use crate::dom::{self, Elements};
use crate::html::escape;
use crate::state::{self, AppState};

fn icon(kind: &str) -> &'static str {
    match kind {
        "cart" => "🛒",
        "favorite" => "♥",
        "success" => "✓",
        _ => "!",
    }
}

/// Redraw the toast stack and start timers for notices that lack one.
pub fn render(els: &Elements) {
    let (markup, fresh) = state::with_mut(|s| {
        let now = state::now_ms();
        let AppState {
            front,
            timed_notices,
            ..
        } = s;
        let mut fresh = Vec::new();
        let markup: String = front
            .notices()
            .iter()
            .map(|notice| {
                if timed_notices.insert(notice.id) {
                    let left = (notice.created_ms + NOTICE_TTL_MS).saturating_sub(now);
                    fresh.push((notice.id, left));
                }
                let kind = notice.kind.as_str();
                format!(
                    r#"<div class="toast toast-{kind}" id="toast-{id}" role="status">
  <span class="toast-icon">{icon}</span><span class="toast-msg">{msg}</span>
  <button class="toast-close" data-action="dismiss-toast" data-id="{id}" aria-label="Dismiss">×</button>
</div>"#,
                    id = notice.id,
                    icon = icon(kind),
                    msg = escape(&notice.message),
                )
            })
            .collect();
        (markup, fresh)
    });
    dom::set_inner_html(&els.toasts, &markup);

    for (id, left) in fresh {
        let exit_at = left.saturating_sub(NOTICE_EXIT_MS);
        Timeout::new(exit_at as u32, move || {
            if let Some(el) = dom::by_id(&format!("toast-{id}")) {
                dom::add_class(&el, "leaving");
            }
        })
        .forget();
        let els = els.clone();
        Timeout::new(left as u32, move || expire(&els)).forget();
    }
}

fn expire(els: &Elements) {
    state::with_mut(|s| {
        for id in s.front.expire_notices(state::now_ms()) {
            s.timed_notices.remove(&id);
        }
    });
    render(els);
}

pub fn dismiss(els: &Elements, id: &str) {
    let Ok(id) = id.parse::<u64>() else {
        return;
    };
    state::with_mut(|s| {
        s.front.dismiss_notice(id);
        s.timed_notices.remove(&id);
    });
    render(els);
}
