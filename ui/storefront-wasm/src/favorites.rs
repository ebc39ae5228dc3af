//! Favorites page and drawer content.

use is_storefront_core::FavoriteEntry;

use crate::html::{self, escape};
use crate::state::AppState;

/// Placeholder for a saved key that no longer resolves.
fn unavailable(entry: &FavoriteEntry) -> String {
    format!(
        r#"<article class="card card-unavailable">
  <div class="card-media placeholder"></div>
  <div class="card-body">
    <span class="card-title">Item no longer available</span>
    <span class="card-code">{key}</span>
    <button class="btn btn-ghost" data-action="toggle-favorite" data-key="{key}">Remove</button>
  </div>
</article>"#,
        key = entry.key
    )
}

pub fn page(s: &AppState) -> String {
    let entries = s.front.favorite_entries();
    if entries.is_empty() {
        return format!(
            r#"<header class="page-head"><h1>Favorites</h1></header>{}"#,
            html::empty_state(
                "No favorites yet",
                "Tap the heart on any piece to keep it here.",
                Some(("/", "Browse the collection")),
            )
        );
    }
    let cards: String = entries
        .iter()
        .map(|entry| match &entry.item {
            Some(item) => html::item_card(item, true),
            None => unavailable(entry),
        })
        .collect();
    format!(
        r#"<header class="page-head"><h1>Favorites</h1><p>{count} saved</p></header>
<div class="grid">{cards}</div>"#,
        count = entries.len()
    )
}

pub fn drawer(s: &AppState) -> String {
    let entries = s.front.favorite_entries();
    if entries.is_empty() {
        return html::empty_state("No favorites yet", "Saved pieces show up here.", None);
    }
    let rows: String = entries
        .iter()
        .map(|entry| match &entry.item {
            Some(item) => {
                let path = html::item_path(&entry.key);
                format!(
                    r#"<li class="drawer-row">
  <a href="{path}" data-link="{path}">{image}</a>
  <div class="drawer-row-info"><a href="{path}" data-link="{path}">{name}</a><span>{price}</span></div>
  <button class="icon-btn" data-action="toggle-favorite" data-key="{key}" aria-label="Remove">×</button>
</li>"#,
                    image = html::img(item.image(), item.name(), "drawer-img"),
                    name = escape(item.name()),
                    price = html::usd(item.price()),
                    key = entry.key,
                )
            }
            None => format!(
                r#"<li class="drawer-row unavailable"><div class="drawer-row-info"><span>Item no longer available</span></div><button class="icon-btn" data-action="toggle-favorite" data-key="{}" aria-label="Remove">×</button></li>"#,
                entry.key
            ),
        })
        .collect();
    format!(
        r#"<ul class="drawer-list">{rows}</ul>
<div class="drawer-foot"><a class="btn btn-ghost" href="/favorites" data-link="/favorites">View all favorites</a></div>"#
    )
}
