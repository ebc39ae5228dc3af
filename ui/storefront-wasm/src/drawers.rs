//! Header badges and the Project Bag / favorites drawers.

use gloo_timers::callback::Timeout;
use is_storefront_core::StoreEvent;

use crate::dom::{self, Elements};
use crate::favorites;
use crate::html::{self, escape};
use crate::state::{self, AppState, Drawer};

const BADGE_BUMP_MS: u32 = 600;

fn set_badge(el: &web_sys::Element, count: usize) {
    dom::set_text(el, &count.to_string());
    dom::toggle_class(el, "hidden", count == 0);
}

/// Store listener. Runs while the state is mutably borrowed, so it only
/// touches the DOM with what the event carries.
pub fn on_store_event(els: &Elements, event: &StoreEvent) {
    match event {
        StoreEvent::CartChanged { lines, .. } => set_badge(&els.cart_badge, *lines),
        StoreEvent::FavoritesChanged { count } => set_badge(&els.favorites_badge, *count),
        StoreEvent::ItemAdded { .. } => {
            let badge = els.cart_badge.clone();
            dom::add_class(&badge, "bump");
            Timeout::new(BADGE_BUMP_MS, move || dom::remove_class(&badge, "bump")).forget();
        }
        StoreEvent::OrderPlaced { reference } => {
            gloo_console::log!(format!("order {reference} handed off"));
        }
        StoreEvent::RecentsChanged { .. } | StoreEvent::RatingsChanged => {}
    }
}

pub fn sync_badges(els: &Elements) {
    let (lines, favorites) = state::with(|s| (s.front.cart().line_count(), s.front.favorites().count()));
    set_badge(&els.cart_badge, lines);
    set_badge(&els.favorites_badge, favorites);
}

fn cart_body(s: &AppState) -> String {
    let cart = s.front.cart();
    if cart.is_empty() {
        return html::empty_state(
            "Your Project Bag is empty",
            "Add pieces you like and send us the list when you are ready.",
            None,
        );
    }
    let rows: String = cart
        .lines()
        .iter()
        .map(|line| {
            let item = &line.item;
            let path = html::item_path(&item.key);
            format!(
                r#"<li class="drawer-row">
  <a href="{path}" data-link="{path}">{image}</a>
  <div class="drawer-row-info">
    <a href="{path}" data-link="{path}">{name}</a>
    <span>{price}</span>
    <div class="qty">
      <button data-action="cart-dec" data-key="{key}" aria-label="Decrease"{dec_disabled}>−</button>
      <span>{qty}</span>
      <button data-action="cart-inc" data-key="{key}" aria-label="Increase">+</button>
    </div>
  </div>
  <button class="icon-btn" data-action="cart-remove" data-key="{key}" aria-label="Remove">×</button>
</li>"#,
                image = html::img(&item.image, &item.name, "drawer-img"),
                name = escape(&item.name),
                price = html::usd(line.line_total()),
                key = item.key,
                qty = line.quantity,
                dec_disabled = if line.quantity <= 1 { " disabled" } else { "" },
            )
        })
        .collect();

    let totals = s.front.totals();
    let shipping_note = match s.front.shipping().remaining_for_free(totals.subtotal) {
        Some(remaining) => format!(
            r#"<p class="shipping-note">Add {} more for free delivery.</p>"#,
            html::usd(remaining)
        ),
        None => r#"<p class="shipping-note free">Free delivery included.</p>"#.to_owned(),
    };
    format!(
        r#"<ul class="drawer-list">{rows}</ul>
<div class="drawer-foot">
  <div class="totals-row"><span>Subtotal</span><strong>{subtotal}</strong></div>
  {shipping_note}
  <a class="btn btn-primary btn-block" href="/checkout" data-link="/checkout">Checkout</a>
  <button class="link-btn" data-action="cart-clear">Clear bag</button>
</div>"#,
        subtotal = html::usd(totals.subtotal),
    )
}

/// Re-render drawer contents and visibility from the state.
pub fn render(els: &Elements) {
    let (open, cart, favs) = state::with(|s| (s.drawer, cart_body(s), favorites::drawer(s)));
    dom::set_inner_html(&els.cart_body, &cart);
    dom::set_inner_html(&els.favorites_body, &favs);
    dom::toggle_class(&els.cart_drawer, "open", open == Some(Drawer::Cart));
    dom::toggle_class(&els.favorites_drawer, "open", open == Some(Drawer::Favorites));
    dom::toggle_class(&els.overlay, "visible", open.is_some());
    dom::toggle_class(&els.body, "no-scroll", open.is_some());
}
