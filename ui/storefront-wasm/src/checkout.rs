//! Checkout wizard page: review, contact details, confirm and hand off.

use gloo_timers::callback::Timeout;
use is_api_types::ContactDetails;
use is_storefront_core::{CheckoutError, CheckoutStep, NoticeKind};

use crate::dom::{self, Elements};
use crate::html::{self, escape};
use crate::router;
use crate::state::{self, AppState};

/// Delay between opening the handoff link and returning home.
const RETURN_HOME_MS: u32 = 1_000;

const FIELDS: [(&str, &str, &str); 6] = [
    ("first_name", "First name", "text"),
    ("last_name", "Last name", "text"),
    ("phone", "Phone", "tel"),
    ("address", "Address", "text"),
    ("city", "City", "text"),
    ("notes", "Notes (optional)", "textarea"),
];

fn field_mut<'a>(details: &'a mut ContactDetails, name: &str) -> Option<&'a mut String> {
    Some(match name {
        "first_name" => &mut details.first_name,
        "last_name" => &mut details.last_name,
        "phone" => &mut details.phone,
        "address" => &mut details.address,
        "city" => &mut details.city,
        "notes" => &mut details.notes,
        _ => return None,
    })
}

fn field_value<'a>(details: &'a ContactDetails, name: &str) -> &'a str {
    match name {
        "first_name" => &details.first_name,
        "last_name" => &details.last_name,
        "phone" => &details.phone,
        "address" => &details.address,
        "city" => &details.city,
        "notes" => &details.notes,
        _ => "",
    }
}

fn steps(current: CheckoutStep) -> String {
    let items: String = CheckoutStep::ALL
        .iter()
        .map(|step| {
            let cls = match step.cmp(&current) {
                std::cmp::Ordering::Less => "step done",
                std::cmp::Ordering::Equal => "step current",
                std::cmp::Ordering::Greater => "step",
            };
            format!(
                r#"<li class="{cls}" data-action="checkout-goto" data-step="{n}"><span>{n}</span>{label}</li>"#,
                n = step.number(),
                label = step.label()
            )
        })
        .collect();
    format!(r#"<ol class="steps">{items}</ol>"#)
}

fn totals(s: &AppState) -> String {
    let totals = s.front.totals();
    let shipping = if totals.shipping == 0 {
        "Free".to_owned()
    } else {
        html::usd(totals.shipping)
    };
    format!(
        r#"<div class="totals">
  <div class="totals-row"><span>Subtotal</span><span>{}</span></div>
  <div class="totals-row"><span>Delivery</span><span>{shipping}</span></div>
  <div class="totals-row total"><span>Total</span><strong>{}</strong></div>
</div>"#,
        html::usd(totals.subtotal),
        html::usd(totals.total)
    )
}

fn review(s: &AppState) -> String {
    let rows: String = s
        .front
        .cart()
        .lines()
        .iter()
        .map(|line| {
            format!(
                r#"<li class="review-row">{image}<div><strong>{name}</strong><span>{category}</span></div>
  <div class="qty">
    <button data-action="cart-dec" data-key="{key}"{dec}>−</button><span>{qty}</span><button data-action="cart-inc" data-key="{key}">+</button>
  </div>
  <span class="line-total">{total}</span>
  <button class="icon-btn" data-action="cart-remove" data-key="{key}" aria-label="Remove">×</button>
</li>"#,
                image = html::img(&line.item.image, &line.item.name, "review-img"),
                name = escape(&line.item.name),
                category = escape(&line.item.category),
                key = line.item.key,
                dec = if line.quantity <= 1 { " disabled" } else { "" },
                qty = line.quantity,
                total = html::usd(line.line_total()),
            )
        })
        .collect();
    format!(
        r#"<ul class="review-list">{rows}</ul>
{totals}
<div class="wizard-actions"><button id="checkout-continue" class="btn btn-primary" data-action="checkout-next">Continue</button></div>"#,
        totals = totals(s)
    )
}

fn details_form(s: &AppState) -> String {
    let details = &s.wizard.details;
    let inputs: String = FIELDS
        .iter()
        .map(|(name, label, kind)| {
            let value = escape(field_value(details, name));
            let required = if ContactDetails::REQUIRED.contains(name) { " required" } else { "" };
            let control = if *kind == "textarea" {
                format!(r#"<textarea name="{name}" data-field="{name}" rows="3">{value}</textarea>"#)
            } else {
                format!(
                    r#"<input type="{kind}" name="{name}" data-field="{name}" value="{value}"{required}>"#
                )
            };
            format!(r#"<label class="field"><span>{label}</span>{control}</label>"#)
        })
        .collect();
    format!(
        r#"<form id="checkout-form" class="details-form" novalidate>{inputs}</form>
<div class="wizard-actions">
  <button class="btn btn-ghost" data-action="checkout-back">Back</button>
  <button id="checkout-continue" class="btn btn-primary" data-action="checkout-next"{disabled}>Continue</button>
</div>"#,
        disabled = if s.wizard.can_continue(s.front.cart()) { "" } else { " disabled" }
    )
}

fn confirm(s: &AppState) -> String {
    let d = &s.wizard.details;
    let notes = match d.notes.trim() {
        "" => String::new(),
        notes => format!("<dt>Notes</dt><dd>{}</dd>", escape(notes)),
    };
    let items: String = s
        .front
        .cart()
        .lines()
        .iter()
        .map(|line| {
            format!(
                "<li>{} × {} <span>{}</span></li>",
                escape(&line.item.name),
                line.quantity,
                html::usd(line.line_total())
            )
        })
        .collect();
    format!(
        r#"<div class="confirm">
  <dl class="specs">
    <dt>Name</dt><dd>{name}</dd>
    <dt>Phone</dt><dd>{phone}</dd>
    <dt>Address</dt><dd>{address}, {city}</dd>
    {notes}
  </dl>
  <ul class="confirm-items">{items}</ul>
  {totals}
  <p class="hint">Placing the order opens WhatsApp with your order summary. We confirm availability and delivery there.</p>
</div>
<div class="wizard-actions">
  <button class="btn btn-ghost" data-action="checkout-back">Back</button>
  <button class="btn btn-whatsapp" data-action="place-order">Send order via WhatsApp</button>
</div>"#,
        name = escape(&d.full_name()),
        phone = escape(d.phone.trim()),
        address = escape(d.address.trim()),
        city = escape(d.city.trim()),
        totals = totals(s),
    )
}

pub fn page(s: &AppState) -> String {
    if s.front.cart().is_empty() {
        return format!(
            r#"<header class="page-head"><h1>Checkout</h1></header>{}"#,
            html::empty_state(
                "Your Project Bag is empty",
                "Add a few pieces before checking out.",
                Some(("/", "Continue shopping")),
            )
        );
    }
    let step = s.wizard.step();
    let body = match step {
        CheckoutStep::Review => review(s),
        CheckoutStep::Details => details_form(s),
        CheckoutStep::Confirm => confirm(s),
    };
    format!(
        r#"<header class="page-head"><h1>Checkout</h1></header>
{steps}
<section class="wizard">{body}</section>"#,
        steps = steps(step)
    )
}

/// Keep the contact details in sync with the form without re-rendering it.
pub fn on_field(name: &str, value: &str) {
    let can_continue = state::with_mut(|s| {
        if let Some(field) = field_mut(&mut s.wizard.details, name) {
            *field = value.to_owned();
        }
        s.wizard.can_continue(s.front.cart())
    });
    if let Some(button) = dom::by_id("checkout-continue") {
        if can_continue {
            let _ = button.remove_attribute("disabled");
        } else {
            let _ = button.set_attribute("disabled", "");
        }
    }
}

fn report(err: CheckoutError) {
    gloo_console::warn!(format!("checkout: {err}"));
    state::with_mut(|s| {
        s.front.notify(NoticeKind::Error, err.to_string(), state::now_ms());
    });
}

pub fn next() {
    if let Err(err) = state::with_mut(|s| {
        let AppState { front, wizard, .. } = s;
        wizard.advance(front.cart()).map(|_| ())
    }) {
        report(err);
    }
}

pub fn back() {
    state::with_mut(|s| {
        s.wizard.back();
    });
}

pub fn go_to(number: &str) {
    let Some(step) = CheckoutStep::ALL
        .into_iter()
        .find(|step| step.number().to_string() == number)
    else {
        return;
    };
    if let Err(err) = state::with_mut(|s| s.wizard.go_to(step).map(|_| ())) {
        report(err);
    }
}

/// Terminal action: open the deep link in a new tab, then go home.
pub fn place_order(els: &Elements) {
    let placed = state::with_mut(|s| {
        let AppState {
            front,
            wizard,
            whatsapp,
            ..
        } = s;
        front.place_order(wizard, &*whatsapp, state::now_ms())
    });
    match placed {
        Ok(order) => {
            if let Err(e) = dom::window().open_with_url_and_target(&order.url, "_blank") {
                gloo_console::warn!(format!("could not open WhatsApp: {e:?}"));
            }
            let els = els.clone();
            Timeout::new(RETURN_HOME_MS, move || router::navigate(&els, "/")).forget();
        }
        Err(err) => report(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_form_field_maps_to_contact_details() {
        let mut details = ContactDetails::default();
        for (name, _, _) in FIELDS {
            let field = field_mut(&mut details, name).unwrap();
            *field = format!("{name}!");
        }
        for (name, _, _) in FIELDS {
            assert_eq!(field_value(&details, name), format!("{name}!"));
        }
        assert!(field_mut(&mut details, "email").is_none());
        assert!(ContactDetails::REQUIRED.iter().all(|r| FIELDS.iter().any(|(n, _, _)| n == r)));
    }

    #[test]
    fn step_markers_track_progress() {
        let markup = steps(CheckoutStep::Details);
        assert!(markup.contains(r#"<li class="step done" data-action="checkout-goto" data-step="1">"#));
        assert!(markup.contains(r#"<li class="step current" data-action="checkout-goto" data-step="2">"#));
        assert!(markup.contains(r#"<li class="step" data-action="checkout-goto" data-step="3">"#));
    }
}
