//! Markup fragments shared by the views.

use is_api_types::{ItemKey, ItemKind};
use is_catalog::{CatalogItem, Painting, Print, Product};
use is_handoff::format_usd;

/// Escape text for element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn usd(amount: u64) -> String {
    format!("${}", format_usd(amount))
}

/// Detail page for any catalog key.
pub fn item_path(key: &ItemKey) -> String {
    match key.kind() {
        ItemKind::Product => format!("/product/{}", key.code()),
        ItemKind::Painting | ItemKind::Print => format!("/art/{}", key.code()),
    }
}

pub fn product_price(product: &Product) -> String {
    format!("{}{}", usd(product.price), product.unit.unwrap_or_default())
}

pub fn img(src: &str, alt: &str, class: &str) -> String {
    format!(
        r#"<img class="{class}" src="{}" alt="{}" loading="lazy" decoding="async">"#,
        escape(src),
        escape(alt)
    )
}

pub fn heart(key: &ItemKey, active: bool) -> String {
    let (cls, label) = if active {
        ("fav-btn active", "Remove from favorites")
    } else {
        ("fav-btn", "Add to favorites")
    };
    format!(
        r#"<button class="{cls}" data-action="toggle-favorite" data-key="{key}" aria-label="{label}">{}</button>"#,
        if active { "♥" } else { "♡" }
    )
}

pub fn share_button(path: &str, title: &str) -> String {
    format!(
        r#"<button class="btn btn-ghost" data-action="share" data-path="{}" data-title="{}">Share</button>"#,
        escape(path),
        escape(title)
    )
}

pub fn inquiry_link(url: &str, label: &str) -> String {
    format!(
        r#"<a class="btn btn-whatsapp" href="{}" target="_blank" rel="noopener">{label}</a>"#,
        escape(url)
    )
}

pub fn product_card(product: &Product, favorite: bool) -> String {
    let key = ItemKey::product(product.id);
    let tag = product
        .tag
        .map(|t| format!(r#"<span class="card-tag">{}</span>"#, escape(t)))
        .unwrap_or_default();
    format!(
        r#"<article class="card">
  <a class="card-media" href="/product/{id}" data-link="/product/{id}">{image}{tag}</a>
  {heart}
  <div class="card-body">
    <a class="card-title" href="/product/{id}" data-link="/product/{id}">{name}</a>
    <div class="card-price">{price}</div>
    <button class="btn btn-primary" data-action="add-to-cart" data-key="{key}">Add to Project</button>
  </div>
</article>"#,
        id = product.id,
        image = img(product.image, product.name, "card-img"),
        heart = heart(&key, favorite),
        name = escape(product.name),
        price = product_price(product),
    )
}

pub fn painting_card(painting: &Painting, favorite: bool) -> String {
    let key = ItemKey::painting(painting.code);
    format!(
        r#"<article class="card card-art">
  <a class="card-media" href="/art/{code}" data-link="/art/{code}">{image}</a>
  {heart}
  <div class="card-body">
    <span class="card-code">{code}</span>
    <a class="card-title" href="/art/{code}" data-link="/art/{code}">{title}</a>
    <div class="card-meta">{dims}</div>
    <div class="card-price">{price}</div>
  </div>
</article>"#,
        code = painting.code,
        image = img(painting.image, painting.title, "card-img"),
        heart = heart(&key, favorite),
        title = escape(painting.title),
        dims = painting.dimensions_label(),
        price = usd(painting.price),
    )
}

pub fn print_card(print: &Print, favorite: bool) -> String {
    let key = ItemKey::print(print.code);
    format!(
        r#"<article class="card card-art">
  <a class="card-media" href="/art/{code}" data-link="/art/{code}">{image}</a>
  {heart}
  <div class="card-body">
    <span class="card-code">{code}</span>
    <a class="card-title" href="/art/{code}" data-link="/art/{code}">{title}</a>
    <div class="card-meta">{category}</div>
    <div class="card-price">From {price}</div>
  </div>
</article>"#,
        code = print.code,
        image = img(print.image, print.title, "card-img"),
        heart = heart(&key, favorite),
        title = escape(print.title),
        category = escape(print.category),
        price = usd(print.price),
    )
}

pub fn item_card(item: &CatalogItem, favorite: bool) -> String {
    match item {
        CatalogItem::Product(p) => product_card(p, favorite),
        CatalogItem::Painting(p) => painting_card(p, favorite),
        CatalogItem::Print(p) => print_card(p, favorite),
    }
}

pub fn empty_state(title: &str, body: &str, link: Option<(&str, &str)>) -> String {
    let action = link
        .map(|(path, label)| {
            format!(r#"<a class="btn btn-primary" href="{path}" data-link="{path}">{label}</a>"#)
        })
        .unwrap_or_default();
    format!(
        r#"<div class="empty-state"><h3>{}</h3><p>{}</p>{action}</div>"#,
        escape(title),
        escape(body)
    )
}
