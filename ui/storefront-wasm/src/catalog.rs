//! Furniture pages: home, category listing, product detail.

use is_api_types::ItemKey;
use is_catalog::query::related_products;
use is_catalog::{CATEGORIES, find_category, find_product, products_in};
use is_handoff::Handoff;

use crate::html::{self, escape};
use crate::listing::{self, ListingKind};
use crate::state::AppState;

fn recently_viewed(s: &AppState) -> String {
    let recents = s.front.recents();
    if recents.is_empty() {
        return String::new();
    }
    let cards: String = recents
        .items()
        .iter()
        .map(|recent| {
            let item = &recent.item;
            let path = html::item_path(&item.key);
            format!(
                r#"<a class="recent-card" href="{path}" data-link="{path}">{}<span class="recent-name">{}</span><span class="recent-price">{}</span></a>"#,
                html::img(&item.image, &item.name, "recent-img"),
                escape(&item.name),
                html::usd(item.price)
            )
        })
        .collect();
    format!(
        r#"<section class="section recent">
  <div class="section-head"><h2>Recently Viewed</h2><button class="link-btn" data-action="clear-recents">Clear</button></div>
  <div class="recent-row">{cards}</div>
</section>"#
    )
}

pub fn home(s: &AppState) -> String {
    let categories: String = CATEGORIES
        .iter()
        .map(|c| {
            format!(
                r#"<a class="category-card" href="/category/{id}" data-link="/category/{id}">
  {image}
  <div class="category-info"><h3>{name}</h3><p>{subtitle}</p><span class="category-count">{count} pieces</span></div>
</a>"#,
                id = c.id,
                image = html::img(c.image, c.name, "category-img"),
                name = escape(c.name),
                subtitle = escape(c.subtitle),
                count = products_in(c.id).count(),
            )
        })
        .collect();

    format!(
        r#"<section class="hero">
  <h1>Modern Carpentry &amp; Art</h1>
  <p>Custom furniture built in our workshop, and art for the walls around it.</p>
  <div class="hero-actions">
    <a class="btn btn-primary" href="/category/{first}" data-link="/category/{first}">Shop Furniture</a>
    <a class="btn btn-ghost" href="/arts" data-link="/arts">Explore Arts</a>
  </div>
</section>
<section class="section">
  <h2>Shop by Category</h2>
  <div class="category-grid">{categories}</div>
</section>
<section class="section arts-entry">
  <a class="arts-banner" href="/arts" data-link="/arts">
    <h2>InStyle Arts</h2>
    <p>Original oil paintings and framed prints.</p>
  </a>
</section>
{recent}"#,
        first = CATEGORIES.first().map(|c| c.id).unwrap_or_default(),
        recent = recently_viewed(s),
    )
}

/// `None` when the category id is unknown.
pub fn category(s: &AppState, id: &str) -> Option<String> {
    let category = find_category(id)?;
    let kind = ListingKind::Products(category.id.to_owned());
    Some(format!(
        r#"<nav class="breadcrumb"><a href="/" data-link="/">Home</a> / <span>{name}</span></nav>
<header class="page-head">
  <h1>{name}</h1>
  <p class="page-subtitle">{subtitle}</p>
  <p>{description}</p>
</header>
{listing}"#,
        name = escape(category.name),
        subtitle = escape(category.subtitle),
        description = escape(category.description),
        listing = listing::filter_bar(s, &kind),
    ))
}

/// `None` when the product id is unknown.
pub fn product(s: &AppState, id: u32) -> Option<String> {
    let product = find_product(id)?;
    let key = ItemKey::product(product.id);
    let path = format!("/product/{}", product.id);

    let mut specs = String::new();
    if let Some(dimensions) = product.dimensions {
        specs.push_str(&format!("<dt>Dimensions</dt><dd>{}</dd>", escape(dimensions)));
    }
    if let Some(material) = product.material {
        specs.push_str(&format!("<dt>Material</dt><dd>{}</dd>", escape(material)));
    }

    let in_cart = s
        .front
        .cart()
        .quantity_of(&key)
        .map(|qty| format!(r#"<p class="in-cart">{qty} in your Project Bag</p>"#))
        .unwrap_or_default();

    let related: String = related_products(product)
        .into_iter()
        .map(|p| html::product_card(p, s.front.is_favorite(&ItemKey::product(p.id))))
        .collect();

    Some(format!(
        r#"<nav class="breadcrumb"><a href="/" data-link="/">Home</a> / <a href="/category/{cat_id}" data-link="/category/{cat_id}">{category}</a> / <span>{name}</span></nav>
<section class="detail">
  <div class="detail-media">{image}</div>
  <div class="detail-info">
    {tag}
    <h1>{name}</h1>
    <div class="detail-price">{price}</div>
    <p>{description}</p>
    <dl class="specs">{specs}</dl>
    {in_cart}
    <div class="detail-actions">
      <button class="btn btn-primary" data-action="add-to-cart" data-key="{key}">Add to Project</button>
      {heart}
      {share}
    </div>
    {inquiry}
  </div>
</section>
<section class="section">
  <h2>You May Also Like</h2>
  <div class="grid">{related}</div>
</section>"#,
        cat_id = product.category_id,
        category = escape(product.category),
        name = escape(product.name),
        image = html::img(product.image, product.name, "detail-img"),
        tag = product
            .tag
            .map(|t| format!(r#"<span class="card-tag">{}</span>"#, escape(t)))
            .unwrap_or_default(),
        price = html::product_price(product),
        description = escape(product.description),
        heart = html::heart(&key, s.front.is_favorite(&key)),
        share = html::share_button(&path, product.name),
        inquiry = html::inquiry_link(
            &s.whatsapp.link(&is_handoff::product_inquiry(product)),
            "Ask on WhatsApp"
        ),
    ))
}
