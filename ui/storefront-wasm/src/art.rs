//! Arts section: landing, painting and print listings, artwork detail.

use is_api_types::ItemKey;
use is_catalog::query::related_art;
use is_catalog::{
    ART_CATEGORIES, CatalogItem, FrameColor, GlassFinish, PRINT_SIZES, Painting, Print,
    PrintSelection, find_art, print_size,
};
use is_handoff::Handoff;

use crate::html::{self, escape};
use crate::listing::{self, ListingKind};
use crate::state::{self, AppState};

pub fn landing() -> String {
    let cards: String = ART_CATEGORIES
        .iter()
        .map(|c| {
            let cover = c
                .cover_image()
                .map(|src| html::img(src, c.name, "art-cat-img"))
                .unwrap_or_else(|| r#"<div class="art-cat-img placeholder"></div>"#.to_owned());
            let body = format!(
                r#"{cover}<div class="art-cat-info"><span class="art-cat-tagline">{tagline}</span><h3>{name}</h3><p>{description}</p>{meta}</div>"#,
                tagline = escape(c.tagline),
                name = escape(c.name),
                description = escape(c.description),
                meta = if c.coming_soon() {
                    r#"<span class="badge">Coming Soon</span>"#.to_owned()
                } else {
                    format!(r#"<span class="art-cat-count">{} pieces</span>"#, c.count())
                },
            );
            if c.coming_soon() {
                format!(r#"<div class="art-cat-card disabled">{body}</div>"#)
            } else {
                format!(
                    r#"<a class="art-cat-card" href="{path}" data-link="{path}">{body}</a>"#,
                    path = c.path
                )
            }
        })
        .collect();

    format!(
        r#"<header class="page-head arts-head">
  <h1>InStyle Arts</h1>
  <p>Original oil paintings and framed prints for your space.</p>
</header>
<div class="art-cat-grid">{cards}</div>
<p class="center"><a class="link-btn" href="/ratings" data-link="/ratings">Ratings board</a></p>"#
    )
}

pub fn paintings(s: &AppState) -> String {
    format!(
        r#"<nav class="breadcrumb"><a href="/arts" data-link="/arts">Arts</a> / <span>Oil Paintings</span></nav>
<header class="page-head"><h1>Oil Paintings</h1><p>Original hand-drawn oil paintings on canvas. Each piece is one of a kind.</p></header>
{}"#,
        listing::filter_bar(s, &ListingKind::Paintings)
    )
}

pub fn prints(s: &AppState) -> String {
    format!(
        r#"<nav class="breadcrumb"><a href="/arts" data-link="/arts">Arts</a> / <span>Framed Prints</span></nav>
<header class="page-head"><h1>Framed Prints</h1><p>Museum-quality prints, framed to order.</p></header>
{}"#,
        listing::filter_bar(s, &ListingKind::Prints)
    )
}

/// Selection a print page opens with.
pub fn initial_selection(code: &str) -> PrintSelection {
    match find_art(code) {
        Some(CatalogItem::Print(print)) => PrintSelection {
            frame: print.default_frame.parse().unwrap_or_default(),
            ..PrintSelection::default()
        },
        _ => PrintSelection::default(),
    }
}

/// Apply one variant button. Unknown ids leave the selection unchanged.
pub fn select_variant(size: Option<&str>, glass: Option<&str>, frame: Option<&str>) {
    state::with_mut(|s| {
        if let Some(size) = size.and_then(|id| print_size(id).ok()) {
            s.selection.size = size;
        }
        if let Some(glass) = glass.and_then(|id| id.parse::<GlassFinish>().ok()) {
            s.selection.glass = glass;
        }
        if let Some(frame) = frame.and_then(|id| id.parse::<FrameColor>().ok()) {
            s.selection.frame = frame;
        }
    });
}

fn frame_id(frame: FrameColor) -> String {
    frame.label().to_ascii_lowercase().replace(' ', "-")
}

fn option_button(attr: &str, id: &str, active: bool, body: &str) -> String {
    format!(
        r#"<button class="variant-btn{}" data-action="select-variant" data-{attr}="{id}">{body}</button>"#,
        if active { " active" } else { "" }
    )
}

fn print_options(print: &Print, selection: &PrintSelection) -> String {
    let sizes: String = PRINT_SIZES
        .iter()
        .filter(|size| print.sizes.contains(&size.id))
        .map(|size| {
            option_button(
                "size",
                size.id,
                size.id == selection.size.id,
                &format!(
                    "<strong>{}</strong><small>{}</small>",
                    size.id.to_ascii_uppercase(),
                    size.label
                ),
            )
        })
        .collect();
    let glasses: String = GlassFinish::ALL
        .iter()
        .map(|glass| {
            let extra = match glass.listed_modifier() {
                0 => String::new(),
                m => format!(" <small>+${m}</small>"),
            };
            option_button(
                "glass",
                glass.id(),
                *glass == selection.glass,
                &format!("{}{extra}", glass.label()),
            )
        })
        .collect();
    let frames: String = FrameColor::ALL
        .iter()
        .map(|frame| {
            option_button(
                "frame",
                &frame_id(*frame),
                *frame == selection.frame,
                &format!(
                    r#"<span class="swatch swatch-{}"></span>{}"#,
                    frame_id(*frame),
                    frame.label()
                ),
            )
        })
        .collect();
    format!(
        r#"<div class="variants">
  <h4>Size</h4><div class="variant-row">{sizes}</div>
  <h4>Glass</h4><div class="variant-row">{glasses}</div>
  <h4>Frame</h4><div class="variant-row">{frames}</div>
</div>"#
    )
}

fn painting_detail(s: &AppState, painting: &Painting) -> String {
    let key = ItemKey::painting(painting.code);
    format!(
        r#"<div class="detail-info">
  <span class="card-code">{code}</span>
  <h1>{title}</h1>
  <div class="detail-price">{price}</div>
  <p>{description}</p>
  <dl class="specs"><dt>Size</dt><dd>{dims}</dd><dt>Medium</dt><dd>Oil on canvas</dd></dl>
  <div class="detail-actions">
    <button class="btn btn-primary" data-action="add-to-cart" data-key="{key}">Add to Project</button>
    {heart}
    {share}
  </div>
  {inquiry}
</div>"#,
        code = painting.code,
        title = escape(painting.title),
        price = html::usd(painting.price),
        description = escape(painting.description),
        dims = painting.dimensions_label(),
        heart = html::heart(&key, s.front.is_favorite(&key)),
        share = html::share_button(&format!("/art/{}", painting.code), painting.title),
        inquiry = html::inquiry_link(
            &s.whatsapp.link(&is_handoff::painting_inquiry(painting)),
            "Ask on WhatsApp"
        ),
    )
}

fn print_detail(s: &AppState, print: &Print) -> String {
    let key = ItemKey::print(print.code);
    let selection = &s.selection;
    format!(
        r#"<div class="detail-info">
  <span class="card-code">{code}</span>
  <h1>{title}</h1>
  <div class="detail-price">{price}</div>
  <p>{description}</p>
  {options}
  <div class="detail-actions">
    {order}
    {heart}
    {share}
  </div>
  <p class="hint">Prints are framed to order. Send us your selection and we will confirm delivery.</p>
</div>"#,
        code = print.code,
        title = escape(print.title),
        price = html::usd(selection.price()),
        description = escape(print.description),
        options = print_options(print, selection),
        order = html::inquiry_link(
            &s.whatsapp.link(&is_handoff::print_inquiry(print, selection)),
            "Order on WhatsApp"
        ),
        heart = html::heart(&key, s.front.is_favorite(&key)),
        share = html::share_button(&format!("/art/{}", print.code), print.title),
    )
}

/// `None` when no artwork has this code.
pub fn detail(s: &AppState, code: &str) -> Option<String> {
    let item = find_art(code)?;
    let (section, section_path, info) = match item {
        CatalogItem::Painting(p) => ("Oil Paintings", "/arts/oil-paintings", painting_detail(s, p)),
        CatalogItem::Print(p) => ("Framed Prints", "/arts/prints", print_detail(s, p)),
        CatalogItem::Product(_) => return None,
    };
    let related: String = related_art(&item)
        .iter()
        .map(|other| html::item_card(other, s.front.is_favorite(&other.key())))
        .collect();

    Some(format!(
        r#"<nav class="breadcrumb"><a href="/arts" data-link="/arts">Arts</a> / <a href="{section_path}" data-link="{section_path}">{section}</a> / <span>{title}</span></nav>
<section class="detail">
  <div class="detail-media">{image}</div>
  {info}
</section>
<section class="section">
  <h2>More from {section}</h2>
  <div class="grid">{related}</div>
</section>"#,
        title = escape(item.name()),
        image = html::img(item.image(), item.name(), "detail-img"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_ids_parse_back() {
        for frame in FrameColor::ALL {
            assert_eq!(frame_id(frame).parse::<FrameColor>(), Ok(frame));
        }
        assert_eq!(frame_id(FrameColor::NaturalOak), "natural-oak");
    }

    #[test]
    fn print_pages_open_with_the_default_frame() {
        let print = is_catalog::find_print("PR1").unwrap();
        let selection = initial_selection("pr1");
        assert_eq!(selection.frame, print.default_frame.parse().unwrap());
        assert_eq!(selection.size.id, "a3");
        assert_eq!(initial_selection("OP3"), PrintSelection::default());
    }
}
