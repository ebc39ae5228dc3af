//! Filterable listings: furniture by category, paintings and prints.
//!
//! The filter bar is rendered with the page; typing only re-renders
//! `#listing-results` so the focused input keeps its caret.

use is_api_types::ItemKey;
use is_catalog::query::{
    ListingFilter, Orientation, PAGE_SIZE, SortKey, materials, price_bounds, print_categories,
};
use is_catalog::{PAINTINGS, PRINTS, products_in};
use is_storefront_core::Route;

use crate::dom;
use crate::html;
use crate::state::{self, AppState, Listing};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingKind {
    Products(String),
    Paintings,
    Prints,
}

impl ListingKind {
    pub fn for_route(route: &Route) -> Option<Self> {
        match route {
            Route::Category(id) => Some(ListingKind::Products(id.clone())),
            Route::Paintings => Some(ListingKind::Paintings),
            Route::Prints => Some(ListingKind::Prints),
            _ => None,
        }
    }
}

fn filter_of<'a>(listing: &'a Listing, kind: &ListingKind) -> &'a ListingFilter {
    match kind {
        ListingKind::Products(_) => &listing.products.filter,
        ListingKind::Paintings => &listing.paintings.filter,
        ListingKind::Prints => &listing.prints.filter,
    }
}

fn filter_mut<'a>(listing: &'a mut Listing, kind: &ListingKind) -> &'a mut ListingFilter {
    match kind {
        ListingKind::Products(_) => &mut listing.products.filter,
        ListingKind::Paintings => &mut listing.paintings.filter,
        ListingKind::Prints => &mut listing.prints.filter,
    }
}

fn parse_price(value: &str) -> Option<u64> {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Apply one filter control. Returns `false` when the current page has no
/// listing or the control is unknown.
pub fn set_filter(name: &str, value: &str) -> bool {
    state::with_mut(|s| {
        let Some(kind) = ListingKind::for_route(&s.route) else {
            return false;
        };
        let listing = &mut s.listing;
        match name {
            "q" => filter_mut(listing, &kind).text = value.to_owned(),
            "min" => filter_mut(listing, &kind).min_price = parse_price(value),
            "max" => filter_mut(listing, &kind).max_price = parse_price(value),
            "sort" => filter_mut(listing, &kind).sort = value.parse().unwrap_or_default(),
            "only-favorites" => filter_mut(listing, &kind).only_favorites = value == "true",
            "orientation" => listing.paintings.orientation = value.parse().unwrap_or_default(),
            "print-category" => {
                listing.prints.category =
                    (!value.is_empty() && value != "All").then(|| value.to_owned())
            }
            _ => return false,
        }
        listing.visible = PAGE_SIZE;
        true
    })
}

pub fn toggle_material(material: &str) {
    state::with_mut(|s| {
        let materials = &mut s.listing.products.materials;
        if let Some(pos) = materials.iter().position(|m| m == material) {
            materials.remove(pos);
        } else {
            materials.push(material.to_owned());
        }
        s.listing.visible = PAGE_SIZE;
    });
}

pub fn show_more() {
    state::with_mut(|s| s.listing.visible += PAGE_SIZE);
}

pub fn reset_filters() {
    state::with_mut(|s| {
        let Some(kind) = ListingKind::for_route(&s.route) else {
            return;
        };
        match kind {
            ListingKind::Products(_) => s.listing.products = Default::default(),
            ListingKind::Paintings => s.listing.paintings = Default::default(),
            ListingKind::Prints => s.listing.prints = Default::default(),
        }
        s.listing.visible = PAGE_SIZE;
    });
}

fn sort_select(current: SortKey) -> String {
    let options: String = SortKey::ALL
        .iter()
        .map(|key| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                key.id(),
                if *key == current { " selected" } else { "" },
                key.label()
            )
        })
        .collect();
    format!(r#"<select class="filter-sort" data-filter="sort" aria-label="Sort">{options}</select>"#)
}

fn price_inputs(filter: &ListingFilter, bounds: Option<(u64, u64)>) -> String {
    let (low, high) = bounds.unwrap_or((0, 0));
    let value = |v: Option<u64>| v.map(|v| v.to_string()).unwrap_or_default();
    format!(
        r#"<div class="filter-price">
  <input type="number" min="0" inputmode="numeric" data-filter="min" placeholder="Min ${low}" value="{}">
  <span>–</span>
  <input type="number" min="0" inputmode="numeric" data-filter="max" placeholder="Max ${high}" value="{}">
</div>"#,
        value(filter.min_price),
        value(filter.max_price)
    )
}

fn extra_controls(s: &AppState, kind: &ListingKind) -> String {
    match kind {
        ListingKind::Products(id) => {
            let chips: String = materials(products_in(id))
                .into_iter()
                .map(|m| {
                    let active = s.listing.products.materials.iter().any(|sel| sel == m);
                    format!(
                        r#"<button class="chip{}" data-action="toggle-material" data-material="{}">{}</button>"#,
                        if active { " active" } else { "" },
                        html::escape(m),
                        html::escape(m)
                    )
                })
                .collect();
            if chips.is_empty() {
                String::new()
            } else {
                format!(r#"<div class="filter-chips">{chips}</div>"#)
            }
        }
        ListingKind::Paintings => {
            let current = s.listing.paintings.orientation;
            let options: String = Orientation::ALL
                .iter()
                .map(|o| {
                    let label = match o {
                        Orientation::All => "All shapes",
                        Orientation::Portrait => "Portrait",
                        Orientation::Landscape => "Landscape",
                        Orientation::Square => "Square",
                    };
                    format!(
                        r#"<option value="{}"{}>{label}</option>"#,
                        o.id(),
                        if *o == current { " selected" } else { "" }
                    )
                })
                .collect();
            format!(r#"<select data-filter="orientation" aria-label="Orientation">{options}</select>"#)
        }
        ListingKind::Prints => {
            let current = s.listing.prints.category.as_deref().unwrap_or("All");
            let options: String = std::iter::once("All")
                .chain(print_categories())
                .map(|c| {
                    format!(
                        r#"<option value="{0}"{1}>{0}</option>"#,
                        html::escape(c),
                        if c == current { " selected" } else { "" }
                    )
                })
                .collect();
            format!(r#"<select data-filter="print-category" aria-label="Category">{options}</select>"#)
        }
    }
}

/// Filter controls followed by the result grid.
pub fn filter_bar(s: &AppState, kind: &ListingKind) -> String {
    let filter = filter_of(&s.listing, kind);
    let bounds = match kind {
        ListingKind::Products(id) => price_bounds(products_in(id).collect::<Vec<_>>()),
        ListingKind::Paintings => price_bounds(PAINTINGS),
        ListingKind::Prints => price_bounds(PRINTS),
    };
    let placeholder = match kind {
        ListingKind::Products(_) => "Search products…",
        _ => "Search by title or code…",
    };
    format!(
        r#"<div class="filter-bar">
  <input type="search" class="filter-search" data-filter="q" placeholder="{placeholder}" value="{text}">
  {price}
  {extra}
  {sort}
  <label class="filter-toggle"><input type="checkbox" data-filter="only-favorites"{checked}> Favorites only</label>
</div>
<div id="listing-results">{results}</div>"#,
        text = html::escape(&filter.text),
        price = price_inputs(filter, bounds),
        extra = extra_controls(s, kind),
        sort = sort_select(filter.sort),
        checked = if filter.only_favorites { " checked" } else { "" },
        results = results_html(s, kind),
    )
}

pub fn results_html(s: &AppState, kind: &ListingKind) -> String {
    let favorite = |key: &ItemKey| s.front.is_favorite(key);
    let cards: Vec<String> = match kind {
        ListingKind::Products(id) => s
            .listing
            .products
            .apply(id, favorite)
            .into_iter()
            .map(|p| html::product_card(p, favorite(&ItemKey::product(p.id))))
            .collect(),
        ListingKind::Paintings => s
            .listing
            .paintings
            .apply(favorite)
            .into_iter()
            .map(|p| html::painting_card(p, favorite(&ItemKey::painting(p.code))))
            .collect(),
        ListingKind::Prints => s
            .listing
            .prints
            .apply(favorite)
            .into_iter()
            .map(|p| html::print_card(p, favorite(&ItemKey::print(p.code))))
            .collect(),
    };

    if cards.is_empty() {
        return format!(
            r#"{}<div class="center"><button class="btn btn-ghost" data-action="reset-filters">Clear filters</button></div>"#,
            html::empty_state("No matches", "Nothing matches these filters.", None)
        );
    }

    let total = cards.len();
    let shown = total.min(s.listing.visible);
    let more = if shown < total {
        format!(
            r#"<div class="center"><button class="btn btn-ghost" data-action="show-more">Show more ({} left)</button></div>"#,
            total - shown
        )
    } else {
        String::new()
    };
    format!(
        r#"<p class="result-count">Showing {shown} of {total}</p><div class="grid">{}</div>{more}"#,
        cards[..shown].concat()
    )
}

/// Re-render only the result grid of the current listing.
pub fn render_results() {
    let Some(target) = dom::by_id("listing-results") else {
        return;
    };
    let markup = state::with(|s| {
        ListingKind::for_route(&s.route).map(|kind| results_html(s, &kind))
    });
    if let Some(markup) = markup {
        dom::set_inner_html(&target, &markup);
    }
}
