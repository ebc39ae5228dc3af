//! Listing filters, sorting and related-item selection.

use is_api_types::ItemKey;
use std::cmp::Ordering;
use std::str::FromStr;

use crate::art::{PAINTINGS, PRINTS, Painting, Print};
use crate::products::{PRODUCTS, Product};
use crate::CatalogItem;

/// Listings reveal this many cards per "show more".
pub const PAGE_SIZE: usize = 9;
pub const RELATED_LIMIT: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    NameAsc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Featured,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::NameAsc,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::NameAsc => "name_asc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::NameAsc => "Name: A-Z",
        }
    }

    fn compare<T: Listed>(self, a: &T, b: &T) -> Ordering {
        match self {
            SortKey::Featured => Ordering::Equal,
            SortKey::PriceAsc => a.price().cmp(&b.price()),
            SortKey::PriceDesc => b.price().cmp(&a.price()),
            SortKey::NameAsc => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
        }
    }
}

impl FromStr for SortKey {
    type Err = std::convert::Infallible;

    /// Unknown ids fall back to catalog order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "price_asc" | "price-asc" => SortKey::PriceAsc,
            "price_desc" | "price-desc" => SortKey::PriceDesc,
            "name_asc" | "name-asc" | "name" => SortKey::NameAsc,
            _ => SortKey::Featured,
        })
    }
}

/// Common view of anything shown in a listing grid.
pub trait Listed {
    fn key(&self) -> ItemKey;
    fn name(&self) -> &str;
    fn price(&self) -> u64;
}

impl Listed for Product {
    fn key(&self) -> ItemKey {
        ItemKey::product(self.id)
    }
    fn name(&self) -> &str {
        self.name
    }
    fn price(&self) -> u64 {
        self.price
    }
}

impl Listed for Painting {
    fn key(&self) -> ItemKey {
        ItemKey::painting(self.code)
    }
    fn name(&self) -> &str {
        self.title
    }
    fn price(&self) -> u64 {
        self.price
    }
}

impl Listed for Print {
    fn key(&self) -> ItemKey {
        ItemKey::print(self.code)
    }
    fn name(&self) -> &str {
        self.title
    }
    fn price(&self) -> u64 {
        self.price
    }
}

/// Lowest and highest price in `items`, `None` when empty.
pub fn price_bounds<'a, T: Listed + 'a>(items: impl IntoIterator<Item = &'a T>) -> Option<(u64, u64)> {
    items.into_iter().fold(None, |acc, item| {
        let price = item.price();
        Some(match acc {
            None => (price, price),
            Some((lo, hi)) => (lo.min(price), hi.max(price)),
        })
    })
}

/// Distinct materials in first-seen order.
pub fn materials<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for material in products.into_iter().filter_map(|p| p.material) {
        if !out.contains(&material) {
            out.push(material);
        }
    }
    out
}

/// Shared text/price/favorite filter state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub text: String,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub only_favorites: bool,
    pub sort: SortKey,
}

impl ListingFilter {
    fn price_ok(&self, price: u64) -> bool {
        self.min_price.is_none_or(|min| price >= min) && self.max_price.is_none_or(|max| price <= max)
    }

    fn needle(&self) -> Option<String> {
        let q = self.text.trim().to_lowercase();
        (!q.is_empty()).then_some(q)
    }

    fn favorite_ok<T: Listed>(&self, item: &T, is_favorite: &impl Fn(&ItemKey) -> bool) -> bool {
        !self.only_favorites || is_favorite(&item.key())
    }

    fn finish<T: Listed>(&self, mut items: Vec<&'static T>) -> Vec<&'static T> {
        if self.sort != SortKey::Featured {
            items.sort_by(|a, b| self.sort.compare(*a, *b));
        }
        items
    }
}

/// Furniture listing within one category. Text matches the product name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub filter: ListingFilter,
    pub materials: Vec<String>,
}

impl ProductQuery {
    pub fn apply(
        &self,
        category_id: &str,
        is_favorite: impl Fn(&ItemKey) -> bool,
    ) -> Vec<&'static Product> {
        let needle = self.filter.needle();
        let hits = PRODUCTS
            .iter()
            .filter(|p| p.category_id == category_id)
            .filter(|p| {
                needle
                    .as_deref()
                    .is_none_or(|q| p.name.to_lowercase().contains(q))
            })
            .filter(|p| self.filter.price_ok(p.price))
            .filter(|p| {
                self.materials.is_empty()
                    || p.material.is_some_and(|m| self.materials.iter().any(|s| s == m))
            })
            .filter(|p| self.filter.favorite_ok(*p, &is_favorite))
            .collect();
        self.filter.finish(hits)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    All,
    Portrait,
    Landscape,
    Square,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::All,
        Orientation::Portrait,
        Orientation::Landscape,
        Orientation::Square,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Orientation::All => "all",
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
            Orientation::Square => "square",
        }
    }

    pub fn matches(self, painting: &Painting) -> bool {
        match self {
            Orientation::All => true,
            Orientation::Portrait => painting.height > painting.width,
            Orientation::Landscape => painting.width > painting.height,
            Orientation::Square => painting.width == painting.height,
        }
    }
}

impl FromStr for Orientation {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Orientation::ALL
            .into_iter()
            .find(|o| o.id() == s.trim())
            .unwrap_or_default())
    }
}

fn art_text_match(needle: Option<&str>, title: &str, code: &str) -> bool {
    needle.is_none_or(|q| title.to_lowercase().contains(q) || code.to_lowercase().contains(q))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaintingQuery {
    pub filter: ListingFilter,
    pub orientation: Orientation,
}

impl PaintingQuery {
    pub fn apply(&self, is_favorite: impl Fn(&ItemKey) -> bool) -> Vec<&'static Painting> {
        let needle = self.filter.needle();
        let hits = PAINTINGS
            .iter()
            .filter(|p| art_text_match(needle.as_deref(), p.title, p.code))
            .filter(|p| self.filter.price_ok(p.price))
            .filter(|p| self.orientation.matches(p))
            .filter(|p| self.filter.favorite_ok(*p, &is_favorite))
            .collect();
        self.filter.finish(hits)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrintQuery {
    pub filter: ListingFilter,
    /// `None` shows every print category.
    pub category: Option<String>,
}

impl PrintQuery {
    pub fn apply(&self, is_favorite: impl Fn(&ItemKey) -> bool) -> Vec<&'static Print> {
        let needle = self.filter.needle();
        let hits = PRINTS
            .iter()
            .filter(|p| art_text_match(needle.as_deref(), p.title, p.code))
            .filter(|p| self.filter.price_ok(p.price))
            .filter(|p| self.category.as_deref().is_none_or(|c| p.category == c))
            .filter(|p| self.filter.favorite_ok(*p, &is_favorite))
            .collect();
        self.filter.finish(hits)
    }
}

/// Distinct print categories in first-seen order.
pub fn print_categories() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for print in PRINTS {
        if !out.contains(&print.category) {
            out.push(print.category);
        }
    }
    out
}

/// Same-category products first, topped up from the rest of the catalog in
/// catalog order.
pub fn related_products(product: &Product) -> Vec<&'static Product> {
    let others = || PRODUCTS.iter().filter(|p| p.id != product.id);
    let mut related: Vec<&'static Product> = others()
        .filter(|p| p.category_id == product.category_id)
        .take(RELATED_LIMIT)
        .collect();
    if related.len() < RELATED_LIMIT {
        let missing = RELATED_LIMIT - related.len();
        related.extend(
            others()
                .filter(|p| p.category_id != product.category_id)
                .take(missing),
        );
    }
    related
}

/// Other pieces from the same collection as `item`.
pub fn related_art(item: &CatalogItem) -> Vec<CatalogItem> {
    match item {
        CatalogItem::Painting(current) => PAINTINGS
            .iter()
            .filter(|p| p.code != current.code)
            .take(RELATED_LIMIT)
            .map(CatalogItem::Painting)
            .collect(),
        CatalogItem::Print(current) => PRINTS
            .iter()
            .filter(|p| p.code != current.code)
            .take(RELATED_LIMIT)
            .map(CatalogItem::Print)
            .collect(),
        CatalogItem::Product(product) => related_products(product)
            .into_iter()
            .map(CatalogItem::Product)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{find_art, find_product, products_in};

    fn none(_: &ItemKey) -> bool {
        false
    }

    #[test]
    fn featured_keeps_catalog_order() {
        let hits = ProductQuery::default().apply("tv-units", none);
        let ids: Vec<u32> = hits.iter().map(|p| p.id).collect();
        let expected: Vec<u32> = products_in("tv-units").map(|p| p.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn price_sorts_are_monotonic() {
        let mut query = ProductQuery::default();
        query.filter.sort = SortKey::PriceAsc;
        let asc = query.apply("tv-units", none);
        assert!(asc.windows(2).all(|w| w[0].price <= w[1].price));

        query.filter.sort = SortKey::PriceDesc;
        let desc = query.apply("tv-units", none);
        assert!(desc.windows(2).all(|w| w[0].price >= w[1].price));
    }

    #[test]
    fn price_window_and_materials_filter() {
        let all: Vec<&Product> = products_in("sofas").collect();
        let (lo, hi) = price_bounds(all.iter().copied()).unwrap();
        assert!(lo <= hi);

        let mut query = ProductQuery::default();
        query.filter.min_price = Some(hi);
        assert!(query.apply("sofas", none).iter().all(|p| p.price == hi));

        let found = materials(all.iter().copied());
        assert!(found.contains(&"Velvet"));
        let velvet = ProductQuery {
            materials: vec!["Velvet".into()],
            ..ProductQuery::default()
        }
        .apply("sofas", none);
        assert!(!velvet.is_empty());
        assert!(velvet.iter().all(|p| p.material == Some("Velvet")));
    }

    #[test]
    fn only_favorites_uses_the_predicate() {
        let mut query = PaintingQuery::default();
        query.filter.only_favorites = true;
        let hits = query.apply(|key| key == &ItemKey::painting("OP9"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].code, "OP9");
    }

    #[test]
    fn painting_text_matches_title_or_code() {
        let mut query = PaintingQuery::default();
        query.filter.text = "op17".into();
        assert_eq!(query.apply(none)[0].title, "African Muse");
        query.filter.text = "cherry".into();
        assert_eq!(query.apply(none)[0].code, "OP9");
    }

    #[test]
    fn orientation_classifies_by_dimensions() {
        let query = PaintingQuery {
            orientation: Orientation::Portrait,
            ..PaintingQuery::default()
        };
        assert!(query.apply(none).iter().all(|p| p.height > p.width));
        assert_eq!("landscape".parse::<Orientation>().unwrap(), Orientation::Landscape);
        assert_eq!("diagonal".parse::<Orientation>().unwrap(), Orientation::All);
    }

    #[test]
    fn print_category_filter() {
        let query = PrintQuery {
            category: Some("Kitchen".into()),
            ..PrintQuery::default()
        };
        let hits = query.apply(none);
        assert!(hits.iter().any(|p| p.code == "PR1"));
        assert!(hits.iter().all(|p| p.category == "Kitchen"));
        assert!(print_categories().contains(&"Typography"));
    }

    #[test]
    fn related_products_prefers_same_category_then_fills() {
        let product = find_product(3001).unwrap();
        let related = related_products(product);
        assert_eq!(related.len(), RELATED_LIMIT);
        assert!(related.iter().all(|p| p.id != product.id));
        assert_eq!(related[0].category_id, product.category_id);

        // A category with fewer than four siblings is topped up.
        let chair = find_product(7001).unwrap();
        let related = related_products(chair);
        assert_eq!(related.len(), RELATED_LIMIT);
        assert_eq!(related[0].id, 7002);
        assert!(related[1..].iter().all(|p| p.category_id != "chairs"));
        assert_eq!(related, related_products(chair));
    }

    #[test]
    fn related_art_stays_in_collection() {
        let current = find_art("PR3").unwrap();
        let related = related_art(&current);
        assert_eq!(related.len(), RELATED_LIMIT);
        assert!(related.iter().all(|item| matches!(item, CatalogItem::Print(p) if p.code != "PR3")));
    }

    #[test]
    fn sort_key_parsing_falls_back_to_featured() {
        assert_eq!("price_desc".parse::<SortKey>().unwrap(), SortKey::PriceDesc);
        assert_eq!("bogus".parse::<SortKey>().unwrap(), SortKey::Featured);
    }
}
