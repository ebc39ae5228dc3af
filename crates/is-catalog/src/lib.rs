//! Static InStyle catalog: furniture, art collections and print variants.
//!
//! All data is `&'static` and never mutates at runtime. Lookups return
//! borrowed references into the tables.

pub mod art;
pub mod products;
pub mod query;
pub mod variants;

use is_api_types::{ItemKey, ItemKind, ItemSummary};

pub use art::{ART_CATEGORIES, ArtCategory, PAINTINGS, PRINTS, Painting, Print};
pub use products::{CATEGORIES, Category, PRODUCTS, Product};
pub use variants::{FrameColor, GlassFinish, PRINT_SIZES, PrintSelection, PrintSize, print_price, print_size};

/// Category label stored on cart lines for paintings.
pub const PAINTING_CATEGORY: &str = "Oil Painting";
pub const PRINT_CATEGORY: &str = "Print";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown print size `{0}`")]
    UnknownSize(String),
    #[error("unknown glass finish `{0}`")]
    UnknownGlass(String),
    #[error("unknown frame colour `{0}`")]
    UnknownFrame(String),
    #[error("no catalog item `{0}`")]
    UnknownItem(String),
    #[error("`{0}` is available on inquiry only")]
    NotPurchasable(String),
}

/// A resolved catalog entry of any kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogItem {
    Product(&'static Product),
    Painting(&'static Painting),
    Print(&'static Print),
}

impl CatalogItem {
    pub fn key(&self) -> ItemKey {
        match self {
            CatalogItem::Product(p) => ItemKey::product(p.id),
            CatalogItem::Painting(p) => ItemKey::painting(p.code),
            CatalogItem::Print(p) => ItemKey::print(p.code),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CatalogItem::Product(p) => p.name,
            CatalogItem::Painting(p) => p.title,
            CatalogItem::Print(p) => p.title,
        }
    }

    pub fn price(&self) -> u64 {
        match self {
            CatalogItem::Product(p) => p.price,
            CatalogItem::Painting(p) => p.price,
            CatalogItem::Print(p) => p.price,
        }
    }

    pub fn image(&self) -> &'static str {
        match self {
            CatalogItem::Product(p) => p.image,
            CatalogItem::Painting(p) => p.image,
            CatalogItem::Print(p) => p.image,
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            CatalogItem::Product(p) => p.category,
            CatalogItem::Painting(_) => PAINTING_CATEGORY,
            CatalogItem::Print(_) => PRINT_CATEGORY,
        }
    }

    /// Only furniture and original paintings go into the cart; prints are
    /// ordered through an inquiry.
    pub fn purchasable(&self) -> bool {
        !matches!(self, CatalogItem::Print(_))
    }

    pub fn summary(&self) -> ItemSummary {
        ItemSummary {
            key: self.key(),
            name: self.name().to_owned(),
            price: self.price(),
            image: self.image().to_owned(),
            category: self.category().to_owned(),
        }
    }
}

pub fn find_category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

pub fn products_in(category_id: &str) -> impl Iterator<Item = &'static Product> + '_ {
    PRODUCTS.iter().filter(move |p| p.category_id == category_id)
}

pub fn find_product(id: u32) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

pub fn find_painting(code: &str) -> Option<&'static Painting> {
    PAINTINGS.iter().find(|p| p.code.eq_ignore_ascii_case(code.trim()))
}

pub fn find_print(code: &str) -> Option<&'static Print> {
    PRINTS.iter().find(|p| p.code.eq_ignore_ascii_case(code.trim()))
}

/// Look up an artwork by code in either collection.
pub fn find_art(code: &str) -> Option<CatalogItem> {
    find_painting(code)
        .map(CatalogItem::Painting)
        .or_else(|| find_print(code).map(CatalogItem::Print))
}

pub fn resolve(key: &ItemKey) -> Option<CatalogItem> {
    match key.kind() {
        ItemKind::Product => key.product_id().and_then(find_product).map(CatalogItem::Product),
        ItemKind::Painting => find_painting(key.code()).map(CatalogItem::Painting),
        ItemKind::Print => find_print(key.code()).map(CatalogItem::Print),
    }
}

/// Summary of an item that may go into the cart.
pub fn purchasable_summary(key: &ItemKey) -> Result<ItemSummary, CatalogError> {
    let item = resolve(key).ok_or_else(|| CatalogError::UnknownItem(key.to_string()))?;
    if !item.purchasable() {
        return Err(CatalogError::NotPurchasable(key.to_string()));
    }
    Ok(item.summary())
}

pub fn summary(key: &ItemKey) -> Result<ItemSummary, CatalogError> {
    resolve(key)
        .map(|item| item.summary())
        .ok_or_else(|| CatalogError::UnknownItem(key.to_string()))
}
