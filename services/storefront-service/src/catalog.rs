use axum::{
    Json,
    extract::{Path, Query},
};
use is_api_types::{CategorySummary, PrintPriceResponse};
use is_catalog::query::{
    ListingFilter, Orientation, PaintingQuery, PrintQuery, ProductQuery, SortKey, related_art,
    related_products,
};
use is_catalog::{
    ArtCategory, CatalogItem, Painting, Print, PrintSelection, Product, find_art, find_category,
    find_print, products_in,
};
use serde::{Deserialize, Serialize};

use crate::{ApiResult, bad_request, not_found};

/// Listing parameters shared by every collection. Favorites live in the
/// browser, so there is no favorites filter here.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListingParams {
    q: Option<String>,
    min: Option<u64>,
    max: Option<u64>,
    sort: Option<String>,
    /// Comma-separated material names (furniture only).
    material: Option<String>,
    /// `portrait`, `landscape` or `square` (paintings only).
    orientation: Option<String>,
    /// Print category (prints only).
    category: Option<String>,
}

impl ListingParams {
    fn filter(&self) -> ListingFilter {
        ListingFilter {
            text: self.q.clone().unwrap_or_default(),
            min_price: self.min,
            max_price: self.max,
            only_favorites: false,
            sort: self
                .sort
                .as_deref()
                .and_then(|s| s.parse::<SortKey>().ok())
                .unwrap_or_default(),
        }
    }
}

fn no_favorites(_: &is_api_types::ItemKey) -> bool {
    false
}

pub(crate) async fn categories() -> Json<Vec<CategorySummary>> {
    let summaries = is_catalog::CATEGORIES
        .iter()
        .map(|category| CategorySummary {
            id: category.id.to_owned(),
            name: category.name.to_owned(),
            image: category.image.to_owned(),
            product_count: products_in(category.id).count(),
        })
        .collect();
    Json(summaries)
}

pub(crate) async fn category_products(
    Path(id): Path<String>,
    Query(params): Query<ListingParams>,
) -> ApiResult<Vec<&'static Product>> {
    if find_category(&id).is_none() {
        return Err(not_found("category not found"));
    }

    let materials = params
        .material
        .as_deref()
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default();

    let query = ProductQuery {
        filter: params.filter(),
        materials,
    };
    Ok(Json(query.apply(&id, no_favorites)))
}

#[derive(Debug, Serialize)]
pub(crate) struct ProductDetail {
    product: &'static Product,
    related: Vec<&'static Product>,
    inquiry: String,
}

pub(crate) async fn product_detail(Path(id): Path<String>) -> ApiResult<ProductDetail> {
    let id: u32 = id
        .parse()
        .map_err(|_| bad_request("product id must be numeric"))?;
    let product = is_catalog::find_product(id).ok_or_else(|| not_found("product not found"))?;

    Ok(Json(ProductDetail {
        product,
        related: related_products(product),
        inquiry: is_handoff::product_inquiry(product),
    }))
}

#[derive(Debug, Serialize)]
pub(crate) struct ArtCategoryEntry {
    #[serde(flatten)]
    category: &'static ArtCategory,
    count: usize,
    coming_soon: bool,
}

pub(crate) async fn art_categories() -> Json<Vec<ArtCategoryEntry>> {
    Json(
        is_catalog::ART_CATEGORIES
            .iter()
            .map(|category| ArtCategoryEntry {
                category,
                count: category.count(),
                coming_soon: category.coming_soon(),
            })
            .collect(),
    )
}

pub(crate) async fn paintings(Query(params): Query<ListingParams>) -> Json<Vec<&'static Painting>> {
    let query = PaintingQuery {
        filter: params.filter(),
        orientation: params
            .orientation
            .as_deref()
            .and_then(|o| o.parse::<Orientation>().ok())
            .unwrap_or_default(),
    };
    Json(query.apply(no_favorites))
}

pub(crate) async fn prints(Query(params): Query<ListingParams>) -> Json<Vec<&'static Print>> {
    let query = PrintQuery {
        filter: params.filter(),
        category: params
            .category
            .clone()
            .filter(|c| !c.trim().is_empty() && c != "All"),
    };
    Json(query.apply(no_favorites))
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", content = "item", rename_all = "snake_case")]
pub(crate) enum ArtPiece {
    Painting(&'static Painting),
    Print(&'static Print),
}

impl ArtPiece {
    fn from_item(item: CatalogItem) -> Option<Self> {
        match item {
            CatalogItem::Painting(p) => Some(ArtPiece::Painting(p)),
            CatalogItem::Print(p) => Some(ArtPiece::Print(p)),
            CatalogItem::Product(_) => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ArtDetail {
    #[serde(flatten)]
    piece: ArtPiece,
    related: Vec<ArtPiece>,
    /// Inquiry text for the default variant.
    inquiry: String,
}

pub(crate) async fn art_detail(Path(code): Path<String>) -> ApiResult<ArtDetail> {
    let item = find_art(&code).ok_or_else(|| not_found("artwork not found"))?;
    let inquiry = match item {
        CatalogItem::Painting(p) => is_handoff::painting_inquiry(p),
        CatalogItem::Print(p) => is_handoff::print_inquiry(p, &PrintSelection::default()),
        CatalogItem::Product(p) => is_handoff::product_inquiry(p),
    };
    let piece = ArtPiece::from_item(item).ok_or_else(|| not_found("artwork not found"))?;
    let related = related_art(&item)
        .into_iter()
        .filter_map(ArtPiece::from_item)
        .collect();

    Ok(Json(ArtDetail {
        piece,
        related,
        inquiry,
    }))
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PriceParams {
    size: Option<String>,
    glass: Option<String>,
    frame: Option<String>,
}

pub(crate) async fn print_price(
    Path(code): Path<String>,
    Query(params): Query<PriceParams>,
) -> ApiResult<PrintPriceResponse> {
    let print = find_print(&code).ok_or_else(|| not_found("print not found"))?;
    let selection = PrintSelection::parse(
        params.size.as_deref().unwrap_or_default(),
        params.glass.as_deref().unwrap_or_default(),
        params.frame.as_deref().unwrap_or_default(),
    )
    .map_err(|err| bad_request(&err.to_string()))?;

    Ok(Json(PrintPriceResponse {
        code: print.code.to_owned(),
        size: selection.size.id.to_owned(),
        size_label: selection.size.label.to_owned(),
        glass: selection.glass.id().to_owned(),
        frame: selection.frame.label().to_owned(),
        price: selection.price(),
    }))
}

#[cfg(test)]
mod tests {
    use crate::test_support::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn categories_list_every_category() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let (status, body) = get_json(test_app(dir.path()), "/catalog/categories").await?;
        assert_eq!(status, StatusCode::OK);
        let list = body.as_array().cloned().unwrap_or_default();
        assert_eq!(list.len(), is_catalog::CATEGORIES.len());
        assert!(list.iter().all(|c| c["product_count"].as_u64() > Some(0)));
        Ok(())
    }

    #[tokio::test]
    async fn category_products_sort_and_404() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let (status, body) = get_json(
            test_app(dir.path()),
            "/catalog/categories/tv-units/products?sort=price_desc",
        )
        .await?;
        assert_eq!(status, StatusCode::OK);
        let prices: Vec<u64> = body
            .as_array()
            .map(|a| a.iter().filter_map(|p| p["price"].as_u64()).collect())
            .unwrap_or_default();
        assert!(!prices.is_empty());
        assert!(prices.windows(2).all(|w| w[0] >= w[1]));

        let (status, body) =
            get_json(test_app(dir.path()), "/catalog/categories/garages/products").await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "category not found");
        Ok(())
    }

    #[tokio::test]
    async fn product_detail_includes_related() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let (status, body) = get_json(test_app(dir.path()), "/catalog/products/3001").await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["product"]["id"], 3001);
        assert_eq!(body["related"].as_array().map(Vec::len), Some(4));

        let (status, _) = get_json(test_app(dir.path()), "/catalog/products/abc").await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, _) = get_json(test_app(dir.path()), "/catalog/products/9999").await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        Ok(())
    }

    #[tokio::test]
    async fn paintings_filter_by_orientation() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let (status, body) =
            get_json(test_app(dir.path()), "/catalog/paintings?orientation=landscape").await?;
        assert_eq!(status, StatusCode::OK);
        let items = body.as_array().cloned().unwrap_or_default();
        assert!(!items.is_empty());
        assert!(items
            .iter()
            .all(|p| p["width"].as_u64() > p["height"].as_u64()));
        Ok(())
    }

    #[tokio::test]
    async fn art_detail_is_case_insensitive() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let (status, body) = get_json(test_app(dir.path()), "/catalog/art/pr3").await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["kind"], "print");
        assert_eq!(body["item"]["code"], "PR3");
        assert!(body["related"]
            .as_array()
            .is_some_and(|r| r.iter().all(|a| a["kind"] == "print")));
        Ok(())
    }

    #[tokio::test]
    async fn print_price_uses_the_size_table() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let (status, body) = get_json(
            test_app(dir.path()),
            "/catalog/prints/PR1/price?size=a2&glass=anti-reflection&frame=walnut",
        )
        .await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["price"], 49);
        assert_eq!(body["frame"], "Walnut");

        let (status, _) =
            get_json(test_app(dir.path()), "/catalog/prints/PR1/price?size=a0").await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, _) = get_json(test_app(dir.path()), "/catalog/prints/OP3/price").await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        Ok(())
    }
}
