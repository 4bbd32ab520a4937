//! Product models, DTOs, and the listing filter.

use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub category: Option<String>,
    pub price: f64,
    pub brand: Option<String>,
    pub image: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Projection returned by the listing endpoint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProductSummary {
    pub id: DbId,
    pub name: String,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub price: f64,
    pub image: Option<String>,
}

/// DTO for creating a new product.
///
/// `category_id`, when present, additionally creates a
/// `product_categories` edge in the same transaction as the insert.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub category: Option<String>,
    pub price: f64,
    pub brand: Option<String>,
    pub image: Option<String>,
    #[serde(rename = "categoryId")]
    pub category_id: Option<DbId>,
}

/// DTO for updating an existing product. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub brand: Option<String>,
    pub image: Option<String>,
}

/// Query-string parameters for `GET /product`, with the public parameter
/// names the endpoint has always exposed.
#[derive(Debug, Default, Deserialize)]
pub struct ProductListParams {
    pub name: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "priceMin")]
    pub price_min: Option<f64>,
    #[serde(rename = "priceMax")]
    pub price_max: Option<f64>,
    pub brand: Option<String>,
    pub limit: Option<i64>,
    pub skip: Option<i64>,
}

/// Resolved listing filter with independently nullable criteria.
///
/// Built from [`ProductListParams`] and translated into SQL predicates by
/// `ProductRepo::list`. The price range is only applied when both bounds
/// are supplied; a lone bound is ignored.
#[derive(Debug, Clone)]
pub struct ProductFilter {
    /// Case-insensitive prefix match on `name`.
    pub name_prefix: Option<String>,
    /// Exact match on the informal `category` label column. Also resolved
    /// to a `categories` row for the relational edge restriction.
    pub category_label: Option<String>,
    /// Case-insensitive prefix match on `brand`.
    pub brand_prefix: Option<String>,
    /// Inclusive `(min, max)` price bounds.
    pub price_range: Option<(f64, f64)>,
    pub limit: i64,
    pub offset: i64,
}

/// Default page size for product listing.
pub const DEFAULT_LIMIT: i64 = 10;

impl From<ProductListParams> for ProductFilter {
    fn from(params: ProductListParams) -> Self {
        let price_range = match (params.price_min, params.price_max) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        };

        ProductFilter {
            name_prefix: params.name,
            category_label: params.category,
            brand_prefix: params.brand,
            price_range,
            limit: params.limit.unwrap_or(DEFAULT_LIMIT),
            offset: params.skip.unwrap_or(0),
        }
    }
}
