//! Product/category association (join table) model.

use catalog_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `product_categories` table: one many-to-many edge.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProductCategory {
    pub id: DbId,
    pub product_id: DbId,
    pub category_id: DbId,
    pub created_at: Timestamp,
}
