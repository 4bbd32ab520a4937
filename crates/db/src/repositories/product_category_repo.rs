//! Repository for the `product_categories` join table.
//!
//! Edges are created and destroyed directly by dedicated endpoints, never
//! cascaded. Referential integrity is the database's job: inserting an
//! edge against a missing product or category fails with a foreign-key
//! violation that the API layer maps to a validation error.

use sqlx::PgPool;

use catalog_core::types::DbId;

use crate::models::product_category::ProductCategory;

/// Column list for `product_categories` queries.
const COLUMNS: &str = "id, product_id, category_id, created_at";

/// Provides create/delete operations for product-category edges.
pub struct ProductCategoryRepo;

impl ProductCategoryRepo {
    /// Insert a new edge between a product and a category.
    pub async fn create(
        pool: &PgPool,
        product_id: DbId,
        category_id: DbId,
    ) -> Result<ProductCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO product_categories (product_id, category_id) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductCategory>(&query)
            .bind(product_id)
            .bind(category_id)
            .fetch_one(pool)
            .await
    }

    /// Delete the single edge matching the composite identifier.
    ///
    /// Returns `true` if an edge was deleted.
    pub async fn delete(
        pool: &PgPool,
        product_id: DbId,
        category_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM product_categories WHERE product_id = $1 AND category_id = $2")
                .bind(product_id)
                .bind(category_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// IDs of all products holding an edge to the given category.
    ///
    /// Backs the in-memory restriction applied by the product listing's
    /// category filter.
    pub async fn product_ids_for_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT product_id FROM product_categories WHERE category_id = $1",
        )
        .bind(category_id)
        .fetch_all(pool)
        .await
    }
}
