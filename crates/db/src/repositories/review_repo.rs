//! Repository for the `reviews` table.
//!
//! Reviews are created, listed, and deleted per product; there is no
//! update operation in the exposed contract.

use sqlx::PgPool;

use catalog_core::types::DbId;

use crate::models::review::{CreateReview, Review};

/// Column list for `reviews` queries.
const COLUMNS: &str = "id, product_id, author, text, rating, created_at, updated_at";

/// Provides create/list/delete operations for reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a review tied to a product. A dangling `product_id` is
    /// refused by the foreign-key constraint.
    pub async fn create(
        pool: &PgPool,
        product_id: DbId,
        input: &CreateReview,
    ) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (product_id, author, text, rating) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(product_id)
            .bind(&input.author)
            .bind(&input.text)
            .bind(input.rating)
            .fetch_one(pool)
            .await
    }

    /// List all reviews for one product, in insertion order.
    pub async fn list_for_product(
        pool: &PgPool,
        product_id: DbId,
    ) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews WHERE product_id = $1 ORDER BY id");
        sqlx::query_as::<_, Review>(&query)
            .bind(product_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a review by its own ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, review_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(review_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
