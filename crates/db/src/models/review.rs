//! Review models and DTOs.

use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub product_id: DbId,
    pub author: String,
    pub text: String,
    pub rating: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new review. The product id comes from the path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReview {
    pub author: String,
    pub text: String,
    pub rating: i32,
}
