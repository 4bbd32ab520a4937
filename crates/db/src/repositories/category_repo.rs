//! Repository for the `categories` table.

use sqlx::PgPool;

use catalog_core::types::DbId;

use crate::models::category::{Category, CreateCategory};

/// Column list for `categories` queries.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// The fixed seed set installed by `POST /categories/bulk`.
pub const SEED_NAMES: [&str; 4] = ["Sports", "Lifestyle", "Tech", "Wellness"];

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!("INSERT INTO categories (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// List every category, in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Find a category by exact name. Returns the oldest row when the
    /// name is duplicated (name uniqueness is intended but not enforced).
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE name = $1 ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Category>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Insert the fixed seed set in one batch and return the new ids in
    /// seed order. A one-time utility, not a general bulk insert.
    pub async fn seed_defaults(pool: &PgPool) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO categories (name) \
             SELECT * FROM UNNEST($1::text[]) \
             RETURNING id",
        )
        .bind(SEED_NAMES.map(String::from).to_vec())
        .fetch_all(pool)
        .await
    }
}
