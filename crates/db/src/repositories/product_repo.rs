//! Repository for the `products` table.
//!
//! Provides product CRUD plus the filtered listing. Creation optionally
//! attaches the product to a category in the same transaction so a failed
//! edge insert never leaves an orphan product behind.

use sqlx::PgPool;

use catalog_core::types::DbId;

use crate::models::product::{CreateProduct, Product, ProductFilter, ProductSummary, UpdateProduct};
use crate::repositories::{CategoryRepo, ProductCategoryRepo};

/// Column list for `products` queries.
const COLUMNS: &str = "id, name, category, price, brand, image, created_at, updated_at";

/// Column list for the listing projection.
const SUMMARY_COLUMNS: &str = "id, name, category, brand, price, image";

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product.
    ///
    /// When `input.category_id` is set, the `product_categories` edge is
    /// created in the same transaction; a foreign-key violation on the
    /// edge rolls the product insert back as well.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO products (name, category, price, brand, image) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        let product = sqlx::query_as::<_, Product>(&insert_query)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.price)
            .bind(&input.brand)
            .bind(&input.image)
            .fetch_one(&mut *tx)
            .await?;

        if let Some(category_id) = input.category_id {
            sqlx::query(
                "INSERT INTO product_categories (product_id, category_id) VALUES ($1, $2)",
            )
            .bind(product.id)
            .bind(category_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(product)
    }

    /// Find a product by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List products matching the given filter, in storage order.
    ///
    /// Prefix matches are case-insensitive (`ILIKE 'prefix%'`), the price
    /// range is inclusive on both ends, and the label criterion applies
    /// both as an equality predicate on the `category` column and as a
    /// relational restriction: the label is resolved to its `categories`
    /// row and the page is narrowed, in memory, to products holding a
    /// `product_categories` edge to it. A label that resolves to no
    /// category yields an empty list.
    pub async fn list(
        pool: &PgPool,
        filter: &ProductFilter,
    ) -> Result<Vec<ProductSummary>, sqlx::Error> {
        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if filter.name_prefix.is_some() {
            conditions.push(format!("name ILIKE ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.category_label.is_some() {
            conditions.push(format!("category = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.brand_prefix.is_some() {
            conditions.push(format!("brand ILIKE ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.price_range.is_some() {
            conditions.push(format!("price BETWEEN ${bind_idx} AND ${next}", next = bind_idx + 1));
            bind_idx += 2;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM products \
             {where_clause} \
             ORDER BY id \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            next_idx = bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, ProductSummary>(&query);

        // Bind dynamic parameters in order.
        if let Some(ref prefix) = filter.name_prefix {
            q = q.bind(format!("{prefix}%"));
        }
        if let Some(ref label) = filter.category_label {
            q = q.bind(label);
        }
        if let Some(ref prefix) = filter.brand_prefix {
            q = q.bind(format!("{prefix}%"));
        }
        if let Some((min, max)) = filter.price_range {
            q = q.bind(min).bind(max);
        }

        let mut products = q.bind(filter.limit).bind(filter.offset).fetch_all(pool).await?;

        if let Some(ref label) = filter.category_label {
            products = Self::restrict_to_category_edges(pool, products, label).await?;
        }

        Ok(products)
    }

    /// Narrow a listed page to products with an edge to the named category.
    async fn restrict_to_category_edges(
        pool: &PgPool,
        products: Vec<ProductSummary>,
        label: &str,
    ) -> Result<Vec<ProductSummary>, sqlx::Error> {
        let Some(category) = CategoryRepo::find_by_name(pool, label).await? else {
            return Ok(Vec::new());
        };

        let edge_ids = ProductCategoryRepo::product_ids_for_category(pool, category.id).await?;
        Ok(products
            .into_iter()
            .filter(|p| edge_ids.contains(&p.id))
            .collect())
    }

    /// Update a product. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET \
                 name = COALESCE($2, name), \
                 category = COALESCE($3, category), \
                 price = COALESCE($4, price), \
                 brand = COALESCE($5, brand), \
                 image = COALESCE($6, image), \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.price)
            .bind(&input.brand)
            .bind(&input.image)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product by ID.
    ///
    /// Returns `true` if a row was deleted. Products still referenced by
    /// reviews or category edges are refused by the database's foreign-key
    /// constraints.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
