//! Handlers for product CRUD and the filtered listing.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use catalog_core::error::CoreError;
use catalog_core::types::DbId;
use catalog_db::models::product::{
    CreateProduct, ProductFilter, ProductListParams, UpdateProduct,
};
use catalog_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /product
///
/// Create a product from the request body. When the body carries a
/// `categoryId`, the category edge is created in the same transaction,
/// so a dangling id fails the whole request with 400 and no product row.
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> AppResult<impl IntoResponse> {
    let product = ProductRepo::create(&state.pool, &input).await?;

    tracing::info!(product_id = product.id, "Product created");

    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /product
///
/// List products matching the optional query criteria: `name` and `brand`
/// prefix matches, `category` label, `priceMin`/`priceMax` (both required
/// for the range to apply), `limit` and `skip`.
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ProductListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = ProductFilter::from(params);
    let products = ProductRepo::list(&state.pool, &filter).await?;

    Ok(Json(products))
}

/// GET /product/{productId}
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let product = ProductRepo::find_by_id(&state.pool, product_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: product_id,
        }))?;

    Ok(Json(product))
}

/// PUT /product/{productId}
///
/// Partial update: only fields present in the body overwrite existing
/// columns.
pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
    Json(input): Json<UpdateProduct>,
) -> AppResult<impl IntoResponse> {
    let product = ProductRepo::update(&state.pool, product_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: product_id,
        }))?;

    tracing::info!(product_id, "Product updated");

    Ok(Json(product))
}

/// DELETE /product/{productId}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ProductRepo::delete(&state.pool, product_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: product_id,
        }));
    }

    tracing::info!(product_id, "Product deleted");

    Ok(StatusCode::NO_CONTENT)
}
