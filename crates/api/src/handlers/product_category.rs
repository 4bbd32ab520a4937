//! Handlers for the product/category association endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use catalog_core::error::CoreError;
use catalog_core::types::DbId;
use catalog_db::repositories::ProductCategoryRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /product/{productId}/{categoryId}
///
/// Create the join row. Either identifier referencing a missing row is a
/// foreign-key violation, which surfaces as 400.
pub async fn attach_category(
    State(state): State<AppState>,
    Path((product_id, category_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let edge = ProductCategoryRepo::create(&state.pool, product_id, category_id).await?;

    tracing::info!(product_id, category_id, "Category attached to product");

    Ok((StatusCode::CREATED, Json(edge)))
}

/// DELETE /product/{productId}/{categoryId}
pub async fn detach_category(
    State(state): State<AppState>,
    Path((product_id, category_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let deleted = ProductCategoryRepo::delete(&state.pool, product_id, category_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "ProductCategory",
            id: product_id,
        }));
    }

    tracing::info!(product_id, category_id, "Category detached from product");

    Ok(StatusCode::NO_CONTENT)
}
