//! Handlers for category creation, listing, and seeding.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use catalog_db::models::category::CreateCategory;
use catalog_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /categories
///
/// Create a category; responds with `{ "id": n }` only.
pub async fn create_category(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(category_id = category.id, "Category created");

    Ok((StatusCode::CREATED, Json(json!({ "id": category.id }))))
}

/// GET /categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list_all(&state.pool).await?;

    Ok(Json(categories))
}

/// POST /categories/bulk
///
/// Install the fixed seed set and respond with the new ids. A one-time
/// seeding utility, not a general bulk insert.
pub async fn seed_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let ids = CategoryRepo::seed_defaults(&state.pool).await?;

    tracing::info!(count = ids.len(), "Seed categories installed");

    Ok(Json(ids))
}
