//! Handlers for per-product reviews.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use catalog_core::error::CoreError;
use catalog_core::types::DbId;
use catalog_db::models::review::CreateReview;
use catalog_db::repositories::ReviewRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /product/{productId}/reviews
///
/// A dangling product id surfaces as a 400 via the foreign-key
/// constraint; no existence check happens here.
pub async fn create_review(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
    Json(input): Json<CreateReview>,
) -> AppResult<impl IntoResponse> {
    let review = ReviewRepo::create(&state.pool, product_id, &input).await?;

    tracing::info!(review_id = review.id, product_id, "Review created");

    Ok((StatusCode::CREATED, Json(review)))
}

/// GET /product/{productId}/reviews
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let reviews = ReviewRepo::list_for_product(&state.pool, product_id).await?;

    Ok(Json(reviews))
}

/// DELETE /product/{productId}/reviews/{reviewId}
///
/// Deletes by the review id declared in the path.
pub async fn delete_review(
    State(state): State<AppState>,
    Path((product_id, review_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let deleted = ReviewRepo::delete(&state.pool, review_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id: review_id,
        }));
    }

    tracing::info!(review_id, product_id, "Review deleted");

    Ok(StatusCode::NO_CONTENT)
}
