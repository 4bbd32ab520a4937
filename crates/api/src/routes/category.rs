//! Route definitions for categories, mounted at `/categories`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// ```text
/// POST   /        -> create_category
/// GET    /        -> list_categories
/// POST   /bulk    -> seed_categories
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(category::list_categories).post(category::create_category))
        .route("/bulk", post(category::seed_categories))
}
