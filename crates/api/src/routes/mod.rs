pub mod category;
pub mod health;
pub mod product;

use axum::Router;

use crate::state::AppState;

/// Build the catalog route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                                      list, create
/// /categories/bulk                                 install the fixed seed set
///
/// /product                                         list (filtered), create
/// /product/{productId}                             get, update, delete
/// /product/{productId}/reviews                     list, create
/// /product/{productId}/reviews/{reviewId}          delete
/// /product/{productId}/{categoryId}                attach, detach (join table)
/// ```
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", category::router())
        .nest("/product", product::router())
}
