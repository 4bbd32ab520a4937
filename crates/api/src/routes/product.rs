//! Route definitions for products, reviews, and category associations,
//! mounted at `/product`.
//!
//! The static `/reviews` segment takes priority over the `{categoryId}`
//! capture at the same depth, so review routes and association routes
//! coexist under one product subtree.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{product, product_category, review};
use crate::state::AppState;

/// ```text
/// POST   /                                    -> create_product
/// GET    /                                    -> list_products
/// GET    /{productId}                         -> get_product
/// PUT    /{productId}                         -> update_product
/// DELETE /{productId}                         -> delete_product
/// POST   /{productId}/reviews                 -> create_review
/// GET    /{productId}/reviews                 -> list_reviews
/// DELETE /{productId}/reviews/{reviewId}      -> delete_review
/// POST   /{productId}/{categoryId}            -> attach_category
/// DELETE /{productId}/{categoryId}            -> detach_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(product::list_products).post(product::create_product))
        .route(
            "/{product_id}",
            get(product::get_product)
                .put(product::update_product)
                .delete(product::delete_product),
        )
        .route(
            "/{product_id}/reviews",
            get(review::list_reviews).post(review::create_review),
        )
        .route(
            "/{product_id}/reviews/{review_id}",
            delete(review::delete_review),
        )
        .route(
            "/{product_id}/{category_id}",
            post(product_category::attach_category).delete(product_category::detach_category),
        )
}
