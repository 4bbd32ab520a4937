//! HTTP-level integration tests for the product endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Product CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_product_returns_201_with_body(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/product",
        serde_json::json!({"name": "Shoe", "price": 50.0, "brand": "Nike"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Shoe");
    assert_eq!(json["price"], 50.0);
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_nonexistent_product_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/product/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_nonexistent_product_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/product/999999", serde_json::json!({"price": 1.0})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_nonexistent_product_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/product/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Regression: the delete handler must act on the id named in the path.
/// (An earlier rendition of this API read a mismatched parameter name and
/// could never match a row.)
#[sqlx::test(migrations = "../db/migrations")]
async fn delete_removes_the_product_named_in_the_path(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/product",
            serde_json::json!({"name": "Doomed", "price": 5.0}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/product/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/product/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// The full lifecycle scenario: create, read, partially update, delete.
#[sqlx::test(migrations = "../db/migrations")]
async fn product_lifecycle_scenario(pool: PgPool) {
    // POST /product -> 201 {id: X}
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/product",
        serde_json::json!({"name": "Shoe", "price": 50.0, "brand": "Nike"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_i64().unwrap();

    // GET /product/X -> 200 with the created fields
    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/product/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Shoe");
    assert_eq!(json["price"], 50.0);

    // PUT /product/X {price: 60} -> 200, name untouched
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/product/{id}"),
        serde_json::json!({"price": 60.0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["price"], 60.0);
    assert_eq!(json["name"], "Shoe");

    // DELETE /product/X -> 204
    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/product/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // GET afterward -> 404
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/product/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Listing filters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn listing_uses_the_summary_projection(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/product",
        serde_json::json!({"name": "Solo", "price": 10.0, "brand": "Acme", "image": "x.png"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, "/product").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let item = &json.as_array().unwrap()[0];
    assert_eq!(item["name"], "Solo");
    assert_eq!(item["brand"], "Acme");
    assert_eq!(item["image"], "x.png");
    // Timestamps are not part of the listing projection.
    assert!(item.get("created_at").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn price_filter_applies_only_with_both_bounds(pool: PgPool) {
    for (name, price) in [("cheap", 5.0), ("fit", 15.0), ("steep", 25.0)] {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/product",
            serde_json::json!({"name": name, "price": price}),
        )
        .await;
    }

    // Both bounds: inclusive range applies.
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/product?priceMin=10&priceMax=20").await).await;
    let names: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["fit"]);

    // A lone bound applies no price filter at all.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/product?priceMin=10").await).await;
    assert_eq!(json.as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn listing_honors_limit_and_skip(pool: PgPool) {
    for i in 0..4 {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/product",
            serde_json::json!({"name": format!("p{i}"), "price": 1.0}),
        )
        .await;
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/product?limit=2&skip=1").await).await;
    let names: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["p1", "p2"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn brand_filter_is_a_case_insensitive_prefix_match(pool: PgPool) {
    for (name, brand) in [("Runner", "Nike"), ("Sprinter", "Asics")] {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/product",
            serde_json::json!({"name": name, "price": 50.0, "brand": brand}),
        )
        .await;
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/product?brand=nik").await).await;
    let brands: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["brand"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(brands, vec!["Nike"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn name_filter_is_a_case_insensitive_prefix_match(pool: PgPool) {
    for name in ["Trail Shoe", "travel mug", "Backpack"] {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/product",
            serde_json::json!({"name": name, "price": 1.0}),
        )
        .await;
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/product?name=tra").await).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}
