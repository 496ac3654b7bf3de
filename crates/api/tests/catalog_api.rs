//! Integration tests for the catalog endpoints (categories, destinations,
//! packages, and package child collections).

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use common::{body_json, create_resource, delete, get, send_json};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

async fn seed_category(app: &Router) -> serde_json::Value {
    create_resource(
        app.clone(),
        "/api/v1/categories",
        json!({"name": "Beach", "slug": "beach", "icon": "umbrella"}),
    )
    .await
}

async fn seed_destination(app: &Router, category_id: &serde_json::Value) -> serde_json::Value {
    create_resource(
        app.clone(),
        "/api/v1/destinations",
        json!({
            "slug": "zanzibar",
            "name": "Zanzibar",
            "country": "Tanzania",
            "starting_price": "650.00",
            "category_id": category_id,
        }),
    )
    .await
}

async fn seed_package(app: &Router) -> serde_json::Value {
    let category = seed_category(app).await;
    let destination = seed_destination(app, &category["id"]).await;

    create_resource(
        app.clone(),
        "/api/v1/packages",
        json!({
            "slug": "zanzibar-escape",
            "title": "Zanzibar Beach Escape",
            "destination_id": destination["id"],
            "category_id": category["id"],
            "price": "899.00",
            "featured": true,
        }),
    )
    .await
}

// ---------------------------------------------------------------------------
// Test: category CRUD round trip
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn category_crud_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool);
    let category = seed_category(&app).await;
    let id = category["id"].as_i64().unwrap();

    let response = get(app.clone(), &format!("/api/v1/categories/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["name"], "Beach");
    assert_eq!(fetched["icon"], "umbrella");

    let response = send_json(
        app.clone(),
        Method::PUT,
        &format!("/api/v1/categories/{id}"),
        json!({"description": "Coastal getaways"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    // Partial update: untouched fields survive.
    assert_eq!(updated["name"], "Beach");
    assert_eq!(updated["description"], "Coastal getaways");

    let response = delete(app.clone(), &format!("/api/v1/categories/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/api/v1/categories/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: mutations accept a caller identity header
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn mutation_with_user_id_header_succeeds(pool: PgPool) {
    let app = common::build_test_app(pool);

    // Catalog mutations attribute the caller in logs; the extractor must
    // accept both an explicit x-user-id header and its absence.
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/categories")
        .header("content-type", "application/json")
        .header("x-user-id", "admin_42")
        .body(Body::from(
            json!({"name": "Adventure", "slug": "adventure"}).to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let category = body_json(response).await;
    assert_eq!(category["slug"], "adventure");
}

// ---------------------------------------------------------------------------
// Test: duplicate slug returns 409
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_category_slug_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed_category(&app).await;

    let response = send_json(
        app,
        Method::POST,
        "/api/v1/categories",
        json!({"name": "Beaches", "slug": "beach"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

// ---------------------------------------------------------------------------
// Test: malformed slug is rejected with 400
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_slug_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = send_json(
        app,
        Method::POST,
        "/api/v1/categories",
        json!({"name": "Beach", "slug": "Not A Slug!"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Test: destination reads back with its category joined in
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn destination_includes_joined_category(pool: PgPool) {
    let app = common::build_test_app(pool);
    let category = seed_category(&app).await;
    let destination = seed_destination(&app, &category["id"]).await;

    assert_eq!(destination["category"], "Beach");
    assert_eq!(destination["category_slug"], "beach");
    // Prices stay decimal strings end to end.
    assert_eq!(destination["starting_price"], "650.00");
}

// ---------------------------------------------------------------------------
// Test: destination with a nonexistent category returns 400
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn destination_with_missing_category_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = send_json(
        app,
        Method::POST,
        "/api/v1/destinations",
        json!({"slug": "nowhere", "name": "Nowhere", "category_id": 999_999}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: featured listing only returns featured packages
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn featured_listing_filters_packages(pool: PgPool) {
    let app = common::build_test_app(pool);
    let package = seed_package(&app).await;

    create_resource(
        app.clone(),
        "/api/v1/packages",
        json!({
            "slug": "zanzibar-budget",
            "title": "Zanzibar on a Budget",
            "destination_id": package["destination_id"],
            "category_id": package["category_id"],
            "price": "450.00",
        }),
    )
    .await;

    let response = get(app, "/api/v1/packages/featured").await;
    assert_eq!(response.status(), StatusCode::OK);

    let list = body_json(response).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["slug"], "zanzibar-escape");
}

// ---------------------------------------------------------------------------
// Test: by-slug detail aggregates all child collections
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn package_detail_by_slug_aggregates_children(pool: PgPool) {
    let app = common::build_test_app(pool);
    let package = seed_package(&app).await;
    let package_id = package["id"].as_i64().unwrap();

    create_resource(
        app.clone(),
        &format!("/api/v1/packages/{package_id}/highlights"),
        json!({"value": "Sunset dhow cruise"}),
    )
    .await;
    create_resource(
        app.clone(),
        &format!("/api/v1/packages/{package_id}/itinerary"),
        json!({"day_number": 1, "title": "Arrival in Stone Town"}),
    )
    .await;

    let response = get(app, "/api/v1/packages/by-slug/zanzibar-escape").await;
    assert_eq!(response.status(), StatusCode::OK);

    let detail = body_json(response).await;
    // Flattened package fields plus child arrays.
    assert_eq!(detail["title"], "Zanzibar Beach Escape");
    assert_eq!(detail["highlights"][0]["value"], "Sunset dhow cruise");
    assert_eq!(detail["itinerary"][0]["day_number"], 1);
    assert_eq!(detail["gallery"].as_array().unwrap().len(), 0);
    assert_eq!(detail["reviews"].as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// Test: detail for an unknown slug returns 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn package_detail_for_unknown_slug_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/packages/by-slug/no-such-package").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: child items are reachable at their top-level routes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn child_item_top_level_routes_work(pool: PgPool) {
    let app = common::build_test_app(pool);
    let package = seed_package(&app).await;
    let package_id = package["id"].as_i64().unwrap();

    let item = create_resource(
        app.clone(),
        &format!("/api/v1/packages/{package_id}/inclusions"),
        json!({"value": "Airport transfers"}),
    )
    .await;
    let item_id = item["id"].as_i64().unwrap();

    let response = send_json(
        app.clone(),
        Method::PUT,
        &format!("/api/v1/inclusions/{item_id}"),
        json!({"value": "All transfers"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["value"], "All transfers");

    let response = delete(app.clone(), &format!("/api/v1/inclusions/{item_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/api/v1/inclusions/{item_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: empty-value child item is rejected with 400
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_child_item_value_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let package = seed_package(&app).await;
    let package_id = package["id"].as_i64().unwrap();

    let response = send_json(
        app,
        Method::POST,
        &format!("/api/v1/packages/{package_id}/gallery"),
        json!({"value": "   "}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: review rating outside 1..=5 is rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn out_of_range_review_rating_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let package = seed_package(&app).await;
    let package_id = package["id"].as_i64().unwrap();

    let response = send_json(
        app,
        Method::POST,
        &format!("/api/v1/packages/{package_id}/reviews"),
        json!({"user_name": "Amara", "rating": 6}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
