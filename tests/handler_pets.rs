mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use httpmock::prelude::*;
use pet_adoption::api::handlers::pet_detail_handler;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test]
async fn test_pet_detail_success(pool: PgPool) {
    let catalog = MockServer::start_async().await;
    common::mock_token(&catalog).await;
    common::mock_detail(&catalog, 1234567, "Fred").await;

    let state = common::create_test_state(pool, &catalog);
    let app = Router::new()
        .route("/api/pets/{pet_id}", get(pet_detail_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/pets/1234567").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], 1234567);
    assert_eq!(json["name"], "Fred");
    assert_eq!(json["status"], "adoptable");
}

#[sqlx::test]
async fn test_pet_detail_not_found(pool: PgPool) {
    let catalog = MockServer::start_async().await;
    common::mock_token(&catalog).await;
    catalog
        .mock_async(|when, then| {
            when.method(GET).path("/animals/99");
            then.status(404).json_body(json!({ "title": "Not Found" }));
        })
        .await;

    let state = common::create_test_state(pool, &catalog);
    let app = Router::new()
        .route("/api/pets/{pet_id}", get(pet_detail_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/pets/99").await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_pet_detail_missing_animal_field(pool: PgPool) {
    let catalog = MockServer::start_async().await;
    common::mock_token(&catalog).await;
    catalog
        .mock_async(|when, then| {
            when.method(GET).path("/animals/5");
            then.status(200).json_body(json!({ "unexpected": true }));
        })
        .await;

    let state = common::create_test_state(pool, &catalog);
    let app = Router::new()
        .route("/api/pets/{pet_id}", get(pet_detail_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/pets/5").await;

    response.assert_status(StatusCode::BAD_GATEWAY);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "catalog_missing_field");
    assert_eq!(json["error"]["details"]["field"], "animal");
}
