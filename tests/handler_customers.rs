mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use httpmock::MockServer;
use pet_adoption::api::handlers::customer_list_handler;
use pet_adoption::domain::repositories::AdoptionRepository;
use pet_adoption::infrastructure::persistence::PgAdoptionRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_customer_list_empty(pool: PgPool) {
    let catalog = MockServer::start_async().await;
    let state = common::create_test_state(pool, &catalog);
    let app = Router::new()
        .route("/api/customers", get(customer_list_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/customers").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total"], 0);
    assert!(json["items"].as_array().unwrap().is_empty());
}

#[sqlx::test]
async fn test_customer_list_with_data(pool: PgPool) {
    let repo = PgAdoptionRepository::new(Arc::new(pool.clone()));
    repo.record_adoption(
        common::test_customer("1.000001alice@example.com", "alice@example.com", "alice"),
        1,
    )
    .await
    .unwrap();
    repo.record_adoption(
        common::test_customer("1.000002carol@example.com", "carol@example.com", "carol"),
        2,
    )
    .await
    .unwrap();

    let catalog = MockServer::start_async().await;
    let state = common::create_test_state(pool, &catalog);
    let app = Router::new()
        .route("/api/customers", get(customer_list_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/customers").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total"], 2);

    let items = json["items"].as_array().unwrap();
    assert_eq!(items[0]["firstname"], "alice");
    assert_eq!(items[0]["email"], "alice@example.com");
    assert_eq!(items[0]["city"], "bob city");
    assert_eq!(items[1]["firstname"], "carol");
}
