#![allow(dead_code)]

use httpmock::prelude::*;
use httpmock::Mock;
use pet_adoption::config::CatalogConfig;
use pet_adoption::domain::entities::Customer;
use pet_adoption::infrastructure::persistence::PgAdoptionRepository;
use pet_adoption::infrastructure::petfinder::PetfinderClient;
use pet_adoption::state::AppState;
use serde_json::{Value, json};
use sqlx::PgPool;
use std::sync::Arc;

pub const TEST_TOKEN: &str = "test-token";

pub fn catalog_config(server: &MockServer) -> CatalogConfig {
    CatalogConfig::new(server.base_url(), "test-key", "test-secret")
}

pub fn catalog_client(server: &MockServer) -> PetfinderClient {
    PetfinderClient::new(catalog_config(server))
}

/// Token endpoint answering every exchange with [`TEST_TOKEN`].
pub async fn mock_token(server: &MockServer) -> Mock<'_> {
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/oauth2/token")
                .body_contains("grant_type=client_credentials");
            then.status(200).json_body(json!({
                "token_type": "Bearer",
                "expires_in": 3600,
                "access_token": TEST_TOKEN
            }));
        })
        .await
}

/// Detail endpoint for one pet.
pub async fn mock_detail<'a>(server: &'a MockServer, pet_id: i64, name: &str) -> Mock<'a> {
    let body = json!({ "animal": animal_json(pet_id, name, "Adult") });
    server
        .mock_async(move |when, then| {
            when.method(GET)
                .path(format!("/animals/{pet_id}"))
                .header("authorization", format!("Bearer {TEST_TOKEN}"));
            then.status(200).json_body(body);
        })
        .await
}

pub fn animal_json(id: i64, name: &str, age: &str) -> Value {
    json!({
        "id": id,
        "type": "Cat",
        "name": name,
        "age": age,
        "size": "Small",
        "status": "adoptable"
    })
}

pub fn create_test_state(pool: PgPool, server: &MockServer) -> AppState {
    let catalog = Arc::new(catalog_client(server));
    let repository = Arc::new(PgAdoptionRepository::new(Arc::new(pool)));
    AppState::new(catalog, repository)
}

pub fn test_customer(id: &str, email: &str, firstname: &str) -> Customer {
    Customer {
        id: id.to_string(),
        firstname: firstname.to_string(),
        lastname: "builder".to_string(),
        phone: Some("0123456789".to_string()),
        email: email.to_string(),
        address: Some("bob street".to_string()),
        city: Some("bob city".to_string()),
        state: Some("bob state".to_string()),
        zipcode: Some("bob zip".to_string()),
    }
}

pub async fn count_customers(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM customers")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_adoptions(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM adoptions")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn adopter_of(pool: &PgPool, pet_id: i64) -> Option<String> {
    sqlx::query_scalar("SELECT customer_id FROM adoptions WHERE pet_id = $1")
        .bind(pet_id)
        .fetch_optional(pool)
        .await
        .unwrap()
}
