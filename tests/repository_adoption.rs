mod common;

use chrono::{TimeZone, Utc};
use pet_adoption::domain::entities::NewCustomer;
use pet_adoption::domain::repositories::AdoptionRepository;
use pet_adoption::error::AppError;
use pet_adoption::infrastructure::persistence::PgAdoptionRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_record_adoption_new_customer(pool: PgPool) {
    let repo = PgAdoptionRepository::new(Arc::new(pool.clone()));
    let customer = common::test_customer(
        "1700000000.000001bob@example.com",
        "bob@example.com",
        "bob",
    );

    let result = repo.record_adoption(customer, 1234567).await;

    assert!(result.is_ok());
    let customer_id = result.unwrap();
    assert_eq!(customer_id, "1700000000.000001bob@example.com");
    assert_eq!(common::count_customers(&pool).await, 1);
    assert_eq!(
        common::adopter_of(&pool, 1234567).await.as_deref(),
        Some("1700000000.000001bob@example.com")
    );
}

#[sqlx::test]
async fn test_record_adoption_reuses_customer_by_email(pool: PgPool) {
    let repo = PgAdoptionRepository::new(Arc::new(pool.clone()));

    let first = common::test_customer("1.000001bob@example.com", "bob@example.com", "bob");
    let second = common::test_customer("2.000002bob@example.com", "bob@example.com", "robert");

    let first_id = repo.record_adoption(first, 1).await.unwrap();
    let second_id = repo.record_adoption(second, 2).await.unwrap();

    assert_eq!(first_id, "1.000001bob@example.com");
    assert_eq!(second_id, first_id);
    assert_eq!(common::count_customers(&pool).await, 1);
    assert_eq!(common::count_adoptions(&pool).await, 2);
    assert_eq!(common::adopter_of(&pool, 2).await.as_deref(), Some("1.000001bob@example.com"));

    // Contact details from the later submission are not applied.
    let customers = repo.list_customers().await.unwrap();
    assert_eq!(customers[0].firstname, "bob");
}

#[sqlx::test]
async fn test_record_adoption_distinct_emails(pool: PgPool) {
    let repo = PgAdoptionRepository::new(Arc::new(pool.clone()));

    let alice = common::test_customer("1.000001alice@example.com", "alice@example.com", "alice");
    let carol = common::test_customer("1.000002carol@example.com", "carol@example.com", "carol");

    let alice_id = repo.record_adoption(alice, 10).await.unwrap();
    let carol_id = repo.record_adoption(carol, 11).await.unwrap();

    assert_ne!(alice_id, carol_id);
    assert_eq!(common::count_customers(&pool).await, 2);
    assert_eq!(common::count_adoptions(&pool).await, 2);
}

#[sqlx::test]
async fn test_record_adoption_duplicate_pet_rolls_back(pool: PgPool) {
    let repo = PgAdoptionRepository::new(Arc::new(pool.clone()));

    let alice = common::test_customer("1.000001alice@example.com", "alice@example.com", "alice");
    let carol = common::test_customer("1.000002carol@example.com", "carol@example.com", "carol");

    repo.record_adoption(alice, 42).await.unwrap();
    let result = repo.record_adoption(carol, 42).await;

    let err = result.unwrap_err();
    assert!(matches!(err, AppError::Persistence(_)));
    assert_eq!(err.status_code(), axum::http::StatusCode::CONFLICT);

    // The new customer row is rolled back with the failed adoption.
    assert_eq!(common::count_customers(&pool).await, 1);
    assert_eq!(
        common::adopter_of(&pool, 42).await.as_deref(),
        Some("1.000001alice@example.com")
    );
}

fn new_customer(email: &str) -> NewCustomer {
    NewCustomer {
        firstname: "bob".to_string(),
        lastname: "builder".to_string(),
        phone: None,
        email: email.to_string(),
        address: None,
        city: None,
        state: None,
        zipcode: None,
    }
}

#[sqlx::test]
async fn test_record_adoption_long_email(pool: PgPool) {
    let repo = PgAdoptionRepository::new(Arc::new(pool.clone()));

    let email = format!(
        "{}@{}.{}.{}.example.com",
        "a".repeat(64),
        "b".repeat(60),
        "c".repeat(60),
        "d".repeat(51)
    );
    assert_eq!(email.len(), 250);

    let submitted_at = Utc.timestamp_opt(1_700_000_000, 123_000).unwrap();
    let customer = new_customer(&email).into_customer(submitted_at);
    assert!(customer.id.len() > 255);

    let customer_id = repo.record_adoption(customer.clone(), 77).await.unwrap();

    assert_eq!(customer_id, customer.id);
    assert_eq!(common::adopter_of(&pool, 77).await, Some(customer.id));
}

#[sqlx::test]
async fn test_record_adoption_concurrent_same_email(pool: PgPool) {
    let repo = Arc::new(PgAdoptionRepository::new(Arc::new(pool.clone())));

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let repo = Arc::clone(&repo);
            let submitted_at = Utc.timestamp_opt(1_700_000_000, i * 1_000).unwrap();
            let customer = new_customer("race@example.com").into_customer(submitted_at);
            tokio::spawn(async move { repo.record_adoption(customer, 100 + i64::from(i)).await })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap());
    }

    ids.dedup();
    assert_eq!(ids.len(), 1);
    assert_eq!(common::count_customers(&pool).await, 1);
    assert_eq!(common::count_adoptions(&pool).await, 16);
}

#[sqlx::test]
async fn test_list_customers_empty(pool: PgPool) {
    let repo = PgAdoptionRepository::new(Arc::new(pool));

    let customers = repo.list_customers().await.unwrap();

    assert!(customers.is_empty());
}

#[sqlx::test]
async fn test_list_customers_returns_all_fields(pool: PgPool) {
    let repo = PgAdoptionRepository::new(Arc::new(pool));

    let mut customer = common::test_customer("1.000001bob@example.com", "bob@example.com", "bob");
    customer.phone = None;
    customer.zipcode = None;
    repo.record_adoption(customer.clone(), 7).await.unwrap();

    let customers = repo.list_customers().await.unwrap();

    assert_eq!(customers, vec![customer]);
}

#[sqlx::test]
async fn test_ping(pool: PgPool) {
    let repo = PgAdoptionRepository::new(Arc::new(pool));

    assert!(repo.ping().await.is_ok());
}
