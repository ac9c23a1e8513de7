//! PostgreSQL implementation of adoption repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use std::sync::Arc;

use crate::domain::entities::{Adoption, Customer};
use crate::domain::repositories::AdoptionRepository;
use crate::error::AppError;

/// PostgreSQL repository for customers and adoption links.
///
/// `record_adoption` reads by email before inserting. `customers.email` carries
/// a unique constraint and the insert is `ON CONFLICT (email) DO NOTHING`, so a
/// concurrent first submission for the same address resolves to the winner's
/// identifier instead of creating a second row.
pub struct PgAdoptionRepository {
    pool: Arc<PgPool>,
}

impl PgAdoptionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn find_customer_id_by_email(
        tx: &mut Transaction<'_, Postgres>,
        email: &str,
    ) -> Result<Option<String>, AppError> {
        let id = sqlx::query_scalar::<_, String>("SELECT id FROM customers WHERE email = $1")
            .bind(email)
            .fetch_optional(&mut **tx)
            .await?;

        Ok(id)
    }

    /// Inserts the customer unless its email already exists; returns the
    /// inserted id, or `None` when another row owns the email.
    async fn insert_customer(
        tx: &mut Transaction<'_, Postgres>,
        customer: &Customer,
    ) -> Result<Option<String>, AppError> {
        let id = sqlx::query_scalar::<_, String>(
            r#"
            INSERT INTO customers (id, firstname, lastname, phone, email, address, city, state, zipcode)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (email) DO NOTHING
            RETURNING id
            "#,
        )
        .bind(&customer.id)
        .bind(&customer.firstname)
        .bind(&customer.lastname)
        .bind(&customer.phone)
        .bind(&customer.email)
        .bind(&customer.address)
        .bind(&customer.city)
        .bind(&customer.state)
        .bind(&customer.zipcode)
        .fetch_optional(&mut **tx)
        .await?;

        Ok(id)
    }
}

#[derive(FromRow)]
struct CustomerRow {
    id: String,
    firstname: String,
    lastname: String,
    phone: Option<String>,
    email: String,
    address: Option<String>,
    city: Option<String>,
    state: Option<String>,
    zipcode: Option<String>,
}

impl From<CustomerRow> for Customer {
    fn from(r: CustomerRow) -> Self {
        Customer {
            id: r.id,
            firstname: r.firstname,
            lastname: r.lastname,
            phone: r.phone,
            email: r.email,
            address: r.address,
            city: r.city,
            state: r.state,
            zipcode: r.zipcode,
        }
    }
}

#[async_trait]
impl AdoptionRepository for PgAdoptionRepository {
    async fn record_adoption(&self, customer: Customer, pet_id: i64) -> Result<String, AppError> {
        let mut tx = self.pool.begin().await?;

        let customer_id = match Self::find_customer_id_by_email(&mut tx, &customer.email).await? {
            Some(existing) => {
                tracing::info!(
                    customer_id = %existing,
                    "Customer already registered, reusing existing record"
                );
                existing
            }
            None => match Self::insert_customer(&mut tx, &customer).await? {
                Some(inserted) => {
                    tracing::info!(customer_id = %inserted, "Customer created");
                    inserted
                }
                None => {
                    // Lost a race with a concurrent submission for the same email.
                    let winner = Self::find_customer_id_by_email(&mut tx, &customer.email)
                        .await?
                        .ok_or(sqlx::Error::RowNotFound)?;
                    tracing::warn!(
                        customer_id = %winner,
                        "Concurrent registration for the same email, reusing winner"
                    );
                    winner
                }
            },
        };

        let adoption = Adoption::new(pet_id, customer_id);

        sqlx::query("INSERT INTO adoptions (pet_id, customer_id) VALUES ($1, $2)")
            .bind(adoption.pet_id)
            .bind(&adoption.customer_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(
            pet_id = adoption.pet_id,
            customer_id = %adoption.customer_id,
            "Adoption recorded"
        );

        Ok(adoption.customer_id)
    }

    async fn list_customers(&self) -> Result<Vec<Customer>, AppError> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, firstname, lastname, phone, email, address, city, state, zipcode
            FROM customers
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
