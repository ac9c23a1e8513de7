//! Repository trait for customer and adoption persistence.

use crate::domain::entities::Customer;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for recording adoptions.
///
/// Customers are keyed by email: the first submission for an address wins and
/// later submissions reuse its identifier without touching its fields.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAdoptionRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_adoption.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdoptionRepository: Send + Sync {
    /// Upserts the customer by email and links the pet to the resolved customer.
    ///
    /// Both writes commit in one transaction. Returns the identifier the
    /// adoption was recorded under: the submitted one for a new email, the
    /// existing one otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if any read, insert or the commit
    /// fails; nothing is written in that case.
    async fn record_adoption(&self, customer: Customer, pet_id: i64) -> Result<String, AppError>;

    /// Lists every stored customer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    async fn list_customers(&self) -> Result<Vec<Customer>, AppError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the round-trip fails.
    async fn ping(&self) -> Result<(), AppError>;
}
