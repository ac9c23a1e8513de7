//! Adoption submission service.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::{AnimalRecord, Customer, NewCustomer};
use crate::domain::repositories::{AdoptionRepository, AnimalCatalog};
use crate::error::AppError;

/// What a successful submission returns to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct AdoptionReceipt {
    /// Identifier the adoption was recorded under (may belong to an earlier
    /// submission with the same email).
    pub customer_id: String,
    pub animal: AnimalRecord,
}

/// Service for recording adoptions and listing customers.
pub struct AdoptionService<R: AdoptionRepository, C: AnimalCatalog> {
    repository: Arc<R>,
    catalog: Arc<C>,
}

impl<R: AdoptionRepository, C: AnimalCatalog> AdoptionService<R, C> {
    /// Creates a new adoption service.
    pub fn new(repository: Arc<R>, catalog: Arc<C>) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    /// Records an adoption of `pet_id` by the submitting customer.
    ///
    /// Assigns the submission identifier, upserts the customer by email and
    /// links the pet, then fetches the adopted animal for confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the adoption could not be committed.
    /// Catalog errors from the detail fetch propagate after the adoption has
    /// been committed.
    pub async fn adopt(
        &self,
        pet_id: i64,
        new_customer: NewCustomer,
    ) -> Result<AdoptionReceipt, AppError> {
        let customer = new_customer.into_customer(Utc::now());
        tracing::debug!(pet_id, submitted_id = %customer.id, "Recording adoption");

        let customer_id = self.repository.record_adoption(customer, pet_id).await?;
        let animal = self.catalog.fetch_detail(pet_id).await?;

        Ok(AdoptionReceipt {
            customer_id,
            animal,
        })
    }

    /// Lists every customer for the administrative view.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    pub async fn list_customers(&self) -> Result<Vec<Customer>, AppError> {
        self.repository.list_customers().await
    }

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the round-trip fails.
    pub async fn check_store(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
