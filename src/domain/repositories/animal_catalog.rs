//! Port to the remote adoptable-animal catalog.

use crate::domain::entities::{AccessToken, AnimalRecord, SearchCriteria};
use crate::error::AppError;
use async_trait::async_trait;

/// Remote catalog of adoptable animals.
///
/// Every call performs its own token exchange; nothing is cached between calls.
///
/// # Implementations
///
/// - [`crate::infrastructure::petfinder::PetfinderClient`] - Petfinder v2 API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnimalCatalog: Send + Sync {
    /// Performs a client-credentials exchange and returns the bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Authentication`] with the observed status on any
    /// non-success response. Single attempt, no retry.
    async fn acquire_access_token(&self) -> Result<AccessToken, AppError>;

    /// Returns every animal matching `criteria`, walking all result pages in order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Authentication`] if the token exchange fails,
    /// [`AppError::CatalogQuery`] on a non-success page response and
    /// [`AppError::MalformedResponse`] when `pagination` or `animals` is absent.
    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<AnimalRecord>, AppError>;

    /// Fetches a single animal by its catalog identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingField`] if the body has no `animal` key and
    /// [`AppError::CatalogQuery`] on a non-success response.
    async fn fetch_detail(&self, pet_id: i64) -> Result<AnimalRecord, AppError>;
}
