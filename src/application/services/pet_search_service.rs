//! Pet search service.

use std::sync::Arc;

use crate::domain::entities::{AnimalRecord, SearchCriteria};
use crate::domain::repositories::AnimalCatalog;
use crate::domain::selection::filter_seniors;
use crate::error::AppError;

/// Result of a search that prefers senior animals.
#[derive(Debug, Clone, PartialEq)]
pub struct PetSearchOutcome {
    pub pets: Vec<AnimalRecord>,
    /// `true` when `pets` was narrowed to seniors, `false` when no senior
    /// matched and every result is returned.
    pub seniors_only: bool,
}

/// Service for searching the adoptable-animal catalog.
pub struct PetSearchService<C: AnimalCatalog> {
    catalog: Arc<C>,
}

impl<C: AnimalCatalog> PetSearchService<C> {
    /// Creates a new search service.
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    /// Returns every animal matching `criteria`.
    ///
    /// # Errors
    ///
    /// Propagates catalog errors unchanged.
    pub async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<AnimalRecord>, AppError> {
        self.catalog.search(criteria).await
    }

    /// Returns the senior matches if there are any, otherwise every match.
    ///
    /// # Errors
    ///
    /// Propagates catalog errors unchanged.
    pub async fn search_preferring_seniors(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<PetSearchOutcome, AppError> {
        let pets = self.catalog.search(criteria).await?;
        let seniors = filter_seniors(pets.clone());

        if seniors.is_empty() {
            Ok(PetSearchOutcome {
                pets,
                seniors_only: false,
            })
        } else {
            Ok(PetSearchOutcome {
                pets: seniors,
                seniors_only: true,
            })
        }
    }

    /// Fetches one animal's detail record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingField`] if the catalog omits the `animal` key.
    pub async fn pet_detail(&self, pet_id: i64) -> Result<AnimalRecord, AppError> {
        self.catalog.fetch_detail(pet_id).await
    }
}
