//! Wire types for the Petfinder v2 API.
//!
//! Structural fields are `Option` so that an absent key surfaces as a typed
//! domain error instead of a generic decode failure.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::entities::AnimalRecord;
use crate::error::AppError;

/// Body of `POST /oauth2/token`.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// `pagination` block of a search page.
#[derive(Debug, Deserialize)]
pub struct Pagination {
    pub total_count: Option<u64>,
    pub count_per_page: Option<u64>,
}

impl Pagination {
    /// Number of pages implied by this block: `ceil(total_count / count_per_page)`.
    pub fn page_count(&self) -> Result<u64, AppError> {
        let total = self
            .total_count
            .ok_or_else(|| AppError::malformed("pagination.total_count"))?;
        let per_page = self
            .count_per_page
            .filter(|n| *n > 0)
            .ok_or_else(|| AppError::malformed("pagination.count_per_page"))?;

        Ok(total.div_ceil(per_page))
    }
}

/// Body of `GET /animals`.
#[derive(Debug, Deserialize)]
pub struct AnimalsPage {
    pub pagination: Option<Pagination>,
    pub animals: Option<Vec<AnimalRecord>>,
}

impl AnimalsPage {
    pub fn parse(body: Value) -> Result<Self, AppError> {
        serde_json::from_value(body).map_err(|e| {
            tracing::warn!(error = %e, "Search page does not match the expected shape");
            AppError::malformed("animals")
        })
    }

    pub fn into_animals(self) -> Result<Vec<AnimalRecord>, AppError> {
        self.animals.ok_or_else(|| AppError::malformed("animals"))
    }
}

/// Body of `GET /animals/{id}`.
#[derive(Debug, Deserialize)]
pub struct AnimalDetailResponse {
    pub animal: Option<AnimalRecord>,
}
