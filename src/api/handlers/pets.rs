//! Handler for the pet detail endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::domain::entities::AnimalRecord;
use crate::error::AppError;
use crate::state::AppState;

/// Returns one animal's catalog record.
///
/// # Endpoint
///
/// `GET /api/pets/{pet_id}`
///
/// # Errors
///
/// Returns 404 if the catalog does not know the animal.
/// Returns 502 if the catalog response has no `animal` field.
pub async fn pet_detail_handler(
    Path(pet_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<AnimalRecord>, AppError> {
    let animal = state.search_service.pet_detail(pet_id).await?;
    Ok(Json(animal))
}
