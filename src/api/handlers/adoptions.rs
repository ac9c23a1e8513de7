//! Handler for the adoption submission endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::adoption::{AdoptionRequest, AdoptionResponse};
use crate::domain::entities::NewCustomer;
use crate::error::AppError;
use crate::state::AppState;

/// Records an adoption and returns the adopted animal.
///
/// # Endpoint
///
/// `POST /api/adoptions`
///
/// If a customer with the same email already exists, the adoption is recorded
/// under that customer and the submitted contact details are ignored.
///
/// # Errors
///
/// Returns 400 if validation fails.
/// Returns 409 if the pet has already been adopted.
/// Returns 500 if the adoption could not be stored.
pub async fn adoption_handler(
    State(state): State<AppState>,
    Json(payload): Json<AdoptionRequest>,
) -> Result<(StatusCode, Json<AdoptionResponse>), AppError> {
    payload.validate()?;

    let firstname = payload.customer.firstname.trim().to_string();
    let receipt = state
        .adoption_service
        .adopt(payload.pet_id, NewCustomer::from(payload.customer))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AdoptionResponse {
            customer_id: receipt.customer_id,
            message: format!("Customer {firstname} successfully adopted a new pet!"),
            animal: receipt.animal,
        }),
    ))
}
