//! Handler for the customer listing.

use axum::{Json, extract::State};

use crate::api::dto::customer::{CustomerItem, CustomerListResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every registered customer.
///
/// # Endpoint
///
/// `GET /api/customers`
pub async fn customer_list_handler(
    State(state): State<AppState>,
) -> Result<Json<CustomerListResponse>, AppError> {
    let customers = state.adoption_service.list_customers().await?;

    Ok(Json(CustomerListResponse {
        total: customers.len(),
        items: customers.into_iter().map(CustomerItem::from).collect(),
    }))
}
