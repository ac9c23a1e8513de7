//! API route configuration.

use crate::api::handlers::{
    adoption_handler, customer_list_handler, pet_detail_handler, search_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST /search`          - Search adoptable animals
/// - `GET  /pets/{pet_id}`   - Detail for one animal
/// - `POST /adoptions`       - Submit an adoption form
/// - `GET  /customers`       - List customers (administrative view)
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/search", post(search_handler))
        .route("/pets/{pet_id}", get(pet_detail_handler))
        .route("/adoptions", post(adoption_handler))
        .route("/customers", get(customer_list_handler))
}
