//! Handler for the pet search endpoint.

use axum::{Json, extract::State};

use crate::api::dto::search::{SearchRequest, SearchResponse};
use crate::domain::entities::SearchCriteria;
use crate::error::AppError;
use crate::state::AppState;

/// Searches the catalog, narrowing to senior animals when any match.
///
/// # Endpoint
///
/// `POST /api/search`
///
/// # Request Body
///
/// ```json
/// {
///   "species": "Cat",
///   "size": "Small",
///   "good_with_children": true,
///   "good_with_dogs": false,
///   "good_with_cats": true,
///   "house_trained": true,
///   "special_needs": false
/// }
/// ```
///
/// # Errors
///
/// Returns 502 if the catalog rejects the token exchange or the query, or
/// answers with a malformed body.
pub async fn search_handler(
    State(state): State<AppState>,
    Json(payload): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    let criteria = SearchCriteria::from(payload);

    let outcome = state
        .search_service
        .search_preferring_seniors(&criteria)
        .await?;

    Ok(Json(SearchResponse {
        criteria,
        seniors_only: outcome.seniors_only,
        count: outcome.pets.len(),
        pets: outcome.pets,
    }))
}
