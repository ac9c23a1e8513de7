//! DTOs for the pet search endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{AnimalRecord, SearchCriteria, Size, Species};

/// Search form. Preference flags default to `false` when omitted.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub species: Species,
    pub size: Size,
    #[serde(default)]
    pub good_with_children: bool,
    #[serde(default)]
    pub good_with_dogs: bool,
    #[serde(default)]
    pub good_with_cats: bool,
    #[serde(default)]
    pub house_trained: bool,
    #[serde(default)]
    pub special_needs: bool,
}

impl From<SearchRequest> for SearchCriteria {
    fn from(r: SearchRequest) -> Self {
        SearchCriteria {
            species: r.species,
            size: r.size,
            good_with_children: r.good_with_children,
            good_with_dogs: r.good_with_dogs,
            good_with_cats: r.good_with_cats,
            house_trained: r.house_trained,
            special_needs: r.special_needs,
        }
    }
}

/// Search results.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub criteria: SearchCriteria,
    /// `true` when the list was narrowed to senior animals.
    pub seniors_only: bool,
    pub count: usize,
    pub pets: Vec<AnimalRecord>,
}
