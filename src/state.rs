//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AdoptionService, PetSearchService};
use crate::infrastructure::persistence::PgAdoptionRepository;
use crate::infrastructure::petfinder::PetfinderClient;

pub type SearchService = PetSearchService<PetfinderClient>;
pub type Adoptions = AdoptionService<PgAdoptionRepository, PetfinderClient>;

#[derive(Clone)]
pub struct AppState {
    pub search_service: Arc<SearchService>,
    pub adoption_service: Arc<Adoptions>,
}

impl AppState {
    /// Wires both services over one catalog client and one repository.
    pub fn new(catalog: Arc<PetfinderClient>, repository: Arc<PgAdoptionRepository>) -> Self {
        Self {
            search_service: Arc::new(PetSearchService::new(catalog.clone())),
            adoption_service: Arc::new(AdoptionService::new(repository, catalog)),
        }
    }
}
