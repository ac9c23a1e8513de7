//! Business logic services for the application layer.

pub mod adoption_service;
pub mod pet_search_service;

pub use adoption_service::{AdoptionReceipt, AdoptionService};
pub use pet_search_service::{PetSearchOutcome, PetSearchService};
