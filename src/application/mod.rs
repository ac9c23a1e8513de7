//! Application layer services implementing business logic.
//!
//! Services consume the domain traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::pet_search_service::PetSearchService`] - Catalog search and senior preference
//! - [`services::adoption_service::AdoptionService`] - Adoption submission and customer listing

pub mod services;
