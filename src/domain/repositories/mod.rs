//! Trait definitions for the domain's external collaborators.
//!
//! These traits abstract the relational store and the remote animal catalog.
//! They are implemented in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`AdoptionRepository`] - Customer upsert and adoption links
//! - [`AnimalCatalog`] - Token exchange, paged search and pet detail
//!
//! # Testing
//!
//! See `tests/repository_adoption.rs` and `tests/catalog_client.rs`.

pub mod adoption_repository;
pub mod animal_catalog;

pub use adoption_repository::AdoptionRepository;
pub use animal_catalog::AnimalCatalog;

#[cfg(test)]
pub use adoption_repository::MockAdoptionRepository;
#[cfg(test)]
pub use animal_catalog::MockAnimalCatalog;
