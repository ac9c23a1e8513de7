//! Domain layer containing business entities and logic.
//!
//! Independent of HTTP, SQL and the catalog's wire format.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Traits for the store and the remote catalog
//! - [`selection`] - Senior filter and lazy traversal of search results
//!
//! # Adoption Flow
//!
//! 1. Handler validates the form and builds a [`entities::NewCustomer`]
//! 2. The service assigns the submission identifier
//! 3. [`repositories::AdoptionRepository::record_adoption`] upserts by email and
//!    links the pet in one transaction
//! 4. The adopted animal is fetched from [`repositories::AnimalCatalog`]

pub mod entities;
pub mod repositories;
pub mod selection;
