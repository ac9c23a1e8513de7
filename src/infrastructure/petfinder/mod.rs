//! Petfinder catalog integration.
//!
//! - [`PetfinderClient`] - [`crate::domain::repositories::AnimalCatalog`] over `reqwest`
//! - [`dto`] - Wire types for token, search and detail responses

pub mod client;
pub mod dto;

pub use client::PetfinderClient;
