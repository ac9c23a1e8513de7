//! Core domain entities for pet search and adoption.
//!
//! Entities are plain data structures; behaviour that talks to the catalog or
//! the store lives behind the traits in [`crate::domain::repositories`].
//!
//! # Entity Types
//!
//! - [`SearchCriteria`] - What a user is looking for
//! - [`AnimalRecord`] - One animal as returned by the catalog
//! - [`Customer`] - A person submitting the adoption form
//! - [`Adoption`] - Link between a pet and the customer who adopted it
//! - [`AccessToken`] - Bearer token for catalog requests
//!
//! Creation inputs follow the "New Type" pattern: [`NewCustomer`] has no
//! identifier until it is submitted.

pub mod access_token;
pub mod adoption;
pub mod animal;
pub mod customer;
pub mod search_criteria;

pub use access_token::AccessToken;
pub use adoption::Adoption;
pub use animal::{AnimalRecord, SENIOR_AGE};
pub use customer::{Customer, NewCustomer};
pub use search_criteria::{SearchCriteria, Size, Species};
