//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with bound
//! parameters.
//!
//! # Repositories
//!
//! - [`PgAdoptionRepository`] - Customer upsert-by-email and adoption links

pub mod pg_adoption_repository;

pub use pg_adoption_repository::PgAdoptionRepository;
