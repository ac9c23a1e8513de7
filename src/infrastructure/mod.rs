//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`petfinder`] - Remote animal catalog client

pub mod persistence;
pub mod petfinder;
