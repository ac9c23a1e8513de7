//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod adoptions;
pub mod customers;
pub mod health;
pub mod pets;
pub mod search;

pub use adoptions::adoption_handler;
pub use customers::customer_list_handler;
pub use health::health_handler;
pub use pets::pet_detail_handler;
pub use search::search_handler;
