//! Restaurant Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and configuration
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Restaurant signup and login (signed access token, 12 h lifetime)
//! - Restaurant profile lookup, listing and update by external restaurant id
//! - NGO food donation intake
//!
//! ## Known gaps
//! - Profile update does not check the caller's token against the target account
//! - Restaurant lookups return the stored password hash

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{LoginEmailMatching, RestaurantConfig};
pub use error::{RestaurantError, RestaurantResult};
pub use infra::{InMemoryRestaurantRepository, PgRestaurantRepository};
pub use presentation::router::{dispatch, restaurant_router, restaurant_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
