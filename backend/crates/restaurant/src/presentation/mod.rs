//! Presentation Layer
//!
//! HTTP handlers, DTOs and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::RestaurantAppState;
pub use router::{dispatch, restaurant_router, restaurant_router_generic};
