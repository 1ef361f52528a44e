//! Infrastructure Layer
//!
//! Repository implementations: PostgreSQL for deployment, in-memory for tests
//! and local experiments.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryRestaurantRepository;
pub use postgres::PgRestaurantRepository;
