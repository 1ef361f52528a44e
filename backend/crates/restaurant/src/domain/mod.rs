//! Domain Layer
//!
//! Entities, value objects and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{account::Account, donation::DonationSubmission};
pub use repository::{AccountRepository, DonationRepository};
