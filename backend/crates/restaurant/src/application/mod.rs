//! Application Layer
//!
//! One use case per API operation.

pub mod config;
pub mod get_restaurant;
pub mod list_restaurants;
pub mod login;
pub mod sign_up;
pub mod submit_donation;
pub mod update_profile;

// Re-exports
pub use config::{LoginEmailMatching, RestaurantConfig};
pub use get_restaurant::GetRestaurantUseCase;
pub use list_restaurants::ListRestaurantsUseCase;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
pub use submit_donation::{SubmitDonationInput, SubmitDonationUseCase};
pub use update_profile::UpdateProfileUseCase;
