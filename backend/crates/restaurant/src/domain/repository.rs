//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use crate::domain::entity::{account::Account, donation::DonationSubmission};
use crate::domain::value_object::restaurant_id::RestaurantId;
use crate::error::RestaurantResult;

/// Account repository trait
///
/// Neither `email` nor `restaurant_id` is unique. Single-record lookups return
/// the earliest-created match.
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Insert a new account
    async fn create(&self, account: &Account) -> RestaurantResult<()>;

    /// Find by exact email string
    async fn find_by_email(&self, email: &str) -> RestaurantResult<Option<Account>>;

    /// Find by external restaurant id
    async fn find_by_restaurant_id(
        &self,
        restaurant_id: &RestaurantId,
    ) -> RestaurantResult<Option<Account>>;

    /// Every account, in creation order
    async fn list_all(&self) -> RestaurantResult<Vec<Account>>;

    /// Persist profile changes of an existing account (matched by internal id)
    async fn update(&self, account: &Account) -> RestaurantResult<()>;
}

/// Donation submission repository trait
#[trait_variant::make(DonationRepository: Send)]
pub trait LocalDonationRepository {
    /// Insert a new submission
    async fn create(&self, donation: &DonationSubmission) -> RestaurantResult<()>;
}
