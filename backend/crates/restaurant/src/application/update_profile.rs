//! Update Profile Use Case
//!
//! Overwrites name, address and food of the account addressed by restaurant id.
//! The caller's identity is not checked against the target account.

use std::sync::Arc;

use crate::domain::entity::account::ProfileUpdate;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::restaurant_id::RestaurantId;
use crate::error::{RestaurantError, RestaurantResult};

pub struct UpdateProfileUseCase<A>
where
    A: AccountRepository,
{
    accounts: Arc<A>,
}

impl<A> UpdateProfileUseCase<A>
where
    A: AccountRepository,
{
    pub fn new(accounts: Arc<A>) -> Self {
        Self { accounts }
    }

    pub async fn execute(&self, restaurant_id: &str, update: ProfileUpdate) -> RestaurantResult<()> {
        let restaurant_id =
            RestaurantId::new(restaurant_id).ok_or(RestaurantError::AccountNotFound)?;

        let mut account = self
            .accounts
            .find_by_restaurant_id(&restaurant_id)
            .await?
            .ok_or(RestaurantError::AccountNotFound)?;

        account.apply_profile(update);
        self.accounts.update(&account).await?;

        tracing::info!(
            account_id = %account.account_id,
            restaurant_id = %account.restaurant_id,
            "Restaurant profile updated"
        );

        Ok(())
    }
}
