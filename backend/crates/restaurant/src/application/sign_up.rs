//! Sign Up Use Case
//!
//! Registers a restaurant account.

use std::sync::Arc;

use kernel::id::AccountId;
use platform::password::ClearTextPassword;

use crate::application::config::RestaurantConfig;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{email::Email, restaurant_id::RestaurantId};
use crate::error::{RestaurantError, RestaurantResult};

/// Sign up input (presence already checked by the caller)
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub restaurant_id: String,
}

pub struct SignUpOutput {
    pub account_id: AccountId,
}

pub struct SignUpUseCase<A>
where
    A: AccountRepository,
{
    accounts: Arc<A>,
    config: Arc<RestaurantConfig>,
}

impl<A> SignUpUseCase<A>
where
    A: AccountRepository,
{
    pub fn new(accounts: Arc<A>, config: Arc<RestaurantConfig>) -> Self {
        Self { accounts, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> RestaurantResult<SignUpOutput> {
        let restaurant_id =
            RestaurantId::new(input.restaurant_id).ok_or(RestaurantError::MissingFields)?;
        let email = Email::normalized(&input.email);

        // Trimmed before hashing; login compares the raw submission.
        let password = ClearTextPassword::trimmed(&input.password);
        let params = self.config.password_hash_params;
        let pepper = self.config.password_pepper.clone();
        let password_hash =
            tokio::task::spawn_blocking(move || password.hash(&params, pepper.as_deref()))
                .await??;

        let account = Account::new(input.name, email, password_hash, restaurant_id);

        self.accounts.create(&account).await?;

        tracing::info!(
            account_id = %account.account_id,
            restaurant_id = %account.restaurant_id,
            "Restaurant signed up"
        );

        Ok(SignUpOutput {
            account_id: account.account_id,
        })
    }
}
