//! Login Use Case
//!
//! Checks credentials and issues an access token.

use std::sync::Arc;

use platform::password::ClearTextPassword;
use platform::token::TokenSigner;

use crate::application::config::{LoginEmailMatching, RestaurantConfig};
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::email::Email;
use crate::error::{RestaurantError, RestaurantResult};

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub struct LoginOutput {
    /// Signed token carrying the internal account id
    pub token: String,
    /// External id of the account that logged in
    pub restaurant_id: String,
}

pub struct LoginUseCase<A>
where
    A: AccountRepository,
{
    accounts: Arc<A>,
    tokens: Arc<TokenSigner>,
    config: Arc<RestaurantConfig>,
}

impl<A> LoginUseCase<A>
where
    A: AccountRepository,
{
    pub fn new(accounts: Arc<A>, tokens: Arc<TokenSigner>, config: Arc<RestaurantConfig>) -> Self {
        Self {
            accounts,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> RestaurantResult<LoginOutput> {
        let lookup = match self.config.login_email_matching {
            LoginEmailMatching::Exact => input.email,
            LoginEmailMatching::CaseInsensitive => Email::normalized(&input.email).into_inner(),
        };

        let account = self
            .accounts
            .find_by_email(&lookup)
            .await?
            .ok_or(RestaurantError::AccountNotFound)?;

        // Compared untrimmed, unlike signup.
        let password = ClearTextPassword::new(input.password);
        let password_hash = account.password_hash.clone();
        let pepper = self.config.password_pepper.clone();
        let password_valid = tokio::task::spawn_blocking(move || {
            password_hash.verify(&password, pepper.as_deref())
        })
        .await?;

        if !password_valid {
            return Err(RestaurantError::IncorrectPassword);
        }

        let token = self.tokens.issue(&account.account_id.to_string())?;

        tracing::info!(
            account_id = %account.account_id,
            restaurant_id = %account.restaurant_id,
            "Restaurant logged in"
        );

        Ok(LoginOutput {
            token,
            restaurant_id: account.restaurant_id.as_str().to_string(),
        })
    }
}
