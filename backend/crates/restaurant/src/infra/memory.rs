//! In-Memory Repository
//!
//! Vec-backed store keeping insertion order, so "first match" lookups behave
//! like the `account_seq` ordering of the PostgreSQL tables.

use std::sync::{Arc, RwLock};

use crate::domain::entity::{account::Account, donation::DonationSubmission};
use crate::domain::repository::{AccountRepository, DonationRepository};
use crate::domain::value_object::restaurant_id::RestaurantId;
use crate::error::{RestaurantError, RestaurantResult};

#[derive(Clone, Default)]
pub struct InMemoryRestaurantRepository {
    accounts: Arc<RwLock<Vec<Account>>>,
    donations: Arc<RwLock<Vec<DonationSubmission>>>,
    fail: bool,
}

impl InMemoryRestaurantRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository whose every operation fails with an internal error
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Make subsequent operations fail (or succeed again)
    pub fn set_failing(&mut self, fail: bool) {
        self.fail = fail;
    }

    pub fn donation_count(&self) -> RestaurantResult<usize> {
        Ok(self.donations.read().map_err(poisoned)?.len())
    }

    fn check(&self) -> RestaurantResult<()> {
        if self.fail {
            return Err(RestaurantError::Internal(
                "in-memory repository configured to fail".to_string(),
            ));
        }
        Ok(())
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> RestaurantError {
    RestaurantError::Internal("in-memory repository lock poisoned".to_string())
}

impl AccountRepository for InMemoryRestaurantRepository {
    async fn create(&self, account: &Account) -> RestaurantResult<()> {
        self.check()?;
        self.accounts.write().map_err(poisoned)?.push(account.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> RestaurantResult<Option<Account>> {
        self.check()?;
        let accounts = self.accounts.read().map_err(poisoned)?;
        Ok(accounts.iter().find(|a| a.email.as_str() == email).cloned())
    }

    async fn find_by_restaurant_id(
        &self,
        restaurant_id: &RestaurantId,
    ) -> RestaurantResult<Option<Account>> {
        self.check()?;
        let accounts = self.accounts.read().map_err(poisoned)?;
        Ok(accounts
            .iter()
            .find(|a| &a.restaurant_id == restaurant_id)
            .cloned())
    }

    async fn list_all(&self) -> RestaurantResult<Vec<Account>> {
        self.check()?;
        Ok(self.accounts.read().map_err(poisoned)?.clone())
    }

    async fn update(&self, account: &Account) -> RestaurantResult<()> {
        self.check()?;
        let mut accounts = self.accounts.write().map_err(poisoned)?;
        let stored = accounts
            .iter_mut()
            .find(|a| a.account_id == account.account_id)
            .ok_or(RestaurantError::AccountNotFound)?;
        *stored = account.clone();
        Ok(())
    }
}

impl DonationRepository for InMemoryRestaurantRepository {
    async fn create(&self, donation: &DonationSubmission) -> RestaurantResult<()> {
        self.check()?;
        self.donations
            .write()
            .map_err(poisoned)?
            .push(donation.clone());
        Ok(())
    }
}
