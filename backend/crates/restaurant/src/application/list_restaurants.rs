//! List Restaurants Use Case

use std::sync::Arc;

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::error::RestaurantResult;

pub struct ListRestaurantsUseCase<A>
where
    A: AccountRepository,
{
    accounts: Arc<A>,
}

impl<A> ListRestaurantsUseCase<A>
where
    A: AccountRepository,
{
    pub fn new(accounts: Arc<A>) -> Self {
        Self { accounts }
    }

    pub async fn execute(&self) -> RestaurantResult<Vec<Account>> {
        self.accounts.list_all().await
    }
}
