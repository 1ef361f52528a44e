//! Get Restaurant Use Case

use std::sync::Arc;

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::restaurant_id::RestaurantId;
use crate::error::{RestaurantError, RestaurantResult};

pub struct GetRestaurantUseCase<A>
where
    A: AccountRepository,
{
    accounts: Arc<A>,
}

impl<A> GetRestaurantUseCase<A>
where
    A: AccountRepository,
{
    pub fn new(accounts: Arc<A>) -> Self {
        Self { accounts }
    }

    /// Returns the full account record, password hash included.
    pub async fn execute(&self, restaurant_id: &str) -> RestaurantResult<Account> {
        let restaurant_id =
            RestaurantId::new(restaurant_id).ok_or(RestaurantError::MissingFields)?;

        self.accounts
            .find_by_restaurant_id(&restaurant_id)
            .await?
            .ok_or(RestaurantError::RestaurantNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryRestaurantRepository;

    #[tokio::test]
    async fn test_empty_restaurant_id_is_missing_field() {
        let use_case = GetRestaurantUseCase::new(Arc::new(InMemoryRestaurantRepository::new()));

        let result = use_case.execute("").await;
        assert!(matches!(result, Err(RestaurantError::MissingFields)));
    }

    #[tokio::test]
    async fn test_empty_restaurant_id_checked_before_storage() {
        let use_case =
            GetRestaurantUseCase::new(Arc::new(InMemoryRestaurantRepository::failing()));

        let result = use_case.execute("").await;
        assert!(matches!(result, Err(RestaurantError::MissingFields)));
    }

    #[tokio::test]
    async fn test_unknown_restaurant_id() {
        let use_case = GetRestaurantUseCase::new(Arc::new(InMemoryRestaurantRepository::new()));

        let result = use_case.execute("r1").await;
        assert!(matches!(result, Err(RestaurantError::RestaurantNotFound)));
    }
}
