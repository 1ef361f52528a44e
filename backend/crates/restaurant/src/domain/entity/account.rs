//! Account Entity
//!
//! One registered restaurant: profile fields plus login credentials.

use chrono::{DateTime, Utc};
use kernel::id::AccountId;
use platform::password::HashedPassword;

use crate::domain::value_object::{email::Email, restaurant_id::RestaurantId};

/// Restaurant account
///
/// Email and password are fixed at signup. Only the profile fields
/// (`name`, `address`, `food`) change afterwards.
#[derive(Debug, Clone)]
pub struct Account {
    /// Internal identifier, carried in access tokens
    pub account_id: AccountId,
    /// External identifier used by restaurant-scoped routes
    pub restaurant_id: RestaurantId,
    /// Display name. Set at signup, but an update without a name clears it.
    pub name: Option<String>,
    /// Lower-cased at signup
    pub email: Email,
    pub password_hash: HashedPassword,
    pub address: Option<String>,
    pub food: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Replacement values for the mutable profile fields.
///
/// Every field is written as given; `None` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub food: Option<String>,
}

impl Account {
    pub fn new(
        name: String,
        email: Email,
        password_hash: HashedPassword,
        restaurant_id: RestaurantId,
    ) -> Self {
        let now = Utc::now();

        Self {
            account_id: AccountId::new(),
            restaurant_id,
            name: Some(name),
            email,
            password_hash,
            address: None,
            food: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite name, address and food unconditionally
    pub fn apply_profile(&mut self, update: ProfileUpdate) {
        self.name = update.name;
        self.address = update.address;
        self.food = update.food;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::{ClearTextPassword, HashParams};

    fn account() -> Account {
        let hash = ClearTextPassword::new("pw")
            .hash(&HashParams::minimal(), None)
            .unwrap();
        Account::new(
            "A".to_string(),
            Email::normalized("A@B.com"),
            hash,
            RestaurantId::new("r1").unwrap(),
        )
    }

    #[test]
    fn test_new_account_has_empty_profile() {
        let account = account();
        assert_eq!(account.name.as_deref(), Some("A"));
        assert_eq!(account.email.as_str(), "a@b.com");
        assert!(account.address.is_none());
        assert!(account.food.is_none());
        assert_eq!(account.created_at, account.updated_at);
    }

    #[test]
    fn test_apply_profile_overwrites_everything() {
        let mut account = account();
        account.apply_profile(ProfileUpdate {
            name: Some("B".to_string()),
            address: Some("1 Main St".to_string()),
            food: Some("bread".to_string()),
        });
        assert_eq!(account.name.as_deref(), Some("B"));
        assert_eq!(account.address.as_deref(), Some("1 Main St"));
        assert_eq!(account.food.as_deref(), Some("bread"));

        account.apply_profile(ProfileUpdate {
            food: Some("soup".to_string()),
            ..Default::default()
        });
        assert!(account.name.is_none());
        assert!(account.address.is_none());
        assert_eq!(account.food.as_deref(), Some("soup"));
        assert!(account.updated_at >= account.created_at);
    }
}
