//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::AccountId;
use platform::password::HashedPassword;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{account::Account, donation::DonationSubmission};
use crate::domain::repository::{AccountRepository, DonationRepository};
use crate::domain::value_object::{email::Email, restaurant_id::RestaurantId};
use crate::error::{RestaurantError, RestaurantResult};

/// PostgreSQL-backed restaurant repository
#[derive(Clone)]
pub struct PgRestaurantRepository {
    pool: PgPool,
}

impl PgRestaurantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Account Repository Implementation
// ============================================================================

impl AccountRepository for PgRestaurantRepository {
    async fn create(&self, account: &Account) -> RestaurantResult<()> {
        sqlx::query(
            r#"
            INSERT INTO accounts (
                account_id,
                restaurant_id,
                name,
                email,
                password_hash,
                address,
                food,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(account.restaurant_id.as_str())
        .bind(account.name.as_deref())
        .bind(account.email.as_str())
        .bind(account.password_hash.as_phc_string())
        .bind(account.address.as_deref())
        .bind(account.food.as_deref())
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> RestaurantResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                account_id,
                restaurant_id,
                name,
                email,
                password_hash,
                address,
                food,
                created_at,
                updated_at
            FROM accounts
            WHERE email = $1
            ORDER BY account_seq
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_account()).transpose()
    }

    async fn find_by_restaurant_id(
        &self,
        restaurant_id: &RestaurantId,
    ) -> RestaurantResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                account_id,
                restaurant_id,
                name,
                email,
                password_hash,
                address,
                food,
                created_at,
                updated_at
            FROM accounts
            WHERE restaurant_id = $1
            ORDER BY account_seq
            LIMIT 1
            "#,
        )
        .bind(restaurant_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_account()).transpose()
    }

    async fn list_all(&self) -> RestaurantResult<Vec<Account>> {
        let rows = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                account_id,
                restaurant_id,
                name,
                email,
                password_hash,
                address,
                food,
                created_at,
                updated_at
            FROM accounts
            ORDER BY account_seq
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_account()).collect()
    }

    async fn update(&self, account: &Account) -> RestaurantResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE accounts
            SET name = $2, address = $3, food = $4, updated_at = $5
            WHERE account_id = $1
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(account.name.as_deref())
        .bind(account.address.as_deref())
        .bind(account.food.as_deref())
        .bind(account.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RestaurantError::AccountNotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Donation Repository Implementation
// ============================================================================

impl DonationRepository for PgRestaurantRepository {
    async fn create(&self, donation: &DonationSubmission) -> RestaurantResult<()> {
        sqlx::query(
            r#"
            INSERT INTO donation_submissions (donation_id, name, address, food, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(donation.donation_id.as_uuid())
        .bind(&donation.name)
        .bind(&donation.address)
        .bind(&donation.food)
        .bind(donation.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    account_id: Uuid,
    restaurant_id: String,
    name: Option<String>,
    email: String,
    password_hash: String,
    address: Option<String>,
    food: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> RestaurantResult<Account> {
        let password_hash = HashedPassword::from_phc_string(self.password_hash)
            .map_err(|e| RestaurantError::Internal(format!("Invalid password_hash: {}", e)))?;

        Ok(Account {
            account_id: AccountId::from_uuid(self.account_id),
            restaurant_id: RestaurantId::from_db(self.restaurant_id),
            name: self.name,
            email: Email::from_db(self.email),
            password_hash,
            address: self.address,
            food: self.food,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
