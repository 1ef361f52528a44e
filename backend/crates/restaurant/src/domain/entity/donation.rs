//! Donation Submission Entity
//!
//! Record posted by an NGO. Write-only: nothing reads it back through the API.

use chrono::{DateTime, Utc};
use kernel::id::DonationId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonationSubmission {
    pub donation_id: DonationId,
    pub name: String,
    pub address: String,
    pub food: String,
    pub created_at: DateTime<Utc>,
}

impl DonationSubmission {
    pub fn new(name: String, address: String, food: String) -> Self {
        Self {
            donation_id: DonationId::new(),
            name,
            address,
            food,
            created_at: Utc::now(),
        }
    }
}
