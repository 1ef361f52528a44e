//! Submit Donation Use Case
//!
//! Stores an NGO donation record.

use std::sync::Arc;

use crate::domain::entity::donation::DonationSubmission;
use crate::domain::repository::DonationRepository;
use crate::error::RestaurantResult;

pub struct SubmitDonationInput {
    pub name: String,
    pub address: String,
    pub food: String,
}

pub struct SubmitDonationUseCase<D>
where
    D: DonationRepository,
{
    donations: Arc<D>,
}

impl<D> SubmitDonationUseCase<D>
where
    D: DonationRepository,
{
    pub fn new(donations: Arc<D>) -> Self {
        Self { donations }
    }

    pub async fn execute(&self, input: SubmitDonationInput) -> RestaurantResult<()> {
        let donation = DonationSubmission::new(input.name, input.address, input.food);

        self.donations.create(&donation).await?;

        tracing::info!(donation_id = %donation.donation_id, "Donation submission received");

        Ok(())
    }
}
