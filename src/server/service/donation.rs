use entity::campaign::CampaignStatus;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::donation::{CreateDonationInput, DonationDto},
    server::{
        data::{CampaignRepository, DonationRepository},
        error::Error,
        model::db::DonationModel,
        service::{optional_text, positive_amount},
    },
};

impl From<DonationModel> for DonationDto {
    fn from(donation: DonationModel) -> Self {
        Self {
            id: donation.id,
            campaign_id: donation.campaign_id,
            user_id: donation.user_id,
            amount: donation.amount,
            donor_name: donation.donor_name,
            message: donation.message,
            created_at: donation.created_at,
        }
    }
}

/// Service for recording and listing donations.
pub struct DonationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DonationService<'a> {
    /// Creates a new instance of DonationService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists donations newest first, optionally for a single campaign.
    pub async fn list(&self, campaign_id: Option<i32>) -> Result<Vec<DonationDto>, Error> {
        let donations = DonationRepository::new(self.db).list(campaign_id).await?;

        Ok(donations.into_iter().map(DonationDto::from).collect())
    }

    /// Records a donation and adds it to the campaign's raised total.
    ///
    /// Both writes happen in one transaction while the campaign row is locked, so the
    /// campaign total always matches the sum of its donations.
    ///
    /// # Arguments
    /// - `input` - Donation details, the amount must be positive
    /// - `user_id` - Signed-in donor, `None` for anonymous donations
    ///
    /// # Returns
    /// - `Ok(DonationDto)` - Donation recorded
    /// - `Err(Error::Validation)` - Amount out of range, campaign not active, or the total
    ///   would overflow
    /// - `Err(Error::NotFound)` - Campaign does not exist
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was written
    pub async fn create(
        &self,
        input: CreateDonationInput,
        user_id: Option<i32>,
    ) -> Result<DonationDto, Error> {
        let amount = positive_amount("Donation amount", input.amount)?;

        let txn = self.db.begin().await?;

        let campaign_repo = CampaignRepository::new(&txn);
        let campaign = campaign_repo
            .get_by_id_for_update(input.campaign_id)
            .await?
            .ok_or(Error::NotFound {
                entity: "Campaign",
                id: input.campaign_id,
            })?;

        if campaign.status != CampaignStatus::Active {
            return Err(Error::Validation(format!(
                "Campaign {} is not accepting donations",
                campaign.id
            )));
        }

        if campaign.raised_amount.checked_add(amount).is_none() {
            return Err(Error::Validation(format!(
                "Campaign {} cannot accept a donation of {}, its total would overflow",
                campaign.id, amount
            )));
        }

        let donation = DonationRepository::new(&txn)
            .create(
                campaign.id,
                user_id,
                amount,
                optional_text(input.donor_name),
                optional_text(input.message),
            )
            .await?;
        campaign_repo
            .add_to_raised(campaign.id, amount)
            .await?
            .ok_or(Error::NotFound {
                entity: "Campaign",
                id: campaign.id,
            })?;

        txn.commit().await?;

        Ok(donation.into())
    }
}
