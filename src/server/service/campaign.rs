use entity::campaign::CampaignStatus;
use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::{
    model::campaign::{
        CampaignDto, CampaignStatusDto, CreateCampaignInput, ListCampaignsInput,
        UpdateCampaignInput,
    },
    server::{
        data::{campaign::CampaignChanges, CampaignRepository, DonationRepository},
        error::Error,
        model::db::CampaignModel,
        service::{optional_text, positive_amount, required_text},
    },
};

/// Upper bound applied to `campaign.list` page sizes
pub const MAX_LIST_LIMIT: u64 = 100;

impl From<CampaignStatus> for CampaignStatusDto {
    fn from(status: CampaignStatus) -> Self {
        match status {
            CampaignStatus::Draft => Self::Draft,
            CampaignStatus::Active => Self::Active,
            CampaignStatus::Completed => Self::Completed,
            CampaignStatus::Cancelled => Self::Cancelled,
        }
    }
}

impl From<CampaignStatusDto> for CampaignStatus {
    fn from(status: CampaignStatusDto) -> Self {
        match status {
            CampaignStatusDto::Draft => Self::Draft,
            CampaignStatusDto::Active => Self::Active,
            CampaignStatusDto::Completed => Self::Completed,
            CampaignStatusDto::Cancelled => Self::Cancelled,
        }
    }
}

impl From<CampaignModel> for CampaignDto {
    fn from(campaign: CampaignModel) -> Self {
        Self {
            id: campaign.id,
            title: campaign.title,
            description: campaign.description,
            goal_amount: campaign.goal_amount,
            raised_amount: campaign.raised_amount,
            status: campaign.status.into(),
            end_date: campaign.end_date,
            created_by: campaign.created_by,
            created_at: campaign.created_at,
            updated_at: campaign.updated_at,
        }
    }
}

/// Service for managing fundraising campaigns.
pub struct CampaignService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CampaignService<'a> {
    /// Creates a new instance of CampaignService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists campaigns newest first.
    ///
    /// The requested limit is capped at [`MAX_LIST_LIMIT`].
    pub async fn list(&self, input: ListCampaignsInput) -> Result<Vec<CampaignDto>, Error> {
        let limit = input.limit.unwrap_or(MAX_LIST_LIMIT).min(MAX_LIST_LIMIT);

        let campaigns = CampaignRepository::new(self.db)
            .list(input.status.map(Into::into), Some(limit))
            .await?;

        Ok(campaigns.into_iter().map(CampaignDto::from).collect())
    }

    /// Retrieves a single campaign.
    ///
    /// # Returns
    /// - `Ok(CampaignDto)` - Campaign found
    /// - `Err(Error::NotFound)` - No campaign with that ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get(&self, campaign_id: i32) -> Result<CampaignDto, Error> {
        Ok(self.find(campaign_id).await?.into())
    }

    /// Creates a new active campaign.
    ///
    /// # Arguments
    /// - `input` - Campaign details, title must not be blank and the goal must be positive
    /// - `created_by` - ID of the signed-in user creating the campaign, if any
    pub async fn create(
        &self,
        input: CreateCampaignInput,
        created_by: Option<i32>,
    ) -> Result<CampaignDto, Error> {
        let title = required_text("Title", &input.title)?;
        let goal_amount = positive_amount("Goal amount", input.goal_amount)?;
        let description = input.description.trim().to_string();

        let campaign = CampaignRepository::new(self.db)
            .create(title, description, goal_amount, input.end_date, created_by)
            .await?;

        Ok(campaign.into())
    }

    /// Updates the provided fields of a campaign.
    pub async fn update(&self, input: UpdateCampaignInput) -> Result<CampaignDto, Error> {
        let campaign = self.find(input.id).await?;

        let changes = CampaignChanges {
            title: input
                .title
                .as_deref()
                .map(|title| required_text("Title", title))
                .transpose()?,
            description: optional_text(input.description),
            goal_amount: input
                .goal_amount
                .map(|amount| positive_amount("Goal amount", amount))
                .transpose()?,
            status: input.status.map(Into::into),
            end_date: input.end_date,
        };

        let campaign = CampaignRepository::new(self.db)
            .update(campaign, changes)
            .await?;

        Ok(campaign.into())
    }

    /// Deletes a campaign that has not received any donations.
    ///
    /// The campaign row stays locked between the donation count and the delete, so a
    /// donation recorded concurrently either lands first and is counted, or waits.
    ///
    /// # Returns
    /// - `Ok(true)` - Campaign deleted
    /// - `Err(Error::NotFound)` - No campaign with that ID
    /// - `Err(Error::Conflict)` - Campaign has donations and must be kept for the record
    pub async fn delete(&self, campaign_id: i32) -> Result<bool, Error> {
        let txn = self.db.begin().await?;

        let campaign_repo = CampaignRepository::new(&txn);
        let campaign = campaign_repo
            .get_by_id_for_update(campaign_id)
            .await?
            .ok_or(Error::NotFound {
                entity: "Campaign",
                id: campaign_id,
            })?;

        let donations = DonationRepository::new(&txn)
            .count_for_campaign(campaign.id)
            .await?;
        if donations > 0 {
            return Err(has_donations(campaign.id, Some(donations)));
        }

        let result = campaign_repo
            .delete(campaign.id)
            .await
            .map_err(|err| delete_error(campaign.id, err))?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    async fn find(&self, campaign_id: i32) -> Result<CampaignModel, Error> {
        CampaignRepository::new(self.db)
            .get_by_id(campaign_id)
            .await?
            .ok_or(Error::NotFound {
                entity: "Campaign",
                id: campaign_id,
            })
    }
}

fn has_donations(campaign_id: i32, donations: Option<u64>) -> Error {
    let count = donations.map_or("donations".to_string(), |n| format!("{} donation(s)", n));

    Error::Conflict(format!(
        "Campaign {} has {} and cannot be deleted, cancel it instead",
        campaign_id, count
    ))
}

/// A donation referencing the campaign surfaces as a foreign key violation
fn delete_error(campaign_id: i32, err: DbErr) -> Error {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => has_donations(campaign_id, None),
        _ => err.into(),
    }
}
