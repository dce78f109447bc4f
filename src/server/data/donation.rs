use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::DonationModel;

/// Queries for the `donation` table
pub struct DonationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DonationRepository<'a, C> {
    /// Creates a new instance of [`DonationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a donation, the caller is responsible for updating the campaign total
    pub async fn create(
        &self,
        campaign_id: i32,
        user_id: Option<i32>,
        amount: i64,
        donor_name: Option<String>,
        message: Option<String>,
    ) -> Result<DonationModel, DbErr> {
        let donation = entity::donation::ActiveModel {
            campaign_id: ActiveValue::Set(campaign_id),
            user_id: ActiveValue::Set(user_id),
            amount: ActiveValue::Set(amount),
            donor_name: ActiveValue::Set(donor_name),
            message: ActiveValue::Set(message),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        donation.insert(self.db).await
    }

    /// Lists donations newest first, optionally only those for one campaign
    pub async fn list(&self, campaign_id: Option<i32>) -> Result<Vec<DonationModel>, DbErr> {
        let mut query = entity::prelude::Donation::find()
            .order_by_desc(entity::donation::Column::CreatedAt)
            .order_by_desc(entity::donation::Column::Id);

        if let Some(campaign_id) = campaign_id {
            query = query.filter(entity::donation::Column::CampaignId.eq(campaign_id));
        }

        query.all(self.db).await
    }

    /// Counts donations made to a campaign
    pub async fn count_for_campaign(&self, campaign_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Donation::find()
            .filter(entity::donation::Column::CampaignId.eq(campaign_id))
            .count(self.db)
            .await
    }
}
