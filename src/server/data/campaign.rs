use chrono::{NaiveDateTime, Utc};
use entity::campaign::CampaignStatus;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, ExprTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::db::CampaignModel;

/// Fields of a campaign that may be changed after creation
#[derive(Debug, Default)]
pub struct CampaignChanges {
    /// New title
    pub title: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New goal in minor currency units
    pub goal_amount: Option<i64>,
    /// New lifecycle status
    pub status: Option<CampaignStatus>,
    /// New end date, an existing end date cannot be cleared
    pub end_date: Option<NaiveDateTime>,
}

/// Queries for the `campaign` table
pub struct CampaignRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CampaignRepository<'a, C> {
    /// Creates a new instance of [`CampaignRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new active campaign with nothing raised yet
    pub async fn create(
        &self,
        title: String,
        description: String,
        goal_amount: i64,
        end_date: Option<NaiveDateTime>,
        created_by: Option<i32>,
    ) -> Result<CampaignModel, DbErr> {
        let now = Utc::now().naive_utc();

        let campaign = entity::campaign::ActiveModel {
            title: ActiveValue::Set(title),
            description: ActiveValue::Set(description),
            goal_amount: ActiveValue::Set(goal_amount),
            raised_amount: ActiveValue::Set(0),
            status: ActiveValue::Set(CampaignStatus::Active),
            end_date: ActiveValue::Set(end_date),
            created_by: ActiveValue::Set(created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        campaign.insert(self.db).await
    }

    /// Retrieves a campaign by ID
    pub async fn get_by_id(&self, campaign_id: i32) -> Result<Option<CampaignModel>, DbErr> {
        entity::prelude::Campaign::find_by_id(campaign_id)
            .one(self.db)
            .await
    }

    /// Retrieves a campaign and holds a row lock on it until the surrounding transaction ends
    ///
    /// Backends without row locking (SQLite) run the plain select.
    pub async fn get_by_id_for_update(
        &self,
        campaign_id: i32,
    ) -> Result<Option<CampaignModel>, DbErr> {
        entity::prelude::Campaign::find_by_id(campaign_id)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    /// Lists campaigns newest first, optionally filtered by status
    pub async fn list(
        &self,
        status: Option<CampaignStatus>,
        limit: Option<u64>,
    ) -> Result<Vec<CampaignModel>, DbErr> {
        let mut query = entity::prelude::Campaign::find()
            .order_by_desc(entity::campaign::Column::CreatedAt)
            .order_by_desc(entity::campaign::Column::Id);

        if let Some(status) = status {
            query = query.filter(entity::campaign::Column::Status.eq(status));
        }

        query.limit(limit).all(self.db).await
    }

    /// Applies the provided changes, leaving unset fields untouched
    pub async fn update(
        &self,
        campaign: CampaignModel,
        changes: CampaignChanges,
    ) -> Result<CampaignModel, DbErr> {
        let mut campaign: entity::campaign::ActiveModel = campaign.into();

        if let Some(title) = changes.title {
            campaign.title = ActiveValue::Set(title);
        }
        if let Some(description) = changes.description {
            campaign.description = ActiveValue::Set(description);
        }
        if let Some(goal_amount) = changes.goal_amount {
            campaign.goal_amount = ActiveValue::Set(goal_amount);
        }
        if let Some(status) = changes.status {
            campaign.status = ActiveValue::Set(status);
        }
        if let Some(end_date) = changes.end_date {
            campaign.end_date = ActiveValue::Set(Some(end_date));
        }
        campaign.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        campaign.update(self.db).await
    }

    /// Adds `amount` to the campaign's raised total
    ///
    /// The increment is evaluated by the database against the stored total, never against a
    /// previously read model. Callers are responsible for checking the sum fits in an `i64`.
    ///
    /// # Returns
    /// - `Ok(Some(CampaignModel))` - Campaign with its updated total
    /// - `Ok(None)` - No campaign with that ID
    pub async fn add_to_raised(
        &self,
        campaign_id: i32,
        amount: i64,
    ) -> Result<Option<CampaignModel>, DbErr> {
        let result = entity::prelude::Campaign::update_many()
            .col_expr(
                entity::campaign::Column::RaisedAmount,
                Expr::col(entity::campaign::Column::RaisedAmount).add(amount),
            )
            .col_expr(
                entity::campaign::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::campaign::Column::Id.eq(campaign_id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get_by_id(campaign_id).await
    }

    /// Deletes a campaign
    ///
    /// Returns OK regardless of the campaign existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, campaign_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Campaign::delete_by_id(campaign_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use entity::campaign::CampaignStatus;
    use sea_orm::EntityTrait;
    use wamumbi_test_utils::prelude::*;

    use super::{CampaignChanges, CampaignRepository};

    /// Expect new campaigns to start active with nothing raised
    #[tokio::test]
    async fn creates_active_campaign() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        let campaign_repo = CampaignRepository::new(&test.state.db);

        let campaign = campaign_repo
            .create(
                "School meals".to_string(),
                "Lunch for 200 pupils".to_string(),
                50_000,
                None,
                None,
            )
            .await?;

        assert_eq!(campaign.status, CampaignStatus::Active);
        assert_eq!(campaign.raised_amount, 0);
        assert_eq!(campaign.goal_amount, 50_000);

        Ok(())
    }

    /// Expect the list to be newest first and honour the status filter and limit
    #[tokio::test]
    async fn lists_with_filter_and_limit() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_campaign("First", 1_000)
            .with_campaign("Second", 2_000)
            .with_campaign("Third", 3_000)
            .build()
            .await?;
        let campaign_repo = CampaignRepository::new(&test.state.db);

        let second = test.campaigns[1].clone();
        campaign_repo
            .update(
                second,
                CampaignChanges {
                    status: Some(CampaignStatus::Completed),
                    ..Default::default()
                },
            )
            .await?;

        let all = campaign_repo.list(None, None).await?;
        let active = campaign_repo.list(Some(CampaignStatus::Active), None).await?;
        let limited = campaign_repo.list(None, Some(1)).await?;

        assert_eq!(all.len(), 3);
        assert_eq!(all[0].title, "Third");
        assert_eq!(active.len(), 2);
        assert!(active.iter().all(|c| c.title != "Second"));
        assert_eq!(limited.len(), 1);

        Ok(())
    }

    /// Expect only the provided fields to change on update
    #[tokio::test]
    async fn updates_only_provided_fields() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_campaign("Boreholes", 10_000)
            .build()
            .await?;
        let campaign_repo = CampaignRepository::new(&test.state.db);
        let campaign = test.campaigns[0].clone();

        let updated = campaign_repo
            .update(
                campaign.clone(),
                CampaignChanges {
                    goal_amount: Some(20_000),
                    ..Default::default()
                },
            )
            .await?;

        assert_eq!(updated.goal_amount, 20_000);
        assert_eq!(updated.title, campaign.title);
        assert_eq!(updated.description, campaign.description);

        Ok(())
    }

    #[tokio::test]
    async fn adds_to_raised_amount() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_campaign("Boreholes", 10_000)
            .build()
            .await?;
        let campaign_repo = CampaignRepository::new(&test.state.db);
        let campaign_id = test.campaigns[0].id;

        campaign_repo.add_to_raised(campaign_id, 2_500).await?;
        let campaign = campaign_repo.add_to_raised(campaign_id, 500).await?.unwrap();

        assert_eq!(campaign.raised_amount, 3_000);

        Ok(())
    }

    /// Expect increments issued from the same earlier read to both count
    #[tokio::test]
    async fn adds_to_raised_amount_from_stale_read() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_campaign("Boreholes", 10_000)
            .build()
            .await?;
        let campaign_repo = CampaignRepository::new(&test.state.db);
        let stale = campaign_repo.get_by_id(test.campaigns[0].id).await?.unwrap();

        campaign_repo.add_to_raised(stale.id, 100).await?;
        campaign_repo.add_to_raised(stale.id, 200).await?;

        let campaign = campaign_repo.get_by_id(stale.id).await?.unwrap();
        assert_eq!(stale.raised_amount, 0);
        assert_eq!(campaign.raised_amount, 300);

        Ok(())
    }

    #[tokio::test]
    async fn add_to_raised_returns_none_for_unknown_campaign() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        let campaign_repo = CampaignRepository::new(&test.state.db);

        let result = campaign_repo.add_to_raised(42, 100).await?;

        assert!(result.is_none());

        Ok(())
    }

    /// Expect the locking read to return the same row as a plain read
    #[tokio::test]
    async fn gets_campaign_for_update() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_campaign("Boreholes", 10_000)
            .build()
            .await?;
        let campaign_repo = CampaignRepository::new(&test.state.db);
        let campaign_id = test.campaigns[0].id;

        let locked = campaign_repo.get_by_id_for_update(campaign_id).await?;
        let missing = campaign_repo.get_by_id_for_update(campaign_id + 1).await?;

        assert_eq!(locked.map(|c| c.title), Some("Boreholes".to_string()));
        assert!(missing.is_none());

        Ok(())
    }

    /// Expect deletion to remove the row, and report no rows for an unknown ID
    #[tokio::test]
    async fn deletes_campaign() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_campaign("Boreholes", 10_000)
            .build()
            .await?;
        let campaign_repo = CampaignRepository::new(&test.state.db);
        let campaign_id = test.campaigns[0].id;

        let missing = campaign_repo.delete(campaign_id + 1).await?;
        let deleted = campaign_repo.delete(campaign_id).await?;

        assert_eq!(missing.rows_affected, 0);
        assert_eq!(deleted.rows_affected, 1);
        assert!(entity::prelude::Campaign::find_by_id(campaign_id)
            .one(&test.state.db)
            .await?
            .is_none());

        Ok(())
    }
}
