use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, IntoActiveModel};

use crate::{error::TestError, fixtures::factory, TestSetup};

impl TestSetup {
    pub fn campaign<'a>(&'a mut self) -> CampaignFixtures<'a> {
        CampaignFixtures { setup: self }
    }
}

pub struct CampaignFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> CampaignFixtures<'a> {
    pub async fn insert_campaign(
        &self,
        title: &str,
        goal_amount: i64,
    ) -> Result<entity::campaign::Model, TestError> {
        Ok(
            entity::prelude::Campaign::insert(factory::campaign(title, goal_amount))
                .exec_with_returning(&self.setup.state.db)
                .await?,
        )
    }

    /// Insert an anonymous donation and add it to the campaign's raised amount.
    ///
    /// Returns the donation along with the updated campaign.
    pub async fn insert_donation(
        &self,
        campaign: entity::campaign::Model,
        amount: i64,
    ) -> Result<(entity::donation::Model, entity::campaign::Model), TestError> {
        let donation = entity::prelude::Donation::insert(factory::donation(campaign.id, amount))
            .exec_with_returning(&self.setup.state.db)
            .await?;

        let raised_amount = campaign.raised_amount + amount;
        let mut campaign = campaign.into_active_model();
        campaign.raised_amount = ActiveValue::Set(raised_amount);
        let campaign = campaign.update(&self.setup.state.db).await?;

        Ok((donation, campaign))
    }
}
