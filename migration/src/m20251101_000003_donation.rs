use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_wamumbi_user::WamumbiUser, m20251101_000002_campaign::Campaign,
};

static IDX_DONATION_CAMPAIGN_ID: &str = "idx_donation_campaign_id";
static FK_DONATION_CAMPAIGN_ID: &str = "fk_donation_campaign_id";
static FK_DONATION_USER_ID: &str = "fk_donation_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Donation::Table)
                    .if_not_exists()
                    .col(pk_auto(Donation::Id))
                    .col(integer(Donation::CampaignId))
                    .col(integer_null(Donation::UserId))
                    .col(big_integer(Donation::Amount))
                    .col(string_null(Donation::DonorName))
                    .col(text_null(Donation::Message))
                    .col(timestamp(Donation::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DONATION_CAMPAIGN_ID)
                    .table(Donation::Table)
                    .col(Donation::CampaignId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DONATION_CAMPAIGN_ID)
                    .from_tbl(Donation::Table)
                    .from_col(Donation::CampaignId)
                    .to_tbl(Campaign::Table)
                    .to_col(Campaign::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DONATION_USER_ID)
                    .from_tbl(Donation::Table)
                    .from_col(Donation::UserId)
                    .to_tbl(WamumbiUser::Table)
                    .to_col(WamumbiUser::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DONATION_USER_ID)
                    .table(Donation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DONATION_CAMPAIGN_ID)
                    .table(Donation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DONATION_CAMPAIGN_ID)
                    .table(Donation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Donation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Donation {
    Table,
    Id,
    CampaignId,
    UserId,
    Amount,
    DonorName,
    Message,
    CreatedAt,
}
