use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_wamumbi_user::WamumbiUser;

static IDX_CAMPAIGN_STATUS: &str = "idx_campaign_status";
static FK_CAMPAIGN_CREATED_BY: &str = "fk_campaign_created_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Campaign::Table)
                    .if_not_exists()
                    .col(pk_auto(Campaign::Id))
                    .col(string(Campaign::Title))
                    .col(text(Campaign::Description))
                    .col(big_integer(Campaign::GoalAmount))
                    .col(big_integer(Campaign::RaisedAmount).default(0))
                    .col(string_len(Campaign::Status, 16).default("active"))
                    .col(timestamp_null(Campaign::EndDate))
                    .col(integer_null(Campaign::CreatedBy))
                    .col(timestamp(Campaign::CreatedAt))
                    .col(timestamp(Campaign::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CAMPAIGN_STATUS)
                    .table(Campaign::Table)
                    .col(Campaign::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CAMPAIGN_CREATED_BY)
                    .from_tbl(Campaign::Table)
                    .from_col(Campaign::CreatedBy)
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
                    .name(FK_CAMPAIGN_CREATED_BY)
                    .table(Campaign::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CAMPAIGN_STATUS)
                    .table(Campaign::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Campaign::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Campaign {
    Table,
    Id,
    Title,
    Description,
    GoalAmount,
    RaisedAmount,
    Status,
    EndDate,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
