use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WamumbiUser::Table)
                    .if_not_exists()
                    .col(pk_auto(WamumbiUser::Id))
                    .col(string_uniq(WamumbiUser::AuthId))
                    .col(string(WamumbiUser::Email))
                    .col(string_null(WamumbiUser::Name))
                    .col(timestamp(WamumbiUser::CreatedAt))
                    .col(timestamp(WamumbiUser::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WamumbiUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum WamumbiUser {
    Table,
    Id,
    AuthId,
    Email,
    Name,
    CreatedAt,
    UpdatedAt,
}
