pub use sea_orm_migration::prelude::*;

mod m20251101_000001_wamumbi_user;
mod m20251101_000002_campaign;
mod m20251101_000003_donation;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_wamumbi_user::Migration),
            Box::new(m20251101_000002_campaign::Migration),
            Box::new(m20251101_000003_donation::Migration),
        ]
    }
}
