use sea_orm::entity::prelude::*;

/// Lifecycle state of a fundraising campaign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum CampaignStatus {
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "campaign")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub goal_amount: i64,
    pub raised_amount: i64,
    pub status: CampaignStatus,
    pub end_date: Option<DateTime>,
    pub created_by: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::wamumbi_user::Entity",
        from = "Column::CreatedBy",
        to = "super::wamumbi_user::Column::Id"
    )]
    WamumbiUser,
    #[sea_orm(has_many = "super::donation::Entity")]
    Donation,
}

impl Related<super::wamumbi_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WamumbiUser.def()
    }
}

impl Related<super::donation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Donation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
