use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DonationDto {
    pub id: i32,
    pub campaign_id: i32,
    pub user_id: Option<i32>,
    /// Donated amount in minor currency units
    pub amount: i64,
    pub donor_name: Option<String>,
    pub message: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DonationListDto {
    pub donations: Vec<DonationDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ListDonationsInput {
    /// Only return donations made to this campaign
    pub campaign_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateDonationInput {
    pub campaign_id: i32,
    pub amount: i64,
    pub donor_name: Option<String>,
    pub message: Option<String>,
}
