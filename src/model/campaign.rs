use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatusDto {
    Draft,
    Active,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CampaignDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    /// Fundraising goal in minor currency units
    pub goal_amount: i64,
    /// Total donated so far in minor currency units
    pub raised_amount: i64,
    pub status: CampaignStatusDto,
    pub end_date: Option<NaiveDateTime>,
    pub created_by: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl CampaignDto {
    /// Percentage of the goal raised, capped at 100
    pub fn progress_percent(&self) -> u8 {
        if self.goal_amount <= 0 {
            return 0;
        }

        let percent = self.raised_amount.max(0).saturating_mul(100) / self.goal_amount;

        percent.min(100) as u8
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CampaignListDto {
    pub campaigns: Vec<CampaignDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ListCampaignsInput {
    /// Only return campaigns with this status
    pub status: Option<CampaignStatusDto>,
    /// Maximum number of campaigns to return
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateCampaignInput {
    pub title: String,
    pub description: String,
    pub goal_amount: i64,
    pub end_date: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateCampaignInput {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub goal_amount: Option<i64>,
    pub status: Option<CampaignStatusDto>,
    pub end_date: Option<NaiveDateTime>,
}
