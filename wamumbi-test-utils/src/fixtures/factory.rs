use chrono::Utc;
use sea_orm::ActiveValue;

/// Create a user active model with default test values.
///
/// # Arguments
/// - `auth_id` - Identity ID issued by the authentication provider
pub fn user(auth_id: &str) -> entity::wamumbi_user::ActiveModel {
    let now = Utc::now().naive_utc();

    entity::wamumbi_user::ActiveModel {
        auth_id: ActiveValue::Set(auth_id.to_string()),
        email: ActiveValue::Set(format!("{}@example.org", auth_id)),
        name: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
}

/// Create an active campaign with nothing raised.
///
/// # Arguments
/// - `title` - Campaign title
/// - `goal_amount` - Fundraising goal in minor currency units
pub fn campaign(title: &str, goal_amount: i64) -> entity::campaign::ActiveModel {
    let now = Utc::now().naive_utc();

    entity::campaign::ActiveModel {
        title: ActiveValue::Set(title.to_string()),
        description: ActiveValue::Set(format!("{} campaign", title)),
        goal_amount: ActiveValue::Set(goal_amount),
        raised_amount: ActiveValue::Set(0),
        status: ActiveValue::Set(entity::campaign::CampaignStatus::Active),
        end_date: ActiveValue::Set(None),
        created_by: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
}

/// Create an anonymous donation.
///
/// # Arguments
/// - `campaign_id` - Campaign receiving the donation
/// - `amount` - Donated amount in minor currency units
pub fn donation(campaign_id: i32, amount: i64) -> entity::donation::ActiveModel {
    entity::donation::ActiveModel {
        campaign_id: ActiveValue::Set(campaign_id),
        user_id: ActiveValue::Set(None),
        amount: ActiveValue::Set(amount),
        donor_name: ActiveValue::Set(None),
        message: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
}
