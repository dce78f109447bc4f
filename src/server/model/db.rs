//! Database model type aliases.
//!
//! Short names for the SeaORM models generated in the `entity` crate.

/// A supporter or staff member, identified by the hosted identity provider's ID.
pub type UserModel = entity::wamumbi_user::Model;

/// A fundraising campaign along with its running donation total.
pub type CampaignModel = entity::campaign::Model;

/// A single donation made to a campaign.
pub type DonationModel = entity::donation::Model;
