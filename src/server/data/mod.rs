//! Database repositories.
//!
//! Each repository wraps a borrowed connection and exposes the queries used by the
//! service layer. Repositories accept any `ConnectionTrait` so they can run inside a
//! transaction.

/// Campaign queries
pub mod campaign;
/// Donation queries
pub mod donation;
/// User queries
pub mod user;

pub use campaign::CampaignRepository;
pub use donation::DonationRepository;
pub use user::UserRepository;
