//! Business logic services.
//!
//! Services validate input, coordinate repositories, and convert database models into
//! the DTOs returned to API callers.

/// Campaign rules and DTO conversion
pub mod campaign;
/// Donation recording
pub mod donation;
/// User profiles synced from the identity provider
pub mod user;

pub use campaign::CampaignService;
pub use donation::DonationService;
pub use user::UserService;

use crate::server::error::Error;

/// Trims `value` and rejects it when nothing is left
fn required_text(field: &str, value: &str) -> Result<String, Error> {
    let value = value.trim();

    if value.is_empty() {
        return Err(Error::Validation(format!("{} must not be empty", field)));
    }

    Ok(value.to_string())
}

/// Trims `value`, treating blank text as absent
fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Largest single amount, in minor currency units, accepted for a goal or a donation
pub const MAX_AMOUNT: i64 = 1_000_000_000_000;

/// Accepts amounts in `1..=MAX_AMOUNT`
fn positive_amount(field: &str, amount: i64) -> Result<i64, Error> {
    if amount <= 0 {
        return Err(Error::Validation(format!(
            "{} must be greater than zero",
            field
        )));
    }

    if amount > MAX_AMOUNT {
        return Err(Error::Validation(format!(
            "{} must not exceed {}",
            field, MAX_AMOUNT
        )));
    }

    Ok(amount)
}
