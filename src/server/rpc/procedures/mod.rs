//! Handlers behind each registered procedure.

/// `campaign.*` procedures
pub mod campaign;
/// `donation.*` procedures
pub mod donation;
/// `user.*` procedures
pub mod user;
