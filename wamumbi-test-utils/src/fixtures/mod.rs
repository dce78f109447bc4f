//! Test fixture modules for database record creation.
//!
//! - `factory` - Active models populated with test values
//! - `user` - Wamumbi user records
//! - `campaign` - Campaign and donation records

pub mod campaign;
pub mod factory;
pub mod user;
