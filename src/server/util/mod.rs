//! Utility functions and helpers for server operations.

pub mod env_check;
