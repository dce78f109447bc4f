//! Server application models and type definitions.
//!
//! This module contains the shared application state handed to every handler, database
//! model type aliases, and typed session data.

/// State shared by every handler
pub mod app;
pub mod db;
pub mod session;
