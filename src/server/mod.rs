//! Server application core modules.
//!
//! This module contains all server-side functionality for Wamumbi, including HTTP routing,
//! the RPC procedure layer consumed by the web client, generated API documentation, route
//! protection middleware, and database access for campaigns, donations, and users.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// Environment configuration
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod openapi;
pub mod router;
pub mod rpc;
pub mod service;
/// Database and session setup run once at boot
pub mod startup;
pub mod util;
