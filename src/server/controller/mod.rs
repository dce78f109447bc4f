//! HTTP controller endpoints for the Wamumbi web API.
//!
//! This module contains the Axum handlers behind the RPC dispatch route, the generated API
//! documentation, and the legacy login path. Controllers translate HTTP requests into calls
//! on the RPC router or documentation generator and wrap the outcome in HTTP responses.

/// Legacy login redirect
pub mod auth;
/// API document endpoint
pub mod openapi;
/// RPC dispatch endpoint
pub mod rpc;
