//! Route protection.
//!
//! [`matcher::RouteMatcher`] classifies request paths as public or protected and
//! [`auth::auth_middleware`] enforces the classification on every request it applies to.

/// Middleware rejecting unauthenticated requests to protected routes
pub mod auth;
/// Public route patterns
pub mod matcher;

pub use auth::auth_middleware;
pub use matcher::RouteMatcher;
