use dioxus_logger::tracing;

use crate::server::error::config::ConfigError;

/// Public route patterns used when `PUBLIC_ROUTES` is not set.
///
/// The leading `"(.*)"` makes every path public, so the patterns after it are never
/// consulted. Protected routes must be defined by a product decision before this changes.
pub const DEFAULT_PUBLIC_ROUTES: &[&str] = &["(.*)", "/", "/sign-in(.*)", "/sign-up(.*)", "/api/openapi"];

/// Runtime configuration, built once at startup and passed by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Connection string for the backing database
    pub database_url: String,
    /// Route patterns that bypass the sign-in requirement
    pub public_routes: Vec<String>,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// Call after loading `.env.local` with dotenvy.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Returns
    /// - `Ok(Config)`: All required values present
    /// - `Err(ConfigError::MissingEnvVar)`: `DATABASE_URL` missing or empty
    /// - `Err(ConfigError::InvalidEnvValue)`: `PUBLIC_ROUTES` contains no patterns
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        // Quoted values usually mean the env file was escaped twice, the connection
        // attempt will fail later so only warn here.
        if database_url.contains('"') || database_url.contains('\'') {
            tracing::warn!(
                "DATABASE_URL contains quote characters, run `check-env` to inspect the value"
            );
        }

        let public_routes = match lookup("PUBLIC_ROUTES") {
            Some(value) => {
                let routes: Vec<String> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|route| !route.is_empty())
                    .map(str::to_string)
                    .collect();

                if routes.is_empty() {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "PUBLIC_ROUTES".to_string(),
                        reason: "expected a comma separated list of route patterns".to_string(),
                    });
                }

                routes
            }
            None => DEFAULT_PUBLIC_ROUTES
                .iter()
                .map(|route| route.to_string())
                .collect(),
        };

        Ok(Self {
            database_url,
            public_routes,
        })
    }
}
