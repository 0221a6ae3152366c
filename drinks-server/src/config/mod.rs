pub(crate) use crate::config::auth::AuthConfig;
pub(crate) use crate::config::database::DatabaseConfig;
use confique::Config;

pub mod auth;
pub mod database;

/// Main configuration structure for the drinks server
#[derive(Debug, Config, Clone)]
pub struct Settings {
    /// The port the server will listen to (default: 5000)
    #[config(env = "DRINKS_PORT", default = 5000)]
    pub port: u16,

    /// Status code returned when the public drinks listing fails (default: 455).
    ///
    /// 455 is not a registered HTTP status; deployments that want a regular
    /// server error can set this to 500.
    #[config(env = "DRINKS_LIST_FAULT_STATUS", default = 455)]
    pub list_fault_status: u16,

    /// Database configuration
    #[config(nested)]
    pub database: DatabaseConfig,

    /// Token verification configuration
    #[config(nested)]
    pub auth: AuthConfig,
}

impl Settings {
    /// Creates a new Settings instance from environment variables
    pub fn new() -> Result<Self, confique::Error> {
        Self::builder().env().load()
    }

    #[cfg(test)]
    pub fn for_test_with_mocks(jwks_mock: &wiremock::MockServer) -> Self {
        Self {
            port: 0, // Let the OS choose a port
            list_fault_status: 455,
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                // every in-memory connection is its own database
                max_connections: 1,
                reset_on_start: true,
            },
            auth: AuthConfig {
                domain: "drinks-test.local".to_string(),
                audience: "drinks".to_string(),
                algorithm: "RS256".to_string(),
                issuer: Some(crate::test_utils::TEST_ISSUER.to_string()),
                jwks_url: Some(format!("{}/.well-known/jwks.json", jwks_mock.uri())),
                jwks_timeout: 2,
                jwks_cache_ttl: None,
                leeway: 0,
            },
        }
    }
}
