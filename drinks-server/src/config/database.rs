use confique::Config;

/// Configuration for the drinks database
#[derive(Debug, Config, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection string (default: sqlite://drinks.db?mode=rwc)
    #[config(env = "DRINKS_DATABASE_URL", default = "sqlite://drinks.db?mode=rwc")]
    pub url: String,

    /// Maximum number of pooled connections (default: 5)
    #[config(env = "DRINKS_DATABASE_MAX_CONNECTIONS", default = 5)]
    pub max_connections: u32,

    /// Drop and recreate the drinks table on startup (default: true)
    #[config(env = "DRINKS_DATABASE_RESET_ON_START", default = true)]
    pub reset_on_start: bool,
}
