//! Database connection configuration.

/// Postgres connection parameters, read from the environment.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Database host (default: "localhost").
    pub host: String,
    /// Database port (default: 5432).
    pub port: u16,
    /// Database user (default: "postgres").
    pub username: String,
    /// Database password.
    pub password: String,
    /// Database name (default: "finonex").
    pub database: String,
}

impl DbConfig {
    /// Load connection parameters from `DB_*` environment variables,
    /// falling back to defaults for anything unset.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".into()),
            port: std::env::var("DB_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5432),
            username: std::env::var("DB_USERNAME").unwrap_or_else(|_| "postgres".into()),
            password: std::env::var("DB_PASSWORD").unwrap_or_else(|_| "1234".into()),
            database: std::env::var("DB_NAME").unwrap_or_else(|_| "finonex".into()),
        }
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: 5432,
            username: "postgres".into(),
            password: "1234".into(),
            database: "finonex".into(),
        }
    }
}
