use sea_orm::ConnectOptions;
use std::time::Duration;
use tracing::log::LevelFilter;

#[cfg(feature = "config")]
use core_config::{env_or_default, env_parse_or_default, ConfigError, FromEnv};

/// Connection string used when `DATABASE_URL` is unset.
pub const DEFAULT_DATABASE_URL: &str = "mysql://root@localhost:3306/dbproductos";

/// MySQL connection configuration
///
/// Holds the connection string and pool settings. Can be built manually or
/// loaded from environment variables (with the `config` feature).
///
/// # Example
///
/// ```ignore
/// use database::mysql::MySqlConfig;
///
/// let config = MySqlConfig::new("mysql://root@localhost:3306/dbproductos");
/// let options = config.into_connect_options();
/// ```
#[derive(Clone, Debug)]
pub struct MySqlConfig {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections kept open
    pub min_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Connection acquire timeout in seconds
    pub acquire_timeout_secs: u64,

    /// Enable SQL statement logging
    pub sqlx_logging: bool,

    /// SQL logging level
    pub sqlx_logging_level: LevelFilter,
}

impl MySqlConfig {
    /// Create a new MySqlConfig with default pool settings
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Convert this config into SeaORM ConnectOptions
    pub fn into_connect_options(self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.url);
        opt.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .sqlx_logging(self.sqlx_logging)
            .sqlx_logging_level(self.sqlx_logging_level);
        opt
    }

    /// Get a reference to the database URL
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for MySqlConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 8,
            acquire_timeout_secs: 8,
            sqlx_logging: true,
            sqlx_logging_level: LevelFilter::Debug,
        }
    }
}

/// Load MySqlConfig from environment variables
///
/// Environment variables:
/// - `DATABASE_URL` (optional, default: `mysql://root@localhost:3306/dbproductos`)
/// - `DB_MAX_CONNECTIONS` (optional, default: 10)
/// - `DB_MIN_CONNECTIONS` (optional, default: 1)
/// - `DB_CONNECT_TIMEOUT_SECS` (optional, default: 8)
/// - `DB_ACQUIRE_TIMEOUT_SECS` (optional, default: 8)
/// - `DB_SQLX_LOGGING` (optional, default: true)
#[cfg(feature = "config")]
impl FromEnv for MySqlConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env_or_default("DATABASE_URL", DEFAULT_DATABASE_URL),
            max_connections: env_parse_or_default("DB_MAX_CONNECTIONS", "10")?,
            min_connections: env_parse_or_default("DB_MIN_CONNECTIONS", "1")?,
            connect_timeout_secs: env_parse_or_default("DB_CONNECT_TIMEOUT_SECS", "8")?,
            acquire_timeout_secs: env_parse_or_default("DB_ACQUIRE_TIMEOUT_SECS", "8")?,
            sqlx_logging: env_parse_or_default("DB_SQLX_LOGGING", "true")?,
            sqlx_logging_level: LevelFilter::Debug,
        })
    }
}
