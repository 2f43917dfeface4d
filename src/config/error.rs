//! Configuration errors

use thiserror::Error;

/// Loading or validating the configuration failed
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Configuration rejected: {0}")]
    Invalid(#[from] ValidationError),
}

/// A configuration value is present but unusable
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required setting {0}")]
    MissingRequired(&'static str),

    #[error("Port must be non-zero")]
    InvalidPort,

    #[error("Host {0:?} is not an IP address")]
    InvalidHost(String),

    #[error("Request timeout must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("Database URL must use the postgres:// or postgresql:// scheme")]
    InvalidDatabaseUrl,

    #[error("Database min_connections is greater than max_connections")]
    InvalidPoolSize,

    #[error("Database max_connections is above 100")]
    PoolSizeTooLarge,
}
