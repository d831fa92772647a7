use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error occurred while reading config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error occurred
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Main configuration structure for the data layer
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// Database connection configuration
    pub database: DatabaseConfig,
}

/// Database connection configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    /// Database host
    pub host: String,
    /// Database port
    pub port: u16,
    /// Database user
    pub user: String,
    /// Environment variable containing the password
    pub password_env: Option<String>,
    /// Database name
    pub dbname: String,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}
