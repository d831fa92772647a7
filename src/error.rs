//! Error types for the data-access layer

use bb8::RunError;
use thiserror::Error;

/// Errors surfaced by pool management and query execution
#[derive(Debug, Error)]
pub enum DbError {
    /// Connection pool checkout error
    #[error("Pool error: {0}")]
    Pool(#[from] RunError<tokio_postgres::Error>),

    /// Database query error
    #[error("Database query error: {0}")]
    Query(#[from] tokio_postgres::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for data-access operations
pub type Result<T> = std::result::Result<T, DbError>;
