//! Error types for the cache layer

use thiserror::Error;

/// Errors that can occur during cache operations
#[derive(Error, Debug)]
pub enum CacheError {
    /// SQLite error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A cached value could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backend URL has an unknown scheme or is malformed
    #[error("Invalid cache URL: {0}")]
    InvalidUrl(String),

    /// The operation did not finish within the configured timeout
    #[error("Cache operation timed out after {0}ms")]
    Timeout(u64),

    /// The backend cannot serve requests
    #[error("Cache unavailable: {0}")]
    Unavailable(String),
}
