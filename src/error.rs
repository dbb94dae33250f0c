//! Error types for toolmatch
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in toolmatch
#[derive(Debug, Error)]
pub enum ToolmatchError {
    /// Query is missing a field or carries an unusable value
    #[error("Malformed query: {0}")]
    MalformedQuery(String),

    /// Tool not found in the catalog
    #[error("Tool not found: {0}")]
    ToolNotFound(i64),

    /// Storage/persistence error
    #[error("Storage error: {0}")]
    Storage(String),

    /// SQLite error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML seed file error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for toolmatch operations
pub type Result<T> = std::result::Result<T, ToolmatchError>;
