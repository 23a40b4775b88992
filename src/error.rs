//! Error types for hn-hiring
//!
//! This module provides error handling for the crate, including:
//! - Domain-specific error types (Config, Database, Validation, etc.)
//! - Automatic conversions from the underlying HTTP, database, and I/O errors
//! - A crate-wide [`Result`] alias

use thiserror::Error;

/// Result type alias for hn-hiring operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for hn-hiring
///
/// This is the primary error type used throughout the crate. Each variant includes
/// contextual information to help diagnose issues.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The environment variable that caused the error (e.g., "APP_ENV")
        key: Option<String>,
    },

    /// Database operation failed
    #[error("database error: {0}")]
    Database(#[from] DatabaseError),

    /// Network error while talking to the Hacker News API
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The target Hacker News user does not exist
    #[error("user '{0}' not found")]
    UserNotFound(String),

    /// Requested serialization format is not one of the supported names
    #[error("Unsupported serialization format: '{0}'")]
    UnsupportedFormat(String),

    /// Input rejected by a serializer's preconditions
    #[error("validation error: {0}")]
    Validation(String),
}

/// Database-related errors
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to connect to database
    #[error("failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create the schema
    #[error("failed to create schema: {0}")]
    SchemaFailed(String),

    /// Insert failed
    #[error("insert failed: {0}")]
    InsertFailed(String),
}
