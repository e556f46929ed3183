/// rosterlite Error Module
///
/// This module defines the error types for the data-access layer.
/// It provides structured error handling with proper error propagation
/// and user-friendly error messages.
use thiserror::Error;

/// Error type for the rosterlite data-access layer.
///
/// This enum covers the failure scenarios the crate can surface:
/// - Database operations (connection, statements, row extraction)
/// - Entity contract violations (e.g. an update without a birthday)
/// - Configuration loading and parsing
/// - File system operations
///
/// Expected failures (duplicate key on insert, creating a table that
/// already exists, dropping one that doesn't) are NOT errors: the table
/// operations report those as a boolean `false` instead. This type is for
/// the unexpected kind.
#[derive(Error, Debug)]
pub enum RosterError {
    /// Database-related errors from SQLite operations, carrying the
    /// underlying driver error as cause
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Entity contract violations (missing required fields, etc.)
    #[error("Entity error: {0}")]
    Entity(String),

    /// Configuration loading and validation errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system and I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result to use RosterError as the error type.
///
/// This provides a consistent error type across the entire crate
/// instead of using `Result<T, String>` or mixed error types.
pub type Result<T> = std::result::Result<T, RosterError>;
