//! Database error types.
//!
//! This module provides abstracted error types for storage operations.
//! It uses miette for fancy diagnostic output and thiserror for derive macros.
//! The error types are storage-backend agnostic.

use miette::Diagnostic;
use thiserror::Error;

use super::validation::ValidationError;

/// Storage operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Validation error: {source}")]
    #[diagnostic(code(folio::db::validation_error))]
    Validation {
        #[from]
        source: ValidationError,
    },

    #[error("Database error: {message}")]
    #[diagnostic(code(folio::db::database_error))]
    Database { message: String },

    #[error("Serialization error: {message}")]
    #[diagnostic(code(folio::db::serialization_error))]
    Serialization { message: String },

    #[error("Migration error: {message}")]
    #[diagnostic(code(folio::db::migration_error))]
    Migration { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(
        code(folio::db::connection_error),
        help("Check the database URL and name (FOLIO_DATABASE_URL, FOLIO_DATABASE_NAME)")
    )]
    Connection { message: String },
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        DbError::Database {
            message: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for DbError {
    fn from(e: serde_json::Error) -> Self {
        DbError::Serialization {
            message: e.to_string(),
        }
    }
}

/// Result type for storage operations.
pub type DbResult<T> = Result<T, DbError>;
