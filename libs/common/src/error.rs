//! Custom error types for the common library
//!
//! This module defines the database error taxonomy shared by every service.
//! Raw `sqlx` errors are classified once, so handlers can tell constraint
//! violations (conflicts, dangling references) apart from real failures.

use sqlx::Error as SqlxError;
use thiserror::Error;

/// Custom error type for database operations
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error occurred during database connection
    #[error("Database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// Error occurred during database query execution
    #[error("Database query error: {0}")]
    Query(#[source] SqlxError),

    /// Error occurred during database migration
    #[error("Database migration error: {0}")]
    Migration(String),

    /// Configuration error
    #[error("Database configuration error: {0}")]
    Configuration(String),

    /// A unique constraint rejected the write; carries the constraint name
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    /// A foreign key pointed at a missing row; carries the constraint name
    #[error("Foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),
}

impl DatabaseError {
    /// Whether this error was raised by the named unique constraint
    pub fn is_unique_violation_of(&self, constraint: &str) -> bool {
        matches!(self, DatabaseError::UniqueViolation(name) if name == constraint)
    }

    /// Whether this error was raised by the named foreign key
    pub fn is_foreign_key_violation_of(&self, constraint: &str) -> bool {
        matches!(self, DatabaseError::ForeignKeyViolation(name) if name == constraint)
    }
}

impl From<SqlxError> for DatabaseError {
    fn from(err: SqlxError) -> Self {
        if let SqlxError::Database(db_err) = &err {
            let constraint = db_err.constraint().unwrap_or_default().to_string();
            if db_err.is_unique_violation() {
                return DatabaseError::UniqueViolation(constraint);
            }
            if db_err.is_foreign_key_violation() {
                return DatabaseError::ForeignKeyViolation(constraint);
            }
        }

        match err {
            SqlxError::PoolTimedOut | SqlxError::PoolClosed | SqlxError::Io(_) => {
                DatabaseError::Connection(err)
            }
            other => DatabaseError::Query(other),
        }
    }
}

/// Type alias for Result with DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;
