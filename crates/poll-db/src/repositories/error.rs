//! Error handling utilities for repositories

use poll_core::error::DomainError;
use poll_core::value_objects::Snowflake;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: Snowflake) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "poll not found" error
pub fn poll_not_found(id: Snowflake) -> DomainError {
    DomainError::PollNotFound(id)
}

/// Create a "choice not found" error
pub fn choice_not_found(id: Snowflake) -> DomainError {
    DomainError::ChoiceNotFound(id)
}
