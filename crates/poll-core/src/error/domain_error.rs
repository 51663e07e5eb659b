//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Poll not found: {0}")]
    PollNotFound(Snowflake),

    #[error("Choice not found: {0}")]
    ChoiceNotFound(Snowflake),

    #[error("Vote not found: {0}")]
    VoteNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Poll question is required")]
    QuestionRequired,

    #[error("You need at least two valid choices")]
    NotEnoughChoices,

    #[error("Please select at least one option")]
    NoChoiceSelected,

    #[error("This poll allows only one choice")]
    MultipleChoicesNotAllowed,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("You must agree to the terms")]
    TermsNotAccepted,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not the poll owner")]
    NotPollOwner,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("You have already voted in this poll")]
    AlreadyVoted { poll_id: Snowflake },

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("This poll has expired")]
    PollExpired { poll_id: Snowflake },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::PollNotFound(_) => "UNKNOWN_POLL",
            Self::ChoiceNotFound(_) => "UNKNOWN_CHOICE",
            Self::VoteNotFound(_) => "UNKNOWN_VOTE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::QuestionRequired => "QUESTION_REQUIRED",
            Self::NotEnoughChoices => "NOT_ENOUGH_CHOICES",
            Self::NoChoiceSelected => "NO_CHOICE_SELECTED",
            Self::MultipleChoicesNotAllowed => "MULTIPLE_CHOICES_NOT_ALLOWED",
            Self::PasswordMismatch => "PASSWORD_MISMATCH",
            Self::TermsNotAccepted => "TERMS_NOT_ACCEPTED",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::WeakPassword(_) => "WEAK_PASSWORD",

            // Authorization
            Self::NotPollOwner => "NOT_POLL_OWNER",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::AlreadyVoted { .. } => "ALREADY_VOTED",

            // Business Rules
            Self::PollExpired { .. } => "POLL_EXPIRED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::PollNotFound(_)
                | Self::ChoiceNotFound(_)
                | Self::VoteNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::QuestionRequired
                | Self::NotEnoughChoices
                | Self::NoChoiceSelected
                | Self::MultipleChoicesNotAllowed
                | Self::PasswordMismatch
                | Self::TermsNotAccepted
                | Self::InvalidEmail
                | Self::WeakPassword(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists | Self::AlreadyVoted { .. })
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotPollOwner)
    }
}
