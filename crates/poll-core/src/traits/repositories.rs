//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer declares what it needs from persistence; the
//! infrastructure layer provides the implementation.

use async_trait::async_trait;

use crate::entities::{Choice, Poll, User, Vote};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;

    /// Delete a user. Their votes cascade away; their polls are orphaned
    /// (creator set to NULL), not deleted.
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Poll Repository
// ============================================================================

#[async_trait]
pub trait PollRepository: Send + Sync {
    /// Find poll by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Poll>>;

    /// List all polls, newest publication first
    async fn find_all(&self) -> RepoResult<Vec<Poll>>;

    /// List a poll's choices in creation order
    async fn find_choices(&self, poll_id: Snowflake) -> RepoResult<Vec<Choice>>;

    /// Insert the poll and all of its choices atomically
    async fn create_with_choices(&self, poll: &Poll, choices: &[Choice]) -> RepoResult<()>;

    /// Mark a poll inactive
    async fn deactivate(&self, id: Snowflake) -> RepoResult<()>;

    /// Delete a poll; choices and votes cascade away
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Vote Repository
// ============================================================================

#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Find a user's vote on a poll
    async fn find_by_user_and_poll(
        &self,
        user_id: Snowflake,
        poll_id: Snowflake,
    ) -> RepoResult<Option<Vote>>;

    /// Check whether a user already voted on a poll
    async fn has_voted(&self, user_id: Snowflake, poll_id: Snowflake) -> RepoResult<bool>;

    /// Record a vote atomically: insert the vote row, attach its choices,
    /// and increment each chosen choice's counter. A concurrent duplicate
    /// for the same (user, poll) surfaces as `DomainError::AlreadyVoted`;
    /// a choice id outside the poll surfaces as `DomainError::ChoiceNotFound`
    /// and rolls the whole vote back.
    async fn create_with_choices(&self, vote: &Vote) -> RepoResult<()>;
}
