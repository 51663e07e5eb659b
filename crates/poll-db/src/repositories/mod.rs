//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in poll-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod poll;
mod user;
mod vote;

pub use poll::PgPollRepository;
pub use user::PgUserRepository;
pub use vote::PgVoteRepository;
