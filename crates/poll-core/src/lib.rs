//! # poll-core
//!
//! Domain layer containing entities, value objects, repository traits, and
//! the results-tallying logic. This crate has zero dependencies on
//! infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod tally;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{sanitize_choice_texts, Choice, Poll, User, Vote};
pub use error::DomainError;
pub use tally::{total_votes, ChoiceTally, PollTally};
pub use traits::{PollRepository, RepoResult, UserRepository, VoteRepository};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
