//! Repository traits implemented by the infrastructure layer

mod repositories;

pub use repositories::{PollRepository, RepoResult, UserRepository, VoteRepository};
