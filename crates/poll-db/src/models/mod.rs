//! Database models - SQLx-compatible structs for PostgreSQL tables

mod choice;
mod poll;
mod user;
mod vote;

pub use choice::ChoiceModel;
pub use poll::PollModel;
pub use user::UserModel;
pub use vote::VoteModel;
