//! Domain entities - core business objects

mod choice;
mod poll;
mod user;
mod vote;

pub use choice::{sanitize_choice_texts, Choice};
pub use poll::Poll;
pub use user::User;
pub use vote::Vote;
