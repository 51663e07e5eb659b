//! Entity to model mappers
//!
//! This module provides conversions between domain entities (poll-core) and database models.
//! `From<Model> for Entity` impls convert database rows to domain objects.

mod choice;
mod poll;
mod user;
mod vote;

pub use vote::vote_with_choices;
