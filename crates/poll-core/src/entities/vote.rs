//! Vote entity - one user's single, immutable vote on a poll

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Vote entity
///
/// At most one Vote exists per (user, poll) pair; the choices it
/// references always belong to the same poll. Votes are never edited
/// or retracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub id: Snowflake,
    pub poll_id: Snowflake,
    pub user_id: Snowflake,
    pub choice_ids: Vec<Snowflake>,
    pub created_at: DateTime<Utc>,
}

impl Vote {
    /// Create a new Vote for the given selections
    pub fn new(
        id: Snowflake,
        poll_id: Snowflake,
        user_id: Snowflake,
        choice_ids: Vec<Snowflake>,
    ) -> Self {
        Self {
            id,
            poll_id,
            user_id,
            choice_ids,
            created_at: Utc::now(),
        }
    }

    /// Number of choices this vote selected
    pub fn selection_count(&self) -> usize {
        self.choice_ids.len()
    }
}
