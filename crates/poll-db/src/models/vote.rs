//! Vote database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for votes table
///
/// Selected choice IDs live in the vote_choices junction table and are
/// loaded separately.
#[derive(Debug, Clone, FromRow)]
pub struct VoteModel {
    pub id: i64,
    pub poll_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}
