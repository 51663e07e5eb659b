//! Poll database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for polls table
#[derive(Debug, Clone, FromRow)]
pub struct PollModel {
    pub id: i64,
    pub question: String,
    pub created_by: Option<i64>,
    pub pub_date: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub allow_multiple: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
