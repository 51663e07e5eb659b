//! Choice database model

use sqlx::FromRow;

/// Database model for choices table
#[derive(Debug, Clone, FromRow)]
pub struct ChoiceModel {
    pub id: i64,
    pub poll_id: i64,
    pub choice_text: String,
    pub votes: i32,
}
