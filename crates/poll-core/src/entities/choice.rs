//! Choice entity - one selectable option of a poll

use crate::value_objects::Snowflake;

/// Choice entity with its denormalized vote counter
///
/// Choices sort by id, which is creation order under snowflake IDs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub id: Snowflake,
    pub poll_id: Snowflake,
    pub text: String,
    pub votes: i32,
}

impl Choice {
    /// Create a new Choice with a zeroed counter
    pub fn new(id: Snowflake, poll_id: Snowflake, text: String) -> Self {
        Self {
            id,
            poll_id,
            text,
            votes: 0,
        }
    }

    /// Set the vote counter
    pub fn with_votes(mut self, votes: i32) -> Self {
        self.votes = votes;
        self
    }
}

/// Trim choice texts and drop the blank ones, preserving order
pub fn sanitize_choice_texts(texts: &[String]) -> Vec<String> {
    texts
        .iter()
        .map(|text| text.trim())
        .filter(|text| !text.is_empty())
        .map(ToString::to_string)
        .collect()
}
