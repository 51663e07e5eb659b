//! Choice entity <-> model mapper

use poll_core::entities::Choice;
use poll_core::value_objects::Snowflake;

use crate::models::ChoiceModel;

/// Convert ChoiceModel to Choice entity
impl From<ChoiceModel> for Choice {
    fn from(model: ChoiceModel) -> Self {
        Choice {
            id: Snowflake::new(model.id),
            poll_id: Snowflake::new(model.poll_id),
            text: model.choice_text,
            votes: model.votes,
        }
    }
}
