//! Vote entity <-> model mapper

use poll_core::entities::Vote;
use poll_core::value_objects::Snowflake;

use crate::models::VoteModel;

/// Convert VoteModel with selected choice IDs to Vote entity
pub fn vote_with_choices(model: VoteModel, choice_ids: Vec<i64>) -> Vote {
    Vote {
        id: Snowflake::new(model.id),
        poll_id: Snowflake::new(model.poll_id),
        user_id: Snowflake::new(model.user_id),
        choice_ids: choice_ids.into_iter().map(Snowflake::new).collect(),
        created_at: model.created_at,
    }
}
