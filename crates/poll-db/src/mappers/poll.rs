//! Poll entity <-> model mapper

use poll_core::entities::Poll;
use poll_core::value_objects::Snowflake;

use crate::models::PollModel;

/// Convert PollModel to Poll entity
impl From<PollModel> for Poll {
    fn from(model: PollModel) -> Self {
        Poll {
            id: Snowflake::new(model.id),
            question: model.question,
            created_by: model.created_by.map(Snowflake::new),
            pub_date: model.pub_date,
            expires_at: model.expires_at,
            allow_multiple: model.allow_multiple,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
