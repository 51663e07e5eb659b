//! Vote service
//!
//! Handles vote casting against a poll.

use poll_core::entities::Vote;
use poll_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CastVoteRequest, VoteResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Vote service
pub struct VoteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VoteService<'a> {
    /// Create a new VoteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Cast a vote
    ///
    /// Preconditions run in a fixed order: the poll exists, the user has
    /// not voted, the poll has not expired, at least one choice was
    /// selected, and multiple selections require a multi-choice poll.
    /// The write itself is one transaction; a duplicate slipping past
    /// the has-voted precheck or a choice from another poll rolls the
    /// whole vote back.
    #[instrument(skip(self, request), fields(user_id = %user_id, poll_id = %poll_id))]
    pub async fn cast_vote(
        &self,
        user_id: Snowflake,
        poll_id: Snowflake,
        request: CastVoteRequest,
    ) -> ServiceResult<VoteResponse> {
        let poll = self
            .ctx
            .poll_repo()
            .find_by_id(poll_id)
            .await?
            .ok_or(DomainError::PollNotFound(poll_id))?;

        if self.ctx.vote_repo().has_voted(user_id, poll_id).await? {
            return Err(DomainError::AlreadyVoted { poll_id }.into());
        }

        if poll.is_expired() {
            return Err(DomainError::PollExpired { poll_id }.into());
        }

        if request.choices.is_empty() {
            return Err(DomainError::NoChoiceSelected.into());
        }

        if request.choices.len() > 1 && !poll.allow_multiple {
            return Err(DomainError::MultipleChoicesNotAllowed.into());
        }

        let choice_ids = parse_choice_ids(&request.choices)?;

        let vote = Vote::new(self.ctx.generate_id(), poll_id, user_id, choice_ids);
        self.ctx.vote_repo().create_with_choices(&vote).await?;

        info!(
            vote_id = %vote.id,
            selections = vote.selection_count(),
            "Vote recorded"
        );

        Ok(VoteResponse::from(&vote))
    }
}

/// Parse choice id strings, dropping repeats while keeping order
fn parse_choice_ids(raw: &[String]) -> Result<Vec<Snowflake>, DomainError> {
    let mut ids = Vec::with_capacity(raw.len());

    for entry in raw {
        let id = Snowflake::parse(entry)
            .map_err(|_| DomainError::ValidationError(format!("Invalid choice id: {entry}")))?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }

    Ok(ids)
}
