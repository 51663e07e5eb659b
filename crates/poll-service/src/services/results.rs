//! Results service
//!
//! Produces tallied results from a poll's denormalized vote counters.

use poll_core::tally::PollTally;
use poll_core::{DomainError, Snowflake};
use tracing::instrument;

use crate::dto::{PollWithTally, ResultsResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Results service
pub struct ResultsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ResultsService<'a> {
    /// Create a new ResultsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Tally a poll's results
    ///
    /// Results are public; expiry and active state do not gate them.
    #[instrument(skip(self))]
    pub async fn get_results(&self, poll_id: Snowflake) -> ServiceResult<ResultsResponse> {
        let poll = self
            .ctx
            .poll_repo()
            .find_by_id(poll_id)
            .await?
            .ok_or(DomainError::PollNotFound(poll_id))?;

        let choices = self.ctx.poll_repo().find_choices(poll_id).await?;
        let tally = PollTally::compute(&choices);

        Ok(ResultsResponse::from(PollWithTally { poll, tally }))
    }
}
