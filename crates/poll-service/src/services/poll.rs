//! Poll service
//!
//! Handles poll creation, listing, detail views, and deactivation.

use poll_core::entities::{sanitize_choice_texts, Choice, Poll};
use poll_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    CreatePollRequest, PollDetailResponse, PollResponse, PollWithChoices, PollWithDetails,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Poll service
pub struct PollService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PollService<'a> {
    /// Create a new PollService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all polls, newest first
    ///
    /// Expired and inactive polls are included; clients decide how to
    /// present them.
    #[instrument(skip(self))]
    pub async fn list_polls(&self) -> ServiceResult<Vec<PollResponse>> {
        let polls = self.ctx.poll_repo().find_all().await?;

        let mut responses = Vec::with_capacity(polls.len());
        for poll in polls {
            let choices = self.ctx.poll_repo().find_choices(poll.id).await?;
            responses.push(PollResponse::from(PollWithChoices { poll, choices }));
        }

        Ok(responses)
    }

    /// Create a new poll with its choices
    #[instrument(skip(self, request), fields(user_id = %user_id))]
    pub async fn create_poll(
        &self,
        user_id: Snowflake,
        request: CreatePollRequest,
    ) -> ServiceResult<PollResponse> {
        let question = request.question.trim();
        if question.is_empty() {
            return Err(DomainError::QuestionRequired.into());
        }

        let texts = validate_choice_texts(&request.choices)?;

        let poll_id = self.ctx.generate_id();
        let mut poll = Poll::new(poll_id, question.to_string(), user_id)
            .with_allow_multiple(request.allow_multiple);
        if let Some(expires_at) = request.expires_at {
            poll = poll.with_expiry(expires_at);
        }

        let choices: Vec<Choice> = texts
            .into_iter()
            .map(|text| Choice::new(self.ctx.generate_id(), poll_id, text))
            .collect();

        // Poll and choices are stored in one transaction
        self.ctx
            .poll_repo()
            .create_with_choices(&poll, &choices)
            .await?;

        info!(poll_id = %poll_id, user_id = %user_id, "Poll created successfully");

        Ok(PollResponse::from(PollWithChoices { poll, choices }))
    }

    /// Get a poll with its choices and the viewer's voting state
    #[instrument(skip(self))]
    pub async fn get_poll_detail(
        &self,
        poll_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<PollDetailResponse> {
        let poll = self
            .ctx
            .poll_repo()
            .find_by_id(poll_id)
            .await?
            .ok_or(DomainError::PollNotFound(poll_id))?;

        let choices = self.ctx.poll_repo().find_choices(poll_id).await?;
        let has_voted = self.ctx.vote_repo().has_voted(user_id, poll_id).await?;

        Ok(PollDetailResponse::from(PollWithDetails {
            poll,
            choices,
            has_voted,
        }))
    }

    /// Deactivate a poll (owner only)
    ///
    /// Deactivation is display metadata; it does not close voting.
    #[instrument(skip(self))]
    pub async fn deactivate_poll(
        &self,
        poll_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<()> {
        let poll = self
            .ctx
            .poll_repo()
            .find_by_id(poll_id)
            .await?
            .ok_or(DomainError::PollNotFound(poll_id))?;

        if !poll.is_owned_by(user_id) {
            return Err(DomainError::NotPollOwner.into());
        }

        self.ctx.poll_repo().deactivate(poll_id).await?;

        info!(poll_id = %poll_id, user_id = %user_id, "Poll deactivated");

        Ok(())
    }
}

/// Sanitize choice texts and enforce the length cap.
/// At least two non-blank choices must remain.
fn validate_choice_texts(raw: &[String]) -> Result<Vec<String>, DomainError> {
    let texts = sanitize_choice_texts(raw);

    for text in &texts {
        if text.chars().count() > 300 {
            return Err(DomainError::ValidationError(
                "Choice text must be at most 300 characters".to_string(),
            ));
        }
    }

    if texts.len() < 2 {
        return Err(DomainError::NotEnoughChoices);
    }

    Ok(texts)
}
