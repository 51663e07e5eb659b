//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use poll_core::entities::{Choice, Poll, User, Vote};
use poll_core::tally::{total_votes, ChoiceTally, PollTally};

use super::responses::{
    ChoiceResponse, ChoiceResultResponse, CurrentUserResponse, PollDetailResponse, PollResponse,
    ResultsResponse, VoteResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            full_name: user.full_name(),
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Poll Mappers
// ============================================================================

impl From<&Choice> for ChoiceResponse {
    fn from(choice: &Choice) -> Self {
        Self {
            id: choice.id.to_string(),
            text: choice.text.clone(),
            votes: choice.votes,
        }
    }
}

impl From<Choice> for ChoiceResponse {
    fn from(choice: Choice) -> Self {
        Self::from(&choice)
    }
}

/// Helper struct for creating PollResponse
pub struct PollWithChoices {
    pub poll: Poll,
    pub choices: Vec<Choice>,
}

impl From<PollWithChoices> for PollResponse {
    fn from(pwc: PollWithChoices) -> Self {
        let is_expired = pwc.poll.is_expired();
        let days_remaining = pwc.poll.days_remaining();
        let total = total_votes(&pwc.choices);

        Self {
            id: pwc.poll.id.to_string(),
            question: pwc.poll.question,
            created_by: pwc.poll.created_by.map(|id| id.to_string()),
            pub_date: pwc.poll.pub_date,
            expires_at: pwc.poll.expires_at,
            allow_multiple: pwc.poll.allow_multiple,
            is_active: pwc.poll.is_active,
            is_expired,
            days_remaining,
            total_votes: total,
            choices: pwc.choices.into_iter().map(ChoiceResponse::from).collect(),
            created_at: pwc.poll.created_at,
        }
    }
}

/// Helper struct for creating PollDetailResponse
pub struct PollWithDetails {
    pub poll: Poll,
    pub choices: Vec<Choice>,
    pub has_voted: bool,
}

impl From<PollWithDetails> for PollDetailResponse {
    fn from(details: PollWithDetails) -> Self {
        let response = PollResponse::from(PollWithChoices {
            poll: details.poll,
            choices: details.choices,
        });

        Self {
            id: response.id,
            question: response.question,
            created_by: response.created_by,
            pub_date: response.pub_date,
            expires_at: response.expires_at,
            allow_multiple: response.allow_multiple,
            is_active: response.is_active,
            is_expired: response.is_expired,
            days_remaining: response.days_remaining,
            total_votes: response.total_votes,
            choices: response.choices,
            has_voted: details.has_voted,
            created_at: response.created_at,
        }
    }
}

// ============================================================================
// Vote Mappers
// ============================================================================

impl From<&Vote> for VoteResponse {
    fn from(vote: &Vote) -> Self {
        Self {
            id: vote.id.to_string(),
            poll_id: vote.poll_id.to_string(),
            choice_ids: vote.choice_ids.iter().map(|id| id.to_string()).collect(),
            created_at: vote.created_at,
        }
    }
}

impl From<Vote> for VoteResponse {
    fn from(vote: Vote) -> Self {
        Self::from(&vote)
    }
}

// ============================================================================
// Results Mappers
// ============================================================================

impl From<&ChoiceTally> for ChoiceResultResponse {
    fn from(tally: &ChoiceTally) -> Self {
        Self {
            id: tally.choice_id.to_string(),
            text: tally.text.clone(),
            votes: tally.votes,
            percentage: tally.percentage,
            percentage_int: tally.percentage_int,
        }
    }
}

/// Helper struct for creating ResultsResponse
pub struct PollWithTally {
    pub poll: Poll,
    pub tally: PollTally,
}

impl From<PollWithTally> for ResultsResponse {
    fn from(pwt: PollWithTally) -> Self {
        Self {
            poll_id: pwt.poll.id.to_string(),
            question: pwt.poll.question,
            total_votes: pwt.tally.total_votes,
            choices: pwt
                .tally
                .choices
                .iter()
                .map(ChoiceResultResponse::from)
                .collect(),
            leading_choice_id: pwt.tally.leading_choice_id.map(|id| id.to_string()),
        }
    }
}
