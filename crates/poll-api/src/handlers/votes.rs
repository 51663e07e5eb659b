//! Vote handlers
//!
//! Endpoint for casting a vote in a poll.

use axum::{
    extract::{Path, State},
    Json,
};
use poll_service::{CastVoteRequest, VoteResponse, VoteService};

use crate::extractors::AuthUser;
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Cast a vote in a poll
///
/// POST /polls/{poll_id}/votes
pub async fn cast_vote(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(poll_id): Path<String>,
    Json(request): Json<CastVoteRequest>,
) -> ApiResult<Created<Json<VoteResponse>>> {
    let poll_id = poll_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid poll_id format"))?;

    let service = VoteService::new(state.service_context());
    let response = service.cast_vote(auth.user_id, poll_id, request).await?;
    Ok(Created(Json(response)))
}
