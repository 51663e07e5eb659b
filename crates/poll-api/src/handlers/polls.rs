//! Poll handlers
//!
//! Endpoints for listing, creating, viewing, closing polls and reading results.

use axum::{
    extract::{Path, State},
    Json,
};
use poll_service::{
    CreatePollRequest, PollDetailResponse, PollResponse, PollService, ResultsResponse,
    ResultsService,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// List all polls, newest first
///
/// GET /polls
pub async fn list_polls(State(state): State<AppState>) -> ApiResult<Json<Vec<PollResponse>>> {
    let service = PollService::new(state.service_context());
    let response = service.list_polls().await?;
    Ok(Json(response))
}

/// Create a new poll with its choices
///
/// POST /polls
pub async fn create_poll(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePollRequest>,
) -> ApiResult<Created<Json<PollResponse>>> {
    let service = PollService::new(state.service_context());
    let response = service.create_poll(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Get poll detail by ID
///
/// GET /polls/{poll_id}
pub async fn get_poll(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(poll_id): Path<String>,
) -> ApiResult<Json<PollDetailResponse>> {
    let poll_id = poll_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid poll_id format"))?;

    let service = PollService::new(state.service_context());
    let response = service.get_poll_detail(poll_id, auth.user_id).await?;
    Ok(Json(response))
}

/// Deactivate a poll (owner only)
///
/// DELETE /polls/{poll_id}
pub async fn deactivate_poll(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(poll_id): Path<String>,
) -> ApiResult<NoContent> {
    let poll_id = poll_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid poll_id format"))?;

    let service = PollService::new(state.service_context());
    service.deactivate_poll(poll_id, auth.user_id).await?;
    Ok(NoContent)
}

/// Get tallied results for a poll
///
/// GET /polls/{poll_id}/results
pub async fn get_poll_results(
    State(state): State<AppState>,
    Path(poll_id): Path<String>,
) -> ApiResult<Json<ResultsResponse>> {
    let poll_id = poll_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid poll_id format"))?;

    let service = ResultsService::new(state.service_context());
    let response = service.get_results(poll_id).await?;
    Ok(Json(response))
}
