//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{auth, health, polls, votes};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(auth_routes()).merge(poll_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
}

/// Poll routes
fn poll_routes() -> Router<AppState> {
    Router::new()
        // Poll CRUD
        .route("/polls", get(polls::list_polls))
        .route("/polls", post(polls::create_poll))
        .route("/polls/:poll_id", get(polls::get_poll))
        .route("/polls/:poll_id", delete(polls::deactivate_poll))
        // Voting and results
        .route("/polls/:poll_id/votes", post(votes::cast_vote))
        .route("/polls/:poll_id/results", get(polls::get_poll_results))
}
