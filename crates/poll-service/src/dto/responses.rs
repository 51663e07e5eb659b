//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: CurrentUserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

/// Token pair response (for refresh, no user payload)
#[derive(Debug, Serialize)]
pub struct TokenPairResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl TokenPairResponse {
    pub fn new(access_token: String, refresh_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Current authenticated user response
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Poll Responses
// ============================================================================

/// Choice as shown inside a poll
#[derive(Debug, Clone, Serialize)]
pub struct ChoiceResponse {
    pub id: String,
    pub text: String,
    pub votes: i32,
}

/// Poll with its choices and derived display fields
#[derive(Debug, Clone, Serialize)]
pub struct PollResponse {
    pub id: String,
    pub question: String,
    /// Creator ID; `null` when the account has been removed
    pub created_by: Option<String>,
    pub pub_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    pub allow_multiple: bool,
    pub is_active: bool,
    pub is_expired: bool,
    /// Whole days until expiry; `null` when the poll never expires
    pub days_remaining: Option<i64>,
    pub total_votes: i64,
    pub choices: Vec<ChoiceResponse>,
    pub created_at: DateTime<Utc>,
}

/// Poll detail for an authenticated viewer
///
/// Same shape as [`PollResponse`] plus `has_voted`, which drives the
/// client's form-or-results decision.
#[derive(Debug, Clone, Serialize)]
pub struct PollDetailResponse {
    pub id: String,
    pub question: String,
    pub created_by: Option<String>,
    pub pub_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    pub allow_multiple: bool,
    pub is_active: bool,
    pub is_expired: bool,
    pub days_remaining: Option<i64>,
    pub total_votes: i64,
    pub choices: Vec<ChoiceResponse>,
    pub has_voted: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Vote Responses
// ============================================================================

/// Recorded vote
#[derive(Debug, Clone, Serialize)]
pub struct VoteResponse {
    pub id: String,
    pub poll_id: String,
    pub choice_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Results Responses
// ============================================================================

/// Per-choice results entry
#[derive(Debug, Clone, Serialize)]
pub struct ChoiceResultResponse {
    pub id: String,
    pub text: String,
    pub votes: i32,
    /// Share of the total, one decimal place; 0.0 when nobody has voted
    pub percentage: f64,
    /// `percentage` rounded to a whole number
    pub percentage_int: i32,
}

/// Tallied results for a poll
#[derive(Debug, Clone, Serialize)]
pub struct ResultsResponse {
    pub poll_id: String,
    pub question: String,
    pub total_votes: i64,
    pub choices: Vec<ChoiceResultResponse>,
    /// Highest counter, ties to the earliest choice; `null` for a poll
    /// with no choices
    pub leading_choice_id: Option<String>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
