//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
///
/// Field-shape checks live here; the ordered business checks (terms accepted,
/// passwords match, password strength, email not taken) run in the auth
/// service so each failure maps to its own typed error.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 150, message = "Full name must be 1-150 characters"))]
    pub full_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,

    pub password_confirmation: String,

    #[serde(default)]
    pub terms_accepted: bool,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ============================================================================
// Poll Requests
// ============================================================================

/// Create poll request
///
/// Choices are trimmed and blank entries dropped before the two-choice
/// minimum is enforced, so only the length cap is checked here.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePollRequest {
    #[validate(length(max = 300, message = "Question must be at most 300 characters"))]
    pub question: String,

    /// Optional closing time; `None` means the poll never expires
    pub expires_at: Option<DateTime<Utc>>,

    /// Whether voters may select more than one choice
    #[serde(default)]
    pub allow_multiple: bool,

    /// Choice texts in display order
    pub choices: Vec<String>,
}

// ============================================================================
// Vote Requests
// ============================================================================

/// Cast vote request
#[derive(Debug, Clone, Deserialize)]
pub struct CastVoteRequest {
    /// Selected choice IDs (Snowflakes as strings)
    pub choices: Vec<String>,
}
