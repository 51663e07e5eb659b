//! # poll-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export request and response DTOs
pub use dto::{
    AuthResponse, CastVoteRequest, ChoiceResponse, ChoiceResultResponse, CreatePollRequest,
    CurrentUserResponse, HealthChecks, HealthResponse, LoginRequest, PollDetailResponse,
    PollResponse, ReadinessResponse, RefreshTokenRequest, RegisterRequest, ResultsResponse,
    TokenPairResponse, VoteResponse,
};

// Re-export services and their shared plumbing
pub use services::{
    AuthService, PollService, ResultsService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, VoteService,
};
