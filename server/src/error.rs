//! API error type and status mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use council_application::{BackendError, ReviewError, RunCouncilError};
use council_domain::EmptyQuery;

/// Client-facing API error
///
/// Carries the status class and the detail message serialized as
/// `{"detail": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    /// Required configuration is absent (500)
    MissingConfig(String),
    /// Request body failed validation (400)
    InvalidRequest(String),
    /// Topology constraints unmet (400)
    Topology(String),
    /// Quorum gate tripped (503)
    Unavailable(String),
    /// Review output unprocessable after the repair round (422)
    Unprocessable(String),
    /// Generative backend failed (502)
    Backend(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::MissingConfig(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Topology(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            ApiError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Backend(msg) => (StatusCode::BAD_GATEWAY, msg),
        };

        let body = serde_json::json!({ "detail": detail });
        (status, Json(body)).into_response()
    }
}

impl From<EmptyQuery> for ApiError {
    fn from(e: EmptyQuery) -> Self {
        ApiError::InvalidRequest(e.to_string())
    }
}

impl From<BackendError> for ApiError {
    fn from(e: BackendError) -> Self {
        ApiError::Backend(e.to_string())
    }
}

impl From<ReviewError> for ApiError {
    fn from(e: ReviewError) -> Self {
        match e {
            ReviewError::Backend(inner) => ApiError::Backend(inner.to_string()),
            ReviewError::Unprocessable(inner) => ApiError::Unprocessable(inner.to_string()),
        }
    }
}

impl From<RunCouncilError> for ApiError {
    fn from(e: RunCouncilError) -> Self {
        match &e {
            RunCouncilError::Topology(t) if t.is_missing_config() => {
                ApiError::MissingConfig(e.to_string())
            }
            RunCouncilError::Topology(_) => ApiError::Topology(e.to_string()),
            RunCouncilError::QuorumNotReached { .. } => ApiError::Unavailable(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::TopologyError;

    fn status_of(error: ApiError) -> StatusCode {
        error.into_response().status()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_of(ApiError::MissingConfig("x".into())), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(status_of(ApiError::InvalidRequest("x".into())), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(ApiError::Topology("x".into())), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(ApiError::Unavailable("x".into())), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(status_of(ApiError::Unprocessable("x".into())), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(status_of(ApiError::Backend("x".into())), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_run_error_conversion() {
        let missing: ApiError = RunCouncilError::Topology(TopologyError::MissingChairman).into();
        assert!(matches!(missing, ApiError::MissingConfig(_)));

        let unmet: ApiError =
            RunCouncilError::Topology(TopologyError::NotEnoughHosts { have: 1, need: 3 }).into();
        assert!(matches!(unmet, ApiError::Topology(_)));

        let quorum: ApiError = RunCouncilError::QuorumNotReached { healthy: 1, required: 2 }.into();
        assert!(matches!(quorum, ApiError::Unavailable(_)));
    }
}
