//! Worker service handlers.

use axum::{extract::State, Json};
use council_domain::{
    GenerateRequest, GenerateResponse, HealthResponse, Query, ReviewRequest, ReviewResponse,
};

use crate::error::ApiError;
use crate::state::WorkerState;

/// GET /health
pub async fn health(State(state): State<WorkerState>) -> Json<HealthResponse> {
    Json(HealthResponse::ready(state.model_id))
}

/// POST /generate
pub async fn generate(
    State(state): State<WorkerState>,
    Json(mut request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    request.query = Query::parse(request.query)?.into_content();
    let response = state.first_opinion.execute(request).await?;
    Ok(Json(response))
}

/// POST /review
///
/// Returns 422 when the review normalizer exhausts its single repair
/// round without obtaining parseable rankings.
pub async fn review(
    State(state): State<WorkerState>,
    Json(mut request): Json<ReviewRequest>,
) -> Result<Json<ReviewResponse>, ApiError> {
    request.query = Query::parse(request.query)?.into_content();
    let response = state.review.execute(request).await?;
    Ok(Json(response))
}
