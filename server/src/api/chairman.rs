//! Chairman service handlers.

use axum::{extract::State, Json};
use council_domain::{FinalRequest, FinalResponse, HealthResponse};

use crate::error::ApiError;
use crate::state::ChairmanState;

/// GET /health
pub async fn health(State(state): State<ChairmanState>) -> Json<HealthResponse> {
    Json(HealthResponse::ready(state.model_id))
}

/// POST /final
pub async fn final_answer(
    State(state): State<ChairmanState>,
    Json(request): Json<FinalRequest>,
) -> Result<Json<FinalResponse>, ApiError> {
    let response = state.finalize.execute(request).await?;
    Ok(Json(response))
}
