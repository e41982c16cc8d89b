//! Orchestrator service handlers.

use axum::{extract::State, Json};
use council_domain::{HealthResponse, Query, RunRequest, RunResult};

use crate::error::ApiError;
use crate::state::OrchestratorState;

/// GET /health
pub async fn health(State(state): State<OrchestratorState>) -> Json<HealthResponse> {
    Json(HealthResponse::ready(state.label))
}

/// POST /run
///
/// Either a complete run result (possibly containing per-item errors) or
/// a structured failure: 400 when the query is blank or the topology
/// constraints are unmet, 500 when the topology is unconfigured, 503
/// when the quorum gate trips.
pub async fn run(
    State(state): State<OrchestratorState>,
    Json(mut request): Json<RunRequest>,
) -> Result<Json<RunResult>, ApiError> {
    request.query = Query::parse(request.query)?.into_content();
    let result = state.run.execute(request).await?;
    Ok(Json(result))
}
