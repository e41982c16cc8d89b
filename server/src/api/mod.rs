//! API routes, one router per deployable service.

pub mod chairman;
pub mod orchestrator;
pub mod worker;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::{ChairmanState, OrchestratorState, WorkerState};

/// Router for the worker service
pub fn worker_router(state: WorkerState) -> Router {
    Router::new()
        .route("/generate", post(worker::generate))
        .route("/review", post(worker::review))
        .route("/health", get(worker::health))
        .with_state(state)
}

/// Router for the chairman service
pub fn chairman_router(state: ChairmanState) -> Router {
    Router::new()
        .route("/final", post(chairman::final_answer))
        .route("/health", get(chairman::health))
        .with_state(state)
}

/// Router for the orchestrator service
pub fn orchestrator_router(state: OrchestratorState) -> Router {
    Router::new()
        .route("/run", post(orchestrator::run))
        .route("/health", get(orchestrator::health))
        .with_state(state)
}
