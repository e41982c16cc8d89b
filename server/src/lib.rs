//! HTTP layer for llm-council
//!
//! One router per deployable service:
//!
//! - [`api::worker_router`] - `/generate`, `/review`, `/health`
//! - [`api::chairman_router`] - `/final`, `/health`
//! - [`api::orchestrator_router`] - `/run`, `/health`
//!
//! Handlers translate use-case outcomes into the wire status codes:
//! 400/500 for topology problems, 503 for a tripped quorum gate, 422 for
//! unprocessable review output, 502 for backend failures.

pub mod api;
pub mod error;
pub mod state;

pub use api::{chairman_router, orchestrator_router, worker_router};
pub use error::ApiError;
pub use state::{ChairmanState, OrchestratorState, WorkerState};
