//! Per-service application state.
//!
//! Each state bundles the use cases a router needs, wired to concrete
//! infrastructure adapters once at startup.

use council_application::{
    FinalizeUseCase, FirstOpinionUseCase, ReviewUseCase, RunCouncilUseCase,
};
use council_infrastructure::{
    ChairmanSettings, HttpCouncilTransport, OllamaBackend, OrchestratorSettings, WorkerSettings,
};
use std::sync::Arc;

/// State for the worker service
#[derive(Clone)]
pub struct WorkerState {
    pub model_id: String,
    pub first_opinion: Arc<FirstOpinionUseCase<OllamaBackend>>,
    pub review: Arc<ReviewUseCase<OllamaBackend>>,
}

impl WorkerState {
    pub fn new(settings: &WorkerSettings) -> Self {
        let backend = Arc::new(OllamaBackend::new(
            settings.backend_url.clone(),
            settings.backend_model.clone(),
            settings.backend_timeout(),
        ));
        Self {
            model_id: settings.model_id.clone(),
            first_opinion: Arc::new(FirstOpinionUseCase::new(
                Arc::clone(&backend),
                settings.model_id.clone(),
            )),
            review: Arc::new(ReviewUseCase::new(backend, settings.model_id.clone())),
        }
    }
}

/// State for the chairman service
#[derive(Clone)]
pub struct ChairmanState {
    pub model_id: String,
    pub finalize: Arc<FinalizeUseCase<OllamaBackend>>,
}

impl ChairmanState {
    pub fn new(settings: &ChairmanSettings) -> Self {
        let backend = Arc::new(OllamaBackend::new(
            settings.backend_url.clone(),
            settings.backend_model.clone(),
            settings.backend_timeout(),
        ));
        Self {
            model_id: settings.model_id.clone(),
            finalize: Arc::new(FinalizeUseCase::new(backend, settings.model_id.clone())),
        }
    }
}

/// State for the orchestrator service
#[derive(Clone)]
pub struct OrchestratorState {
    pub label: String,
    pub run: Arc<RunCouncilUseCase<HttpCouncilTransport>>,
}

impl OrchestratorState {
    pub fn new(settings: &OrchestratorSettings) -> Self {
        let transport = Arc::new(HttpCouncilTransport::new(settings.request_timeout()));
        Self {
            label: "council-orchestrator".to_string(),
            run: Arc::new(RunCouncilUseCase::new(
                transport,
                settings.topology(),
                settings.quorum,
            )),
        }
    }
}
