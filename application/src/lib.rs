//! Application layer for llm-council
//!
//! Use cases implementing the council capabilities, and the ports they
//! need the infrastructure layer to provide:
//!
//! - [`ports::model_backend::ModelBackend`] - "answer a prompt" against a
//!   generative backend
//! - [`ports::transport::CouncilTransport`] - HTTP calls to deployed
//!   worker/chairman services
//!
//! The orchestrator pipeline ([`use_cases::run_council`]) is the
//! top-level state machine; the worker and chairman use cases implement
//! the per-service capabilities it fans out to.

pub mod ports;
pub mod use_cases;

pub use ports::model_backend::{BackendError, Completion, ModelBackend};
pub use ports::transport::{CouncilTransport, TransportError};
pub use use_cases::finalize::FinalizeUseCase;
pub use use_cases::first_opinion::FirstOpinionUseCase;
pub use use_cases::review::{ReviewError, ReviewUseCase};
pub use use_cases::run_council::{RunCouncilError, RunCouncilUseCase};
