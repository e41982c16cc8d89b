//! Infrastructure layer for llm-council
//!
//! Adapters implementing the application ports against real services,
//! plus the configuration surface:
//!
//! - [`backend::OllamaBackend`] - [`ModelBackend`] over an Ollama-style
//!   `/api/generate` endpoint
//! - [`transport::HttpCouncilTransport`] - [`CouncilTransport`] over the
//!   council services' HTTP contracts
//! - [`config`] - figment-based settings, merged from defaults, an
//!   optional `council.toml`, and `COUNCIL_*` environment variables
//!
//! [`ModelBackend`]: council_application::ModelBackend
//! [`CouncilTransport`]: council_application::CouncilTransport

pub mod backend;
pub mod config;
pub mod transport;

pub use backend::OllamaBackend;
pub use config::{
    loader::ConfigLoader, ChairmanSettings, OrchestratorSettings, WorkerSettings,
};
pub use transport::HttpCouncilTransport;
