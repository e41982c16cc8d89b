//! Service configuration

pub mod loader;
mod settings;

pub use settings::{ChairmanSettings, OrchestratorSettings, WorkerSettings};
