//! Model backend port
//!
//! Defines the interface for sending a prompt to a generative backend.
//! The adapter does exactly one thing: one prompt in, raw text and
//! elapsed time out. No retries, no parsing, no prompt construction.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur talking to the generative backend
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("backend returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("invalid backend response: {0}")]
    InvalidResponse(String),

    #[error("backend request timed out")]
    Timeout,
}

/// Raw completion from the backend
#[derive(Debug, Clone)]
pub struct Completion {
    /// Raw generated text, untrimmed
    pub text: String,
    /// Wall-clock time of the call in milliseconds
    pub latency_ms: u64,
}

/// Gateway to a generative language-model backend
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ModelBackend: Send + Sync {
    /// Send one prompt and return the raw completion.
    async fn complete(
        &self,
        prompt: &str,
        temperature: Option<f32>,
    ) -> Result<Completion, BackendError>;
}
