//! Council transport port
//!
//! Defines how the orchestrator pipeline reaches deployed worker and
//! chairman services. One method per remote capability; every method is
//! a single isolated call carrying its own timeout in the adapter.

use async_trait::async_trait;
use council_domain::{
    Endpoint, FinalRequest, FinalResponse, GenerateRequest, GenerateResponse, ReviewRequest,
    ReviewResponse,
};
use thiserror::Error;

/// Errors from a single call to a council service
///
/// These are always captured into the affected item's error field by the
/// pipeline; they never abort sibling calls.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("endpoint returned status {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("request timed out")]
    Timeout,
}

/// Transport to deployed council services
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait CouncilTransport: Send + Sync {
    /// Call a worker's generate capability.
    async fn generate(
        &self,
        endpoint: &Endpoint,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, TransportError>;

    /// Call a worker's review capability.
    async fn review(
        &self,
        endpoint: &Endpoint,
        request: &ReviewRequest,
    ) -> Result<ReviewResponse, TransportError>;

    /// Call the chairman's synthesize capability.
    async fn finalize(
        &self,
        endpoint: &Endpoint,
        request: &FinalRequest,
    ) -> Result<FinalResponse, TransportError>;
}
