//! First opinion use case - a worker's "generate" capability.

use crate::ports::model_backend::{BackendError, ModelBackend};
use council_domain::{GenerateRequest, GenerateResponse, PromptTemplate};
use std::sync::Arc;
use tracing::debug;

/// Use case for producing a worker's first opinion on a query
pub struct FirstOpinionUseCase<B: ModelBackend> {
    backend: Arc<B>,
    model_id: String,
}

impl<B: ModelBackend> FirstOpinionUseCase<B> {
    pub fn new(backend: Arc<B>, model_id: impl Into<String>) -> Self {
        Self {
            backend,
            model_id: model_id.into(),
        }
    }

    pub async fn execute(&self, request: GenerateRequest) -> Result<GenerateResponse, BackendError> {
        let prompt = PromptTemplate::first_opinion(&request.query, request.context.as_deref());
        debug!(model_id = %self.model_id, "generating first opinion");

        let completion = self.backend.complete(&prompt, request.temperature).await?;

        Ok(GenerateResponse {
            model_id: self.model_id.clone(),
            answer: completion.text.trim().to_string(),
            latency_ms: completion.latency_ms,
        })
    }
}
