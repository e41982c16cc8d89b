//! Finalize use case - the chairman's "synthesize" capability.

use crate::ports::model_backend::{BackendError, ModelBackend};
use council_domain::{FinalRequest, FinalResponse, PromptTemplate};
use std::sync::Arc;
use tracing::debug;

/// Use case for synthesizing the final answer from first opinions and
/// reviews
pub struct FinalizeUseCase<B: ModelBackend> {
    backend: Arc<B>,
    model_id: String,
}

impl<B: ModelBackend> FinalizeUseCase<B> {
    pub fn new(backend: Arc<B>, model_id: impl Into<String>) -> Self {
        Self {
            backend,
            model_id: model_id.into(),
        }
    }

    pub async fn execute(&self, request: FinalRequest) -> Result<FinalResponse, BackendError> {
        let prompt =
            PromptTemplate::chairman(&request.query, &request.first_opinions, &request.reviews);
        debug!(
            model_id = %self.model_id,
            opinions = request.first_opinions.len(),
            reviews = request.reviews.len(),
            "synthesizing final answer"
        );

        let completion = self.backend.complete(&prompt, None).await?;

        Ok(FinalResponse {
            final_answer: completion.text.trim().to_string(),
            latency_ms: completion.latency_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::ScriptedBackend;
    use council_domain::FirstOpinion;

    #[tokio::test]
    async fn test_finalize_trims_answer() {
        let backend = Arc::new(ScriptedBackend::new(vec!["\n the verdict \n".to_string()]));
        let use_case = FinalizeUseCase::new(backend, "chairman");

        let response = use_case
            .execute(FinalRequest {
                query: "q".to_string(),
                first_opinions: vec![FirstOpinion {
                    model_id: "w1".to_string(),
                    answer: "a".to_string(),
                }],
                reviews: vec![],
            })
            .await
            .unwrap();

        assert_eq!(response.final_answer, "the verdict");
    }
}
