//! Review use case - a worker's "review" capability, hosting the
//! review normalizer.
//!
//! The normalizer is the one place where probabilistic model output must
//! be coerced into a strict contract. Its protocol is bounded: parse the
//! first completion; on failure, issue exactly one corrective prompt and
//! re-parse; a second failure is terminal. The single repair round caps
//! latency and backend cost per review call.

use crate::ports::model_backend::{BackendError, ModelBackend};
use council_domain::{
    parse_rankings, PromptTemplate, Ranking, RankingParseError, ReviewRequest, ReviewResponse,
    DEFAULT_RUBRIC,
};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while producing a review
#[derive(Error, Debug)]
pub enum ReviewError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Both parse attempts failed; the output is unprocessable
    #[error("unprocessable review output: {0}")]
    Unprocessable(RankingParseError),
}

/// Use case for ranking a set of anonymized responses
pub struct ReviewUseCase<B: ModelBackend> {
    backend: Arc<B>,
    model_id: String,
}

impl<B: ModelBackend> ReviewUseCase<B> {
    pub fn new(backend: Arc<B>, model_id: impl Into<String>) -> Self {
        Self {
            backend,
            model_id: model_id.into(),
        }
    }

    pub async fn execute(&self, request: ReviewRequest) -> Result<ReviewResponse, ReviewError> {
        let rubric = if request.rubric.trim().is_empty() {
            DEFAULT_RUBRIC
        } else {
            request.rubric.as_str()
        };
        let prompt = PromptTemplate::review(&request.query, &request.responses, rubric);

        let start = Instant::now();
        let rankings = self.normalize(&prompt).await?;
        let latency_ms = start.elapsed().as_millis() as u64;

        Ok(ReviewResponse {
            model_id: self.model_id.clone(),
            rankings,
            latency_ms,
        })
    }

    /// Run the bounded parse / repair / re-parse protocol.
    async fn normalize(&self, prompt: &str) -> Result<Vec<Ranking>, ReviewError> {
        let completion = self.backend.complete(prompt, None).await?;

        let first_error = match parse_rankings(&completion.text) {
            Ok(rankings) => {
                debug!(model_id = %self.model_id, "review output parsed on first attempt");
                return Ok(rankings);
            }
            Err(e) => e,
        };

        warn!(
            model_id = %self.model_id,
            error = %first_error,
            "review output malformed, issuing repair prompt"
        );
        let repair_prompt = PromptTemplate::json_repair(&completion.text);
        let repaired = self.backend.complete(&repair_prompt, None).await?;

        parse_rankings(&repaired.text).map_err(|e| {
            warn!(model_id = %self.model_id, error = %e, "repair attempt also malformed");
            ReviewError::Unprocessable(e)
        })
    }
}
