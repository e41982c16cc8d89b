//! Run council use case - the orchestrator pipeline.
//!
//! Sequences one run through its stages, each a synchronization barrier:
//! validate the topology, fan the query out for first opinions, gate on
//! the quorum of healthy answers, anonymize, fan the labelled answers out
//! for review, then hand the aggregate to the chairman for synthesis.
//!
//! Fan-out is concurrent but gathered in endpoint-list order, never
//! completion order: label assignment in the anonymizer and identifier
//! correlation in aggregation both depend on it. Per-call failures are
//! captured into the item's error field and absorbed; only a failed
//! topology check or a tripped quorum gate aborts the run.

use crate::ports::transport::CouncilTransport;
use council_domain::{
    anonymize, FinalAnswer, FinalRequest, FirstOpinion, GenerateRequest, Opinion, Review,
    ReviewBundle, ReviewRequest, RunRequest, RunResult, Topology, TopologyError,
};
use futures::future::join_all;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Fatal outcomes of a council run
///
/// Everything else a run can encounter is partial data in the
/// [`RunResult`], not an error.
#[derive(Error, Debug)]
pub enum RunCouncilError {
    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error("quorum not reached: {healthy} healthy agents, need {required}")]
    QuorumNotReached { healthy: usize, required: usize },
}

/// Rubric the orchestrator sends with stage-2 review requests; the run
/// request itself carries no rubric field.
const REVIEW_RUBRIC: &str = "Accuracy and insight based on the query.";

/// Use case for executing one full council run
pub struct RunCouncilUseCase<T: CouncilTransport> {
    transport: Arc<T>,
    topology: Topology,
    /// Minimum error-free stage-1 opinions required to proceed.
    ///
    /// Configured independently of the topology's static worker floor;
    /// the two are not assumed equal.
    quorum: usize,
}

impl<T: CouncilTransport> RunCouncilUseCase<T> {
    pub fn new(transport: Arc<T>, topology: Topology, quorum: usize) -> Self {
        Self {
            transport,
            topology,
            quorum,
        }
    }

    pub async fn execute(&self, request: RunRequest) -> Result<RunResult, RunCouncilError> {
        // Fail fast, before any network call.
        self.topology.validate()?;

        info!(
            workers = self.topology.workers.len(),
            quorum = self.quorum,
            "starting council run"
        );

        let opinions = self.stage1_opinions(&request).await;

        let healthy = opinions.iter().filter(|o| o.is_success()).count();
        if healthy < self.quorum {
            warn!(healthy, required = self.quorum, "quorum gate tripped");
            return Err(RunCouncilError::QuorumNotReached {
                healthy,
                required: self.quorum,
            });
        }

        // Labels follow endpoint order and failures consume none. The
        // label-to-model mapping never leaves this side of the boundary;
        // reviewers only ever see labels.
        let (anonymized, mapping) = anonymize(&opinions);
        debug!(?mapping, "anonymized stage-1 opinions");

        // All workers review, including any whose own opinion failed.
        let reviews = self.stage2_reviews(&request, &anonymized).await;

        // Only error-free artifacts reach the chairman.
        let first_opinions: Vec<FirstOpinion> = opinions
            .iter()
            .filter(|o| o.is_success())
            .map(|o| FirstOpinion {
                model_id: o.model_id.clone(),
                answer: o.answer.clone(),
            })
            .collect();
        let review_bundles: Vec<ReviewBundle> = reviews
            .iter()
            .filter(|r| r.is_success())
            .map(|r| ReviewBundle {
                reviewer_id: r.model_id.clone(),
                rankings: r.rankings.clone(),
            })
            .collect();

        // Single chairman call; its failure is captured, not escalated.
        let final_answer = self
            .stage3_final(&request, first_opinions, review_bundles)
            .await;

        info!(
            healthy,
            reviews = reviews.iter().filter(|r| r.is_success()).count(),
            final_ok = final_answer.is_success(),
            "council run complete"
        );

        Ok(RunResult {
            stage1_first_opinions: opinions,
            stage2_anonymized_responses: anonymized,
            stage2_reviews: reviews,
            stage3_final: final_answer,
        })
    }

    /// Stage 1: ask every worker for a first opinion, concurrently.
    ///
    /// `join_all` is the barrier: results come back in endpoint order and
    /// no call outlives this function.
    async fn stage1_opinions(&self, request: &RunRequest) -> Vec<Opinion> {
        let generate = GenerateRequest {
            query: request.query.clone(),
            context: request.context.clone(),
            temperature: request.temperature,
        };

        let calls = self.topology.workers.iter().map(|endpoint| {
            let generate = &generate;
            async move {
                match self.transport.generate(endpoint, generate).await {
                    Ok(response) => {
                        Opinion::success(response.model_id, response.answer, response.latency_ms)
                    }
                    Err(e) => {
                        warn!(endpoint = %endpoint, error = %e, "generate call failed");
                        Opinion::failure(endpoint.as_str(), e.to_string())
                    }
                }
            }
        });

        join_all(calls).await
    }

    /// Stage 2: have every worker rank the anonymized responses.
    async fn stage2_reviews(
        &self,
        request: &RunRequest,
        anonymized: &[council_domain::AnonymizedResponse],
    ) -> Vec<Review> {
        let review = ReviewRequest {
            query: request.query.clone(),
            responses: anonymized.to_vec(),
            rubric: REVIEW_RUBRIC.to_string(),
        };

        let calls = self.topology.workers.iter().map(|endpoint| {
            let review = &review;
            async move {
                match self.transport.review(endpoint, review).await {
                    Ok(response) => {
                        Review::success(response.model_id, response.rankings, response.latency_ms)
                    }
                    Err(e) => {
                        warn!(endpoint = %endpoint, error = %e, "review call failed");
                        Review::failure(endpoint.as_str(), e.to_string())
                    }
                }
            }
        });

        join_all(calls).await
    }

    /// Stage 3: one isolated chairman call; its failure is captured, not
    /// escalated.
    async fn stage3_final(
        &self,
        request: &RunRequest,
        first_opinions: Vec<FirstOpinion>,
        reviews: Vec<ReviewBundle>,
    ) -> FinalAnswer {
        let final_request = FinalRequest {
            query: request.query.clone(),
            first_opinions,
            reviews,
        };

        match self
            .transport
            .finalize(&self.topology.chairman, &final_request)
            .await
        {
            Ok(response) => FinalAnswer::success(response.final_answer, response.latency_ms),
            Err(e) => {
                warn!(error = %e, "chairman call failed");
                FinalAnswer::failure(e.to_string())
            }
        }
    }
}
