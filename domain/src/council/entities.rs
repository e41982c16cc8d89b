//! Stage artifacts - immutable result types for a council run.
//!
//! These types represent the outputs of each stage:
//! - [`Opinion`] - One worker's answer from stage 1
//! - [`Review`] - One worker's rankings of the anonymized answers (stage 2)
//! - [`FinalAnswer`] - The chairman's synthesis (stage 3)
//! - [`RunResult`] - Complete result containing all stages
//!
//! Per-call failures are data, not exceptions: each artifact carries an
//! optional `error` field, and a populated error never removes the item
//! from the run result.

use super::anonymize::AnonymizedResponse;
use super::ranking::Ranking;
use serde::{Deserialize, Serialize};

/// One worker's answer to the query (stage 1)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opinion {
    /// Identifier of the worker that produced this opinion
    pub model_id: String,
    /// The answer text (empty on failure)
    pub answer: String,
    /// Wall-clock latency of the call in milliseconds
    pub latency_ms: u64,
    /// Error message if the call failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Opinion {
    /// Creates a successful opinion.
    pub fn success(model_id: impl Into<String>, answer: impl Into<String>, latency_ms: u64) -> Self {
        Self {
            model_id: model_id.into(),
            answer: answer.into(),
            latency_ms,
            error: None,
        }
    }

    /// Creates a failed opinion carrying the capture of what went wrong.
    pub fn failure(model_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            answer: String::new(),
            latency_ms: 0,
            error: Some(error.into()),
        }
    }

    /// Returns `true` if this opinion was produced successfully.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// One worker's rankings of the anonymized responses (stage 2)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    /// Identifier of the reviewing worker
    pub model_id: String,
    /// Rankings over the anonymized responses, best first by rank
    pub rankings: Vec<Ranking>,
    /// Wall-clock latency of the call in milliseconds
    pub latency_ms: u64,
    /// Error message if the call failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Review {
    pub fn success(model_id: impl Into<String>, rankings: Vec<Ranking>, latency_ms: u64) -> Self {
        Self {
            model_id: model_id.into(),
            rankings,
            latency_ms,
            error: None,
        }
    }

    pub fn failure(model_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            rankings: Vec::new(),
            latency_ms: 0,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// The chairman's synthesized answer (stage 3)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalAnswer {
    /// The synthesized answer text (empty on failure)
    pub final_answer: String,
    /// Wall-clock latency of the call in milliseconds
    pub latency_ms: u64,
    /// Error message if the call failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FinalAnswer {
    pub fn success(final_answer: impl Into<String>, latency_ms: u64) -> Self {
        Self {
            final_answer: final_answer.into(),
            latency_ms,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            final_answer: String::new(),
            latency_ms: 0,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Complete result of one council run
///
/// Immutable once assembled; callers can inspect exactly which calls
/// succeeded and which did not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    /// Stage 1: one opinion per configured worker, in endpoint order
    pub stage1_first_opinions: Vec<Opinion>,
    /// The anonymized view of the error-free opinions handed to stage 2
    pub stage2_anonymized_responses: Vec<AnonymizedResponse>,
    /// Stage 2: one review per configured worker, in endpoint order
    pub stage2_reviews: Vec<Review>,
    /// Stage 3: the chairman's synthesis
    pub stage3_final: FinalAnswer,
}

impl RunResult {
    /// Returns an iterator over only the successful stage-1 opinions.
    pub fn successful_opinions(&self) -> impl Iterator<Item = &Opinion> {
        self.stage1_first_opinions.iter().filter(|o| o.is_success())
    }

    /// Returns an iterator over only the successful stage-2 reviews.
    pub fn successful_reviews(&self) -> impl Iterator<Item = &Review> {
        self.stage2_reviews.iter().filter(|r| r.is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opinion_constructors() {
        let ok = Opinion::success("worker-1", "answer", 120);
        assert!(ok.is_success());
        assert_eq!(ok.latency_ms, 120);

        let failed = Opinion::failure("worker-2", "connection refused");
        assert!(!failed.is_success());
        assert!(failed.answer.is_empty());
        assert_eq!(failed.error.as_deref(), Some("connection refused"));
    }

    #[test]
    fn test_error_field_omitted_when_absent() {
        let json = serde_json::to_value(Opinion::success("w", "a", 1)).unwrap();
        assert!(json.get("error").is_none());

        let json = serde_json::to_value(Opinion::failure("w", "boom")).unwrap();
        assert_eq!(json["error"], "boom");
    }

    #[test]
    fn test_run_result_filters() {
        let result = RunResult {
            stage1_first_opinions: vec![
                Opinion::success("w1", "a", 1),
                Opinion::failure("w2", "timeout"),
            ],
            stage2_anonymized_responses: vec![],
            stage2_reviews: vec![Review::failure("w1", "bad json")],
            stage3_final: FinalAnswer::success("final", 5),
        };
        assert_eq!(result.successful_opinions().count(), 1);
        assert_eq!(result.successful_reviews().count(), 0);
    }
}
