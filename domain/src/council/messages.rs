//! Wire message types shared by every council service.
//!
//! These are the JSON bodies exchanged between the orchestrator and the
//! worker/chairman services. Field names are the wire contract; changing
//! one is a protocol change.

use super::anonymize::AnonymizedResponse;
use super::ranking::Ranking;
use serde::{Deserialize, Serialize};

/// Worker `POST /generate` request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// Worker `POST /generate` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub model_id: String,
    pub answer: String,
    pub latency_ms: u64,
}

/// Worker `POST /review` request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRequest {
    pub query: String,
    /// Anonymized responses to rank; reviewers only ever see labels
    pub responses: Vec<AnonymizedResponse>,
    pub rubric: String,
}

/// Worker `POST /review` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewResponse {
    pub model_id: String,
    pub rankings: Vec<Ranking>,
    pub latency_ms: u64,
}

/// A de-anonymized first opinion as handed to the chairman
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirstOpinion {
    pub model_id: String,
    pub answer: String,
}

/// One reviewer's rankings as handed to the chairman
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewBundle {
    pub reviewer_id: String,
    pub rankings: Vec<Ranking>,
}

/// Chairman `POST /final` request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalRequest {
    pub query: String,
    pub first_opinions: Vec<FirstOpinion>,
    pub reviews: Vec<ReviewBundle>,
}

/// Chairman `POST /final` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalResponse {
    pub final_answer: String,
    pub latency_ms: u64,
}

/// Orchestrator `POST /run` request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// `GET /health` response, exposed by every service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub model_id: String,
    pub detail: String,
}

impl HealthResponse {
    pub fn ready(model_id: impl Into<String>) -> Self {
        Self {
            ok: true,
            model_id: model_id.into(),
            detail: "ready".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_omits_absent_options() {
        let req = GenerateRequest {
            query: "q".to_string(),
            context: None,
            temperature: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("context").is_none());
        assert!(json.get("temperature").is_none());
    }

    #[test]
    fn test_review_request_round_trip() {
        let req = ReviewRequest {
            query: "q".to_string(),
            responses: vec![AnonymizedResponse {
                response_id: "Response A".to_string(),
                answer: "a".to_string(),
            }],
            rubric: "accuracy".to_string(),
        };
        let parsed: ReviewRequest =
            serde_json::from_str(&serde_json::to_string(&req).unwrap()).unwrap();
        assert_eq!(parsed.responses[0].response_id, "Response A");
        assert_eq!(parsed.rubric, "accuracy");
    }

    #[test]
    fn test_health_ready() {
        let health = HealthResponse::ready("agent-1");
        assert!(health.ok);
        assert_eq!(health.detail, "ready");
    }
}
