//! Scripted fakes for the application ports.

use crate::ports::model_backend::{BackendError, Completion, ModelBackend};
use crate::ports::transport::{CouncilTransport, TransportError};
use async_trait::async_trait;
use council_domain::{
    Endpoint, FinalRequest, FinalResponse, GenerateRequest, GenerateResponse, ReviewRequest,
    ReviewResponse, Ranking,
};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Backend that replays a fixed sequence of completions and counts calls.
pub(crate) struct ScriptedBackend {
    outputs: Mutex<VecDeque<String>>,
    calls: AtomicUsize,
    fail: bool,
}

impl ScriptedBackend {
    pub(crate) fn new(outputs: Vec<String>) -> Self {
        Self {
            outputs: Mutex::new(outputs.into()),
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    /// A backend whose every call fails with a connection error.
    pub(crate) fn failing() -> Self {
        Self {
            outputs: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ModelBackend for ScriptedBackend {
    async fn complete(
        &self,
        _prompt: &str,
        _temperature: Option<f32>,
    ) -> Result<Completion, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(BackendError::Connection("scripted failure".to_string()));
        }
        let text = self
            .outputs
            .lock()
            .unwrap()
            .pop_front()
            .expect("scripted backend exhausted");
        Ok(Completion { text, latency_ms: 7 })
    }
}

/// Transport where named endpoints fail and the rest succeed.
///
/// Successful generate calls answer with "answer from <endpoint>",
/// reviews return a single fixed ranking, and the chairman echoes how
/// many opinions it received.
pub(crate) struct ScriptedTransport {
    pub(crate) failing_endpoints: Vec<&'static str>,
    pub(crate) failing_reviewers: Vec<&'static str>,
    pub(crate) fail_finalize: bool,
    pub(crate) generate_calls: AtomicUsize,
    pub(crate) review_calls: AtomicUsize,
    pub(crate) finalize_calls: AtomicUsize,
    pub(crate) last_review_request: Mutex<Option<ReviewRequest>>,
    pub(crate) last_final_request: Mutex<Option<FinalRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self {
            failing_endpoints: Vec::new(),
            failing_reviewers: Vec::new(),
            fail_finalize: false,
            generate_calls: AtomicUsize::new(0),
            review_calls: AtomicUsize::new(0),
            finalize_calls: AtomicUsize::new(0),
            last_review_request: Mutex::new(None),
            last_final_request: Mutex::new(None),
        }
    }

    pub(crate) fn with_failing_endpoints(mut self, endpoints: Vec<&'static str>) -> Self {
        self.failing_endpoints = endpoints;
        self
    }

    pub(crate) fn with_failing_reviewers(mut self, endpoints: Vec<&'static str>) -> Self {
        self.failing_reviewers = endpoints;
        self
    }

    pub(crate) fn total_calls(&self) -> usize {
        self.generate_calls.load(Ordering::SeqCst)
            + self.review_calls.load(Ordering::SeqCst)
            + self.finalize_calls.load(Ordering::SeqCst)
    }

    fn fails(&self, list: &[&'static str], endpoint: &Endpoint) -> bool {
        list.iter().any(|e| *e == endpoint.as_str())
    }
}

#[async_trait]
impl CouncilTransport for ScriptedTransport {
    async fn generate(
        &self,
        endpoint: &Endpoint,
        _request: &GenerateRequest,
    ) -> Result<GenerateResponse, TransportError> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        if self.fails(&self.failing_endpoints, endpoint) {
            return Err(TransportError::Timeout);
        }
        Ok(GenerateResponse {
            model_id: format!("model@{}", endpoint.host()),
            answer: format!("answer from {}", endpoint.host()),
            latency_ms: 11,
        })
    }

    async fn review(
        &self,
        endpoint: &Endpoint,
        request: &ReviewRequest,
    ) -> Result<ReviewResponse, TransportError> {
        self.review_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_review_request.lock().unwrap() = Some(request.clone());
        if self.fails(&self.failing_reviewers, endpoint) {
            return Err(TransportError::Status {
                status: 422,
                detail: "unprocessable".to_string(),
            });
        }
        Ok(ReviewResponse {
            model_id: format!("model@{}", endpoint.host()),
            rankings: request
                .responses
                .iter()
                .enumerate()
                .map(|(i, r)| Ranking {
                    response_id: r.response_id.clone(),
                    rank: (i + 1) as u32,
                    rationale: "scripted".to_string(),
                })
                .collect(),
            latency_ms: 13,
        })
    }

    async fn finalize(
        &self,
        _endpoint: &Endpoint,
        request: &FinalRequest,
    ) -> Result<FinalResponse, TransportError> {
        self.finalize_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_final_request.lock().unwrap() = Some(request.clone());
        if self.fail_finalize {
            return Err(TransportError::Connection("chairman down".to_string()));
        }
        Ok(FinalResponse {
            final_answer: format!("synthesized from {} opinions", request.first_opinions.len()),
            latency_ms: 17,
        })
    }
}
