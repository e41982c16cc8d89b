//! Ollama backend adapter.
//!
//! Posts a prompt to an Ollama-style `/api/generate` endpoint and
//! returns the raw text with elapsed time. One request per call, no
//! retries; error handling is the caller's concern.

use async_trait::async_trait;
use council_application::{BackendError, Completion, ModelBackend};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Serialize)]
struct GeneratePayload<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<GenerateOptions>,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateReply {
    #[serde(default)]
    response: String,
}

/// [`ModelBackend`] adapter for an Ollama server
pub struct OllamaBackend {
    client: Client,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl OllamaBackend {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            model: model.into(),
            timeout,
        }
    }
}

#[async_trait]
impl ModelBackend for OllamaBackend {
    async fn complete(
        &self,
        prompt: &str,
        temperature: Option<f32>,
    ) -> Result<Completion, BackendError> {
        let url = format!("{}/api/generate", self.base_url.trim_end_matches('/'));
        let payload = GeneratePayload {
            model: &self.model,
            prompt,
            stream: false,
            options: temperature.map(|t| GenerateOptions { temperature: t }),
        };

        debug!(model = %self.model, "sending prompt to backend");
        let start = Instant::now();

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    BackendError::Timeout
                } else {
                    BackendError::Connection(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let reply: GenerateReply = response
            .json()
            .await
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;
        let latency_ms = start.elapsed().as_millis() as u64;

        Ok(Completion {
            text: reply.response,
            latency_ms,
        })
    }
}
