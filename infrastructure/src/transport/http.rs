//! HTTP transport to deployed council services.
//!
//! One POST per capability call, each with its own independent timeout.
//! Failures map onto [`TransportError`] and are reported to the caller;
//! the pipeline decides what absorbing them means.

use async_trait::async_trait;
use council_application::{CouncilTransport, TransportError};
use council_domain::{
    Endpoint, FinalRequest, FinalResponse, GenerateRequest, GenerateResponse, ReviewRequest,
    ReviewResponse,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// [`CouncilTransport`] adapter over the services' HTTP/JSON contracts
pub struct HttpCouncilTransport {
    client: Client,
    timeout: Duration,
}

impl HttpCouncilTransport {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            timeout,
        }
    }

    async fn post_json<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        path: &str,
        request: &Req,
    ) -> Result<Resp, TransportError> {
        let url = endpoint.join(path);
        debug!(%url, "calling council service");

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransportError::Timeout
                } else {
                    TransportError::Connection(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        response
            .json()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}

#[async_trait]
impl CouncilTransport for HttpCouncilTransport {
    async fn generate(
        &self,
        endpoint: &Endpoint,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, TransportError> {
        self.post_json(endpoint, "generate", request).await
    }

    async fn review(
        &self,
        endpoint: &Endpoint,
        request: &ReviewRequest,
    ) -> Result<ReviewResponse, TransportError> {
        self.post_json(endpoint, "review", request).await
    }

    async fn finalize(
        &self,
        endpoint: &Endpoint,
        request: &FinalRequest,
    ) -> Result<FinalResponse, TransportError> {
        self.post_json(endpoint, "final", request).await
    }
}
