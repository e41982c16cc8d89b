//! Settings structs, one per service role.
//!
//! Every field can come from `council.toml` or a `COUNCIL_*` environment
//! variable; values are fixed once at process start and passed into the
//! services by reference. Endpoint lists are comma-separated strings so
//! the same syntax works in both sources.

use council_domain::{Endpoint, Topology};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Worker service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerSettings {
    /// Address to listen on
    pub listen_addr: String,
    /// Identifying label reported in responses and health probes
    pub model_id: String,
    /// Base URL of the generative backend
    pub backend_url: String,
    /// Model name passed to the backend
    pub backend_model: String,
    /// Backend call timeout in seconds
    pub backend_timeout_secs: u64,
}

impl Default for WorkerSettings {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8001".to_string(),
            model_id: "council-agent".to_string(),
            backend_url: "http://localhost:11434".to_string(),
            backend_model: "llama3.1:8b".to_string(),
            backend_timeout_secs: 120,
        }
    }
}

impl WorkerSettings {
    pub fn backend_timeout(&self) -> Duration {
        Duration::from_secs(self.backend_timeout_secs)
    }
}

/// Chairman service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChairmanSettings {
    pub listen_addr: String,
    pub model_id: String,
    pub backend_url: String,
    pub backend_model: String,
    pub backend_timeout_secs: u64,
}

impl Default for ChairmanSettings {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8010".to_string(),
            model_id: "council-chairman".to_string(),
            backend_url: "http://localhost:11434".to_string(),
            backend_model: "llama3.1:8b".to_string(),
            backend_timeout_secs: 120,
        }
    }
}

impl ChairmanSettings {
    pub fn backend_timeout(&self) -> Duration {
        Duration::from_secs(self.backend_timeout_secs)
    }
}

/// Orchestrator service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrchestratorSettings {
    pub listen_addr: String,
    /// Comma-separated worker endpoint URLs
    pub worker_endpoints: String,
    /// Chairman endpoint URL
    pub chairman_endpoint: String,
    /// Minimum error-free stage-1 opinions for a run to proceed.
    ///
    /// Deliberately independent of `min_workers`: the static topology
    /// floor and the runtime gate have been observed to differ.
    pub quorum: usize,
    /// Minimum number of configured workers
    pub min_workers: usize,
    /// Minimum distinct hosts among workers
    pub min_distinct_hosts: usize,
    /// Permit the chairman to share a host with a worker
    pub allow_shared_chairman_host: bool,
    /// Per-call timeout for worker/chairman requests, in seconds
    pub request_timeout_secs: u64,
}

impl Default for OrchestratorSettings {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            worker_endpoints: String::new(),
            chairman_endpoint: String::new(),
            quorum: 2,
            min_workers: 2,
            min_distinct_hosts: 2,
            allow_shared_chairman_host: false,
            request_timeout_secs: 60,
        }
    }
}

impl OrchestratorSettings {
    /// Parse the comma-separated endpoint list, skipping blanks.
    pub fn worker_endpoints(&self) -> Vec<Endpoint> {
        self.worker_endpoints
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Endpoint::new)
            .collect()
    }

    /// Build the deployment topology this process will enforce.
    pub fn topology(&self) -> Topology {
        Topology {
            workers: self.worker_endpoints(),
            chairman: Endpoint::new(self.chairman_endpoint.clone()),
            min_workers: self.min_workers,
            min_distinct_hosts: self.min_distinct_hosts,
            allow_shared_chairman_host: self.allow_shared_chairman_host,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
