//! Deployment topology - endpoints and the constraints a council run
//! must satisfy before any network call is made.
//!
//! The validator exists to keep the council honest: a "council" whose
//! voices all live on one host is a single operator wearing N hats. The
//! checks here are pure precondition logic and run once per pipeline
//! invocation.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use url::Url;

/// Address of a deployed worker or chairman service (Value Object)
///
/// Immutable once constructed. The derived host identity is used by the
/// topology validator to detect collocated voices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Endpoint(String);

impl Endpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derive the host identity of this endpoint.
    ///
    /// Parses the endpoint as a URL and takes its hostname. Unparseable
    /// endpoints fall back to the raw string as their own identity, so
    /// two identical malformed strings still collide while two different
    /// ones do not.
    pub fn host(&self) -> String {
        Url::parse(&self.0)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_else(|| self.0.clone())
    }

    /// Build a request URL for a path on this endpoint.
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.0.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Endpoint {
    fn from(s: &str) -> Self {
        Endpoint::new(s)
    }
}

/// Topology constraint violations
///
/// The first two variants mean the process is misconfigured (nothing to
/// talk to at all); the rest mean the configured deployment fails the
/// diversity rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopologyError {
    #[error("no worker endpoints configured")]
    MissingWorkers,

    #[error("chairman endpoint not configured")]
    MissingChairman,

    #[error("need at least {need} workers, have {have}")]
    NotEnoughWorkers { have: usize, need: usize },

    #[error("workers span {have} distinct hosts, need {need}")]
    NotEnoughHosts { have: usize, need: usize },

    #[error("chairman shares host '{host}' with a worker")]
    SharedChairmanHost { host: String },
}

impl TopologyError {
    /// True when the error means required configuration is absent rather
    /// than a constraint being violated.
    pub fn is_missing_config(&self) -> bool {
        matches!(
            self,
            TopologyError::MissingWorkers | TopologyError::MissingChairman
        )
    }
}

/// Process-wide deployment topology, fixed at startup
#[derive(Debug, Clone)]
pub struct Topology {
    /// Worker endpoints, in configured order
    pub workers: Vec<Endpoint>,
    /// Chairman endpoint (empty string when unset)
    pub chairman: Endpoint,
    /// Minimum number of configured workers
    pub min_workers: usize,
    /// Minimum number of distinct hosts among workers
    pub min_distinct_hosts: usize,
    /// Permit the chairman to share a host with a worker
    pub allow_shared_chairman_host: bool,
}

impl Topology {
    /// Check all deployment constraints. Pure; no network calls.
    ///
    /// Order matters: missing configuration is reported before
    /// constraint violations so callers can distinguish "nothing
    /// configured" from "configured badly".
    pub fn validate(&self) -> Result<(), TopologyError> {
        if self.workers.is_empty() {
            return Err(TopologyError::MissingWorkers);
        }
        if self.chairman.as_str().is_empty() {
            return Err(TopologyError::MissingChairman);
        }
        if self.workers.len() < self.min_workers {
            return Err(TopologyError::NotEnoughWorkers {
                have: self.workers.len(),
                need: self.min_workers,
            });
        }

        let hosts: HashSet<String> = self.workers.iter().map(Endpoint::host).collect();
        if hosts.len() < self.min_distinct_hosts {
            return Err(TopologyError::NotEnoughHosts {
                have: hosts.len(),
                need: self.min_distinct_hosts,
            });
        }

        if !self.allow_shared_chairman_host {
            let chairman_host = self.chairman.host();
            if hosts.contains(&chairman_host) {
                return Err(TopologyError::SharedChairmanHost {
                    host: chairman_host,
                });
            }
        }

        Ok(())
    }
}
