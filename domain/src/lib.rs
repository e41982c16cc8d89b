//! Domain layer for llm-council
//!
//! This crate contains the core coordination types and logic for the
//! council protocol. It has no dependencies on infrastructure or
//! presentation concerns: no I/O, no async, no HTTP.
//!
//! # Core Concepts
//!
//! ## Council
//!
//! A council run moves a query through three stages:
//!
//! - **First opinions**: every worker answers independently
//! - **Anonymized review**: workers rank each other's answers without
//!   knowing whose answer is whose
//! - **Synthesis**: the chairman combines opinions and reviews into a
//!   single final answer
//!
//! ## Topology
//!
//! Deployment constraints checked before a run starts: enough workers,
//! enough distinct hosts, and a chairman that does not share a host with
//! a worker unless explicitly allowed.

pub mod core;
pub mod council;
pub mod prompt;
pub mod topology;

// Re-export commonly used types
pub use crate::core::query::{EmptyQuery, Query};
pub use council::{
    anonymize::{anonymize, response_label, AnonymizedResponse},
    entities::{FinalAnswer, Opinion, Review, RunResult},
    messages::{
        FinalRequest, FinalResponse, FirstOpinion, GenerateRequest, GenerateResponse,
        HealthResponse, ReviewBundle, ReviewRequest, ReviewResponse, RunRequest,
    },
    ranking::{parse_rankings, Ranking, RankingParseError},
};
pub use prompt::template::{PromptTemplate, DEFAULT_RUBRIC};
pub use topology::{Endpoint, Topology, TopologyError};
