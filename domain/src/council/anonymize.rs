//! Anonymization boundary between stage 1 and stage 2.
//!
//! Reviewers must not know whose answer they are grading, so the only
//! things that cross into stage 2 are opaque labels and answer text. The
//! worker-to-label mapping is returned to the pipeline for debug logging
//! but is never serialized into a request or response.

use super::entities::Opinion;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An opinion stripped of its author, as seen by reviewers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnonymizedResponse {
    /// Opaque sequential label ("Response A", "Response B", ...)
    pub response_id: String,
    /// The answer text, unchanged
    pub answer: String,
}

/// Map error-free opinions to labeled responses, in input order.
///
/// Failed opinions are skipped without consuming a label, so the labels
/// seen by reviewers are always dense: the first error-free opinion is
/// "Response A" no matter how many failures precede it. Input order must
/// be the original endpoint order for label assignment to be
/// deterministic across runs.
///
/// Returns the labeled responses and the worker-id → label mapping.
pub fn anonymize(opinions: &[Opinion]) -> (Vec<AnonymizedResponse>, HashMap<String, String>) {
    let mut responses = Vec::new();
    let mut mapping = HashMap::new();

    for opinion in opinions.iter().filter(|o| o.is_success()) {
        let label = response_label(responses.len());
        mapping.insert(opinion.model_id.clone(), label.clone());
        responses.push(AnonymizedResponse {
            response_id: label,
            answer: opinion.answer.clone(),
        });
    }

    (responses, mapping)
}

/// Label for the i-th anonymized response: "Response A" ... "Response Z",
/// then "Response AA", "Response AB", ... (spreadsheet column style).
pub fn response_label(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = String::new();
    while n > 0 {
        n -= 1;
        letters.insert(0, (b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    format!("Response {letters}")
}
