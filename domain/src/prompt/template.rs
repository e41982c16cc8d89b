//! Prompt templates for the council flow

use crate::council::anonymize::AnonymizedResponse;
use crate::council::messages::{FirstOpinion, ReviewBundle};

/// Rubric used when a review request does not supply one
pub const DEFAULT_RUBRIC: &str =
    "Accuracy to the query, depth of insight, clarity, and correctness.";

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt for a worker's first opinion
    pub fn first_opinion(query: &str, context: Option<&str>) -> String {
        let context_block = match context {
            Some(ctx) => format!("\nContext:\n{}", ctx),
            None => String::new(),
        };
        format!(
            "You are a Council member. Provide a concise, accurate answer. \
             If unsure, say so briefly.\n\n\
             Query:\n{}{}\n\nAnswer:",
            query, context_block
        )
    }

    /// Prompt for a worker ranking the anonymized responses
    pub fn review(query: &str, responses: &[AnonymizedResponse], rubric: &str) -> String {
        let response_block = responses
            .iter()
            .map(|item| format!("{}: {}", item.response_id, item.answer))
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "You are a strict evaluator. Rank the responses by accuracy and insight. \
             Return ONLY valid JSON with a top-level key 'rankings'. \
             Each ranking item must have response_id, rank (1 is best), and rationale. \
             No extra keys, no prose.\n\n\
             Rubric:\n{}\n\n\
             Query:\n{}\n\n\
             Responses:\n{}\n\n\
             Return JSON now.",
            rubric, query, response_block
        )
    }

    /// Corrective prompt after malformed review output.
    ///
    /// Restates the exact target shape and embeds the bad output; used
    /// for the single repair round.
    pub fn json_repair(bad_output: &str) -> String {
        format!(
            "The previous output was invalid JSON. \
             Return ONLY corrected JSON matching: {{\"rankings\": [{{\"response_id\": str, \
             \"rank\": int, \"rationale\": str}}]}}. \
             No extra keys or text.\n\n\
             Bad output:\n{}\n\n\
             Return corrected JSON only.",
            bad_output
        )
    }

    /// Prompt for the chairman's synthesis
    pub fn chairman(query: &str, first_opinions: &[FirstOpinion], reviews: &[ReviewBundle]) -> String {
        let opinions_block = first_opinions
            .iter()
            .map(|item| format!("{}: {}", item.model_id, item.answer))
            .collect::<Vec<_>>()
            .join("\n");
        let reviews_block = reviews
            .iter()
            .map(|bundle| {
                let rankings =
                    serde_json::to_string(&bundle.rankings).unwrap_or_else(|_| "[]".to_string());
                format!("{}: {}", bundle.reviewer_id, rankings)
            })
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "You are the Chairman. Synthesize a final answer using the first opinions and \
             the reviews. Correct mistakes. Do not introduce unrelated new information. \
             Write a clear, concise final response.\n\n\
             Query:\n{}\n\n\
             First opinions:\n{}\n\n\
             Reviews:\n{}\n\n\
             Final answer:",
            query, opinions_block, reviews_block
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::council::ranking::Ranking;

    #[test]
    fn test_first_opinion_with_context() {
        let prompt = PromptTemplate::first_opinion("What is Rust?", Some("systems programming"));
        assert!(prompt.contains("What is Rust?"));
        assert!(prompt.contains("Context:\nsystems programming"));
    }

    #[test]
    fn test_first_opinion_without_context() {
        let prompt = PromptTemplate::first_opinion("What is Rust?", None);
        assert!(!prompt.contains("Context:"));
    }

    #[test]
    fn test_review_prompt_lists_labels_only() {
        let responses = vec![
            AnonymizedResponse {
                response_id: "Response A".to_string(),
                answer: "Rust is a systems language.".to_string(),
            },
            AnonymizedResponse {
                response_id: "Response B".to_string(),
                answer: "Rust focuses on safety.".to_string(),
            },
        ];
        let prompt = PromptTemplate::review("What is Rust?", &responses, DEFAULT_RUBRIC);
        assert!(prompt.contains("Response A"));
        assert!(prompt.contains("Response B"));
        assert!(prompt.contains(DEFAULT_RUBRIC));
        assert!(prompt.contains("'rankings'"));
    }

    #[test]
    fn test_json_repair_embeds_bad_output() {
        let prompt = PromptTemplate::json_repair("oops not json");
        assert!(prompt.contains("oops not json"));
        assert!(prompt.contains("\"rankings\""));
    }

    #[test]
    fn test_chairman_prompt_includes_rankings() {
        let opinions = vec![FirstOpinion {
            model_id: "agent-1".to_string(),
            answer: "Rust is fast.".to_string(),
        }];
        let reviews = vec![ReviewBundle {
            reviewer_id: "agent-2".to_string(),
            rankings: vec![Ranking {
                response_id: "Response A".to_string(),
                rank: 1,
                rationale: "accurate".to_string(),
            }],
        }];
        let prompt = PromptTemplate::chairman("What is Rust?", &opinions, &reviews);
        assert!(prompt.contains("agent-1"));
        assert!(prompt.contains("agent-2"));
        assert!(prompt.contains("Response A"));
    }
}
