//! Ranking parsing for the review stage.
//!
//! A reviewing worker is asked to return strict JSON with a top-level
//! `rankings` list. Model output is probabilistic, so the parser here is
//! deliberately forgiving about surrounding prose (it scans for the
//! outermost JSON object) but strict about the decoded shape: the list
//! must be present, non-empty, and every rank must be >= 1.
//!
//! Pure domain logic: no I/O, no session management. The one-shot
//! repair loop that re-prompts on failure lives in the application layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One reviewer's judgment of one anonymized response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranking {
    /// Opaque label of the ranked response ("Response A", ...)
    pub response_id: String,
    /// Position in the reviewer's ordering; 1 is best
    pub rank: u32,
    /// The reviewer's justification
    pub rationale: String,
}

/// Why raw model output could not be coerced into a ranking list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankingParseError {
    #[error("no JSON object found in output")]
    NoJson,

    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    #[error("JSON missing 'rankings' list")]
    MissingRankings,

    #[error("'rankings' list is empty")]
    EmptyRankings,

    #[error("rank must be >= 1, got {0} for '{1}'")]
    InvalidRank(u32, String),
}

#[derive(Deserialize)]
struct RankingSheet {
    rankings: Option<Vec<Ranking>>,
}

/// Parse raw model output into a ranking list.
///
/// Scans for the outermost `{...}` span so that output wrapped in prose
/// or code fences still parses, then decodes and checks the shape.
///
/// # Examples
///
/// ```
/// use council_domain::council::ranking::parse_rankings;
///
/// let raw = r#"{"rankings": [{"response_id": "Response A", "rank": 1, "rationale": "clear"}]}"#;
/// let rankings = parse_rankings(raw).unwrap();
/// assert_eq!(rankings[0].rank, 1);
/// ```
pub fn parse_rankings(raw: &str) -> Result<Vec<Ranking>, RankingParseError> {
    let json_str = extract_json_object(raw).ok_or(RankingParseError::NoJson)?;

    let sheet: RankingSheet = serde_json::from_str(json_str)
        .map_err(|e| RankingParseError::InvalidJson(e.to_string()))?;

    let rankings = sheet.rankings.ok_or(RankingParseError::MissingRankings)?;
    if rankings.is_empty() {
        return Err(RankingParseError::EmptyRankings);
    }
    for ranking in &rankings {
        if ranking.rank < 1 {
            return Err(RankingParseError::InvalidRank(
                ranking.rank,
                ranking.response_id.clone(),
            ));
        }
    }

    Ok(rankings)
}

/// Find the outermost `{...}` span in raw model output.
fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw[start..].rfind('}')?;
    Some(&raw[start..start + end + 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_sheet() -> String {
        r#"{"rankings": [
            {"response_id": "Response A", "rank": 1, "rationale": "accurate"},
            {"response_id": "Response B", "rank": 2, "rationale": "vague"}
        ]}"#
        .to_string()
    }

    #[test]
    fn test_parse_valid_rankings() {
        let rankings = parse_rankings(&valid_sheet()).unwrap();
        assert_eq!(rankings.len(), 2);
        assert_eq!(rankings[0].response_id, "Response A");
        assert_eq!(rankings[0].rank, 1);
        assert_eq!(rankings[1].rationale, "vague");
    }

    #[test]
    fn test_parse_tolerates_surrounding_prose() {
        let raw = format!("Sure! Here are my rankings:\n```json\n{}\n```\nDone.", valid_sheet());
        let rankings = parse_rankings(&raw).unwrap();
        assert_eq!(rankings.len(), 2);
    }

    #[test]
    fn test_no_json_object() {
        assert_eq!(parse_rankings("I cannot rank these."), Err(RankingParseError::NoJson));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            parse_rankings(r#"{"rankings": [}"#),
            Err(RankingParseError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_missing_rankings_field() {
        assert_eq!(
            parse_rankings(r#"{"results": []}"#),
            Err(RankingParseError::MissingRankings)
        );
    }

    #[test]
    fn test_empty_rankings_list() {
        assert_eq!(
            parse_rankings(r#"{"rankings": []}"#),
            Err(RankingParseError::EmptyRankings)
        );
    }

    #[test]
    fn test_zero_rank_rejected() {
        let raw = r#"{"rankings": [{"response_id": "Response A", "rank": 0, "rationale": "x"}]}"#;
        assert_eq!(
            parse_rankings(raw),
            Err(RankingParseError::InvalidRank(0, "Response A".to_string()))
        );
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let rankings = parse_rankings(&valid_sheet()).unwrap();
        let serialized = serde_json::to_string(&serde_json::json!({ "rankings": rankings })).unwrap();
        let reparsed = parse_rankings(&serialized).unwrap();
        assert_eq!(rankings, reparsed);
    }
}
