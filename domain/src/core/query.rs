//! Query value object

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejection of a blank query
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("query must not be empty")]
pub struct EmptyQuery;

/// The question a council run deliberates over (Value Object)
///
/// Constructed only through [`Query::parse`], so holders can rely on the
/// content being non-empty and free of surrounding whitespace. Services
/// validate incoming request queries through this type before any
/// backend call is made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Query {
    content: String,
}

impl Query {
    /// Validate and normalize a raw query string.
    ///
    /// Trims surrounding whitespace; a string that is empty after
    /// trimming is rejected.
    pub fn parse(raw: impl Into<String>) -> Result<Self, EmptyQuery> {
        let content = raw.into().trim().to_string();
        if content.is_empty() {
            return Err(EmptyQuery);
        }
        Ok(Self { content })
    }

    /// Get the query content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for Query {
    type Error = EmptyQuery;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Query::parse(s)
    }
}

impl TryFrom<&str> for Query {
    type Error = EmptyQuery;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Query::parse(s)
    }
}

impl From<Query> for String {
    fn from(q: Query) -> Self {
        q.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_whitespace() {
        let q = Query::parse("  What is Rust? \n").unwrap();
        assert_eq!(q.content(), "What is Rust?");
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert_eq!(Query::parse(""), Err(EmptyQuery));
        assert_eq!(Query::parse("   \n\t"), Err(EmptyQuery));
    }

    #[test]
    fn test_deserialization_validates() {
        let q: Query = serde_json::from_str(r#""What is Rust?""#).unwrap();
        assert_eq!(q.content(), "What is Rust?");
        assert!(serde_json::from_str::<Query>(r#""  ""#).is_err());
    }
}
