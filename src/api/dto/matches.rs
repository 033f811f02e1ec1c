//! DTOs for the match history endpoint.

use serde::Deserialize;

use crate::domain::entities::{MatchType, ParseMatchTypeError};
use crate::utils::match_count::DEFAULT_MATCH_COUNT;

/// Query parameters of `GET /{name}/{tag}/matches`.
///
/// `type` is kept as a string and parsed case-insensitively so that
/// `?type=RANKED` and `?type=ranked` are equivalent.
#[derive(Debug, Default, Deserialize)]
pub struct MatchesQuery {
    #[serde(default)]
    pub count: Option<i64>,

    #[serde(default, rename = "type")]
    pub match_type: Option<String>,
}

impl MatchesQuery {
    /// Requested count, `20` when absent. Not clamped here.
    pub fn count(&self) -> i64 {
        self.count.unwrap_or(DEFAULT_MATCH_COUNT)
    }

    /// Requested match type, `ranked` when absent.
    pub fn match_type(&self) -> Result<MatchType, ParseMatchTypeError> {
        match self.match_type.as_deref() {
            Some(raw) => raw.parse(),
            None => Ok(MatchType::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query = MatchesQuery::default();
        assert_eq!(query.count(), 20);
        assert_eq!(query.match_type().unwrap(), MatchType::Ranked);
    }

    #[test]
    fn test_match_type_case_insensitive() {
        let query = MatchesQuery {
            count: Some(5),
            match_type: Some("NORMAL".to_string()),
        };
        assert_eq!(query.count(), 5);
        assert_eq!(query.match_type().unwrap(), MatchType::Normal);
    }

    #[test]
    fn test_unknown_match_type() {
        let query = MatchesQuery {
            count: None,
            match_type: Some("aram".to_string()),
        };
        assert!(query.match_type().is_err());
    }
}
