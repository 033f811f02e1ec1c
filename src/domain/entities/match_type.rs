//! Match type filter accepted by the match-v5 `ids` endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Match category filter, mirroring the upstream `type` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    #[default]
    Ranked,
    Normal,
    Tourney,
    Tutorial,
}

impl MatchType {
    pub const ALL: [MatchType; 4] = [
        MatchType::Ranked,
        MatchType::Normal,
        MatchType::Tourney,
        MatchType::Tutorial,
    ];

    /// Wire value sent upstream and used in cache keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Ranked => "ranked",
            MatchType::Normal => "normal",
            MatchType::Tourney => "tourney",
            MatchType::Tutorial => "tutorial",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown match type.
#[derive(Debug, thiserror::Error)]
#[error("unknown match type '{0}' (expected one of: ranked, normal, tourney, tutorial)")]
pub struct ParseMatchTypeError(String);

impl FromStr for MatchType {
    type Err = ParseMatchTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MatchType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseMatchTypeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_ranked() {
        assert_eq!(MatchType::default(), MatchType::Ranked);
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("RANKED".parse::<MatchType>().unwrap(), MatchType::Ranked);
        assert_eq!("Normal".parse::<MatchType>().unwrap(), MatchType::Normal);
        assert!("aram".parse::<MatchType>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&MatchType::Tourney).unwrap(),
            "\"tourney\""
        );
        let parsed: MatchType = serde_json::from_str("\"tutorial\"").unwrap();
        assert_eq!(parsed, MatchType::Tutorial);
    }
}
