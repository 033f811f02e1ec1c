//! Match history summary returned by the matches endpoint.

use serde::{Deserialize, Serialize};

use super::MatchType;

/// Recent match ids for a player, together with the query that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub name: String,
    pub tag: String,
    #[serde(rename = "type")]
    pub match_type: MatchType,
    /// Number of ids actually returned, which may be lower than requested.
    pub count: usize,
    pub matches: Vec<String>,
}

impl MatchSummary {
    pub fn new(name: String, tag: String, match_type: MatchType, matches: Vec<String>) -> Self {
        Self {
            name,
            tag,
            match_type,
            count: matches.len(),
            matches,
        }
    }
}
