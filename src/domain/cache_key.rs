//! Cache key derivation.
//!
//! Every cached value lives under a key derived from the entity type and the
//! parameters that identify the request. Keys are injective: two different
//! requests never render to the same string. Components are escaped so that a
//! `:` inside a name cannot be mistaken for a separator; ordinary Riot IDs and
//! puuids render unchanged.

use std::fmt;

use super::entities::MatchType;

const NAMESPACE: &str = "riot";

/// A structured cache key rendered to its store representation via `Display`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Account lookup by Riot ID. Name and tag are stored lowercased.
    Account { name: String, tag: String },
    /// Match id list for an account, scoped by match type and requested count.
    Matches {
        puuid: String,
        match_type: MatchType,
        count: i64,
    },
}

impl CacheKey {
    /// Key for an account lookup. Case-folds both components.
    pub fn account(name: &str, tag: &str) -> Self {
        Self::Account {
            name: name.to_lowercase(),
            tag: tag.to_lowercase(),
        }
    }

    /// Key for a match list. `count` is the count as requested, before clamping.
    pub fn matches(puuid: &str, match_type: MatchType, count: i64) -> Self {
        Self::Matches {
            puuid: puuid.to_string(),
            match_type,
            count,
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Account { name, tag } => write!(
                f,
                "{NAMESPACE}:account:{}:{}",
                escape_component(name),
                escape_component(tag)
            ),
            Self::Matches {
                puuid,
                match_type,
                count,
            } => write!(
                f,
                "{NAMESPACE}:matches:{}:{}:{}",
                escape_component(puuid),
                match_type,
                count
            ),
        }
    }
}

/// Percent-escapes `%` and `:` in a key component.
fn escape_component(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '%' => escaped.push_str("%25"),
            ':' => escaped.push_str("%3A"),
            other => escaped.push(other),
        }
    }
    escaped
}
