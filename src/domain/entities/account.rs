//! Account entity returned by the Riot account lookup.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A Riot account resolved from a Riot ID (game name + tag line).
///
/// Only `puuid` is interpreted by this service. Every other field the upstream
/// returns (`gameName`, `tagLine`, ...) is kept verbatim in `extra` so that the
/// cached copy serializes back to exactly what Riot sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub puuid: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Account {
    /// Creates an account with no pass-through fields.
    pub fn new(puuid: impl Into<String>) -> Self {
        Self {
            puuid: puuid.into(),
            extra: Map::new(),
        }
    }

    /// Adds a pass-through field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Display name as returned by Riot, if present.
    pub fn game_name(&self) -> Option<&str> {
        self.extra.get("gameName").and_then(Value::as_str)
    }

    /// Tag line as returned by Riot, if present.
    pub fn tag_line(&self) -> Option<&str> {
        self.extra.get("tagLine").and_then(Value::as_str)
    }
}
