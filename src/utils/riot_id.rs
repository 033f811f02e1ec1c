//! Riot ID parsing and normalization.
//!
//! A Riot ID is a game name and a tag line, conventionally written
//! `Name#TAG`. Riot resolves them case-insensitively, so this service folds
//! both to lowercase before building cache keys or calling upstream.

/// Errors that can occur while parsing a Riot ID.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RiotIdError {
    #[error("Riot ID must be written as 'name#tag', got '{0}'")]
    MissingSeparator(String),

    #[error("Riot ID game name must not be empty")]
    EmptyName,

    #[error("Riot ID tag line must not be empty")]
    EmptyTag,
}

/// A game name and tag line, already case-folded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiotId {
    pub name: String,
    pub tag: String,
}

impl RiotId {
    /// Builds a normalized Riot ID from its two parts.
    ///
    /// # Errors
    ///
    /// Returns [`RiotIdError::EmptyName`] or [`RiotIdError::EmptyTag`] when a
    /// part is blank after trimming.
    pub fn new(name: &str, tag: &str) -> Result<Self, RiotIdError> {
        let name = name.trim();
        let tag = tag.trim();

        if name.is_empty() {
            return Err(RiotIdError::EmptyName);
        }
        if tag.is_empty() {
            return Err(RiotIdError::EmptyTag);
        }

        Ok(Self {
            name: name.to_lowercase(),
            tag: tag.to_lowercase(),
        })
    }
}

/// Parses `Name#TAG` into a normalized [`RiotId`].
///
/// The tag is everything after the last `#`, so names containing `#` are kept
/// intact.
///
/// # Errors
///
/// Returns [`RiotIdError::MissingSeparator`] when there is no `#`.
pub fn parse_riot_id(input: &str) -> Result<RiotId, RiotIdError> {
    let (name, tag) = input
        .rsplit_once('#')
        .ok_or_else(|| RiotIdError::MissingSeparator(input.to_string()))?;

    RiotId::new(name, tag)
}
