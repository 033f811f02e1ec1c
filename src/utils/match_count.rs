//! Normalization of the requested match count.

/// Smallest count sent upstream.
pub const MIN_MATCH_COUNT: i64 = 1;

/// Largest count the match-v5 `ids` endpoint accepts.
pub const MAX_MATCH_COUNT: i64 = 50;

/// Count used when the caller does not specify one.
pub const DEFAULT_MATCH_COUNT: i64 = 20;

/// Clamps a requested match count into `MIN_MATCH_COUNT..=MAX_MATCH_COUNT`.
///
/// Out of range values are silently pulled to the nearest bound.
///
/// ```ignore
/// assert_eq!(clamp_match_count(0), 1);
/// assert_eq!(clamp_match_count(1000), 50);
/// assert_eq!(clamp_match_count(20), 20);
/// ```
pub fn clamp_match_count(requested: i64) -> u8 {
    requested.clamp(MIN_MATCH_COUNT, MAX_MATCH_COUNT) as u8
}
