use crate::dependency_resolution::domain::VersionToken;

/// Characters stripped from both ends of a declared range
const RANGE_DELIMITERS: &[char] = &['[', ']', '(', ')', ' '];

/// Turns a declared range into the version token that gets visited.
///
/// This is an approximation, not range evaluation: `[2.0.0]` becomes
/// `2.0.0`, and `[1.0.0, 2.0.0)` becomes `1.0.0, 2.0.0`. Only the ends are
/// stripped; anything inside is kept verbatim.
pub struct RangeNormalizer;

impl RangeNormalizer {
    pub fn normalize(range: &str) -> VersionToken {
        let stripped = range.trim_matches(RANGE_DELIMITERS);
        VersionToken::new(stripped).unwrap_or_else(|_| VersionToken::latest())
    }
}
