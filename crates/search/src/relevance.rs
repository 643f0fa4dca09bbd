//! Tiered match classification for a single field value.

use crate::fuzzy::{normalize, normalized_similarity};
use serde::{Deserialize, Serialize};

/// Score of an exact match.
pub const EXACT_SCORE: f64 = 1.0;

/// Floor of the contains band.
pub const CONTAINS_BASE: f64 = 0.7;

/// Width of the contains band, scaled by query coverage of the field.
pub const CONTAINS_SPAN: f64 = 0.3;

/// Multiplier applied to similarity in the fuzzy band.
pub const FUZZY_WEIGHT: f64 = 0.5;

/// Match confidence levels, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    /// Field equals the query
    Exact,
    /// Field contains the query as a substring
    Contains,
    /// Field is within edit-distance tolerance of the query
    Fuzzy,
    /// No match
    None,
}

impl MatchTier {
    /// Returns true unless the tier is [`MatchTier::None`].
    #[inline]
    pub fn is_match(self) -> bool {
        self != MatchTier::None
    }

    /// Lower-case tier name, as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchTier::Exact => "exact",
            MatchTier::Contains => "contains",
            MatchTier::Fuzzy => "fuzzy",
            MatchTier::None => "none",
        }
    }
}

/// Tier and tier-scaled score for one field comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldScore {
    pub tier: MatchTier,
    pub score: f64,
}

impl FieldScore {
    const NONE: FieldScore = FieldScore { tier: MatchTier::None, score: 0.0 };
}

/// Classify how well `field_value` matches `query`.
///
/// # Arguments
/// * `field_value` - Candidate field text
/// * `query` - Search query, already trimmed; an empty query never matches
/// * `case_sensitive` - Compare without lower-casing
/// * `min_score` - Similarity needed to qualify as a fuzzy match
///
/// # Returns
/// * `Exact` scores `1.0`
/// * `Contains` scores `0.7 + (len(query) / len(field)) * 0.3`
/// * `Fuzzy` scores `similarity * 0.5`
/// * `None` scores `0.0`
///
/// # Example
/// ```
/// use cellar_search::{classify, MatchTier};
///
/// let hit = classify("Opus One", "opus", false, 0.3);
/// assert_eq!(hit.tier, MatchTier::Contains);
/// assert!((hit.score - 0.85).abs() < 1e-9);
/// ```
pub fn classify(field_value: &str, query: &str, case_sensitive: bool, min_score: f64) -> FieldScore {
    let value = normalize(field_value, case_sensitive);
    let query = normalize(query, case_sensitive);
    classify_normalized(&value, &query, min_score)
}

pub(crate) fn classify_normalized(value: &str, query: &str, min_score: f64) -> FieldScore {
    // Every string contains "", so an empty query would land in the contains band
    if query.is_empty() {
        return FieldScore::NONE;
    }

    if value == query {
        return FieldScore { tier: MatchTier::Exact, score: EXACT_SCORE };
    }

    if value.contains(query) {
        let coverage = query.chars().count() as f64 / value.chars().count() as f64;
        return FieldScore {
            tier: MatchTier::Contains,
            score: CONTAINS_BASE + coverage * CONTAINS_SPAN,
        };
    }

    let similarity = normalized_similarity(value, query);
    if similarity >= min_score {
        return FieldScore {
            tier: MatchTier::Fuzzy,
            score: similarity * FUZZY_WEIGHT,
        };
    }

    FieldScore::NONE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let hit = classify("Barolo", "barolo", false, 0.3);
        assert_eq!(hit.tier, MatchTier::Exact);
        assert_eq!(hit.score, 1.0);
    }

    #[test]
    fn test_exact_requires_case_when_sensitive() {
        let hit = classify("Barolo", "barolo", true, 0.3);
        assert_ne!(hit.tier, MatchTier::Exact);
    }

    #[test]
    fn test_contains_band() {
        let hit = classify("波爾多紅酒", "波爾多", false, 0.3);
        assert_eq!(hit.tier, MatchTier::Contains);
        assert!((hit.score - (0.7 + 0.6 * 0.3)).abs() < 1e-9);
        assert!(hit.score > 0.7 && hit.score < 1.0);
    }

    #[test]
    fn test_longer_query_scores_higher_within_contains() {
        let short = classify("Château Margaux", "marg", false, 0.3);
        let long = classify("Château Margaux", "margaux", false, 0.3);
        assert!(long.score > short.score);
    }

    #[test]
    fn test_fuzzy_band() {
        let hit = classify("wine", "vine", false, 0.3);
        assert_eq!(hit.tier, MatchTier::Fuzzy);
        assert_eq!(hit.score, 0.375);
    }

    #[test]
    fn test_fuzzy_respects_threshold() {
        let hit = classify("wine", "vine", false, 0.8);
        assert_eq!(hit.tier, MatchTier::None);
        assert_eq!(hit.score, 0.0);
    }

    #[test]
    fn test_no_match() {
        let hit = classify("勃根地白酒", "波爾多", false, 0.3);
        assert!(!hit.tier.is_match());
    }

    #[test]
    fn test_empty_query_never_matches() {
        let hit = classify("Opus One", "", false, 0.3);
        assert_eq!(hit.tier, MatchTier::None);
        assert_eq!(hit.score, 0.0);

        assert_eq!(classify("", "", false, 0.0).tier, MatchTier::None);
    }

    #[test]
    fn test_tier_serializes_lowercase() {
        let json = serde_json::to_string(&MatchTier::Contains).unwrap();
        assert_eq!(json, "\"contains\"");
    }
}
