//! Multi-field scoring for one candidate record.

use crate::fuzzy::normalize;
use crate::record::Record;
use crate::relevance::{classify_normalized, MatchTier};
use crate::SearchOptions;
use serde::Serialize;

/// Evidence for one field's contribution to a ranked result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldMatch {
    /// Field name as given in the caller's field list
    pub field: String,
    /// Original (un-normalized) field value
    pub value: String,
    /// Tier-scaled score for this field
    pub score: f64,
    /// Tier the field landed in
    pub tier: MatchTier,
}

/// A candidate that cleared the score threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult<'a, T> {
    /// The matched candidate
    pub item: &'a T,
    /// Aggregate relevance in `[0, 1]`
    pub score: f64,
    /// Per-field evidence, in field-list order
    pub matches: Vec<FieldMatch>,
}

impl<'a, T> RankedResult<'a, T> {
    /// Listing entry for an empty query: score `1.0`, no field evidence.
    pub(crate) fn unscored(item: &'a T) -> Self {
        Self { item, score: 1.0, matches: Vec::new() }
    }
}

/// Score one candidate across `fields`.
///
/// Fields that are missing, non-string or empty are skipped. The aggregate
/// is the mean of the matching fields' scores, so records with many fields
/// do not win on volume alone.
///
/// # Returns
/// * `Some(result)` if at least one field matched and the mean is at least
///   `options.min_score`
/// * `None` if the candidate should be excluded
///
/// The query is trimmed first. An empty or whitespace-only query keeps the
/// candidate with score `1.0` and no matches, as [`search`](crate::search)
/// does for its listing.
pub fn score_candidate<'a, T, F>(
    item: &'a T,
    query: &str,
    fields: &[F],
    options: &SearchOptions,
) -> Option<RankedResult<'a, T>>
where
    T: Record,
    F: AsRef<str>,
{
    let query = query.trim();
    if query.is_empty() {
        return Some(RankedResult::unscored(item));
    }

    let query = normalize(query, options.case_sensitive);
    score_normalized(item, &query, fields, options)
}

pub(crate) fn score_normalized<'a, T, F>(
    item: &'a T,
    query: &str,
    fields: &[F],
    options: &SearchOptions,
) -> Option<RankedResult<'a, T>>
where
    T: Record,
    F: AsRef<str>,
{
    let mut matches = Vec::new();

    for field in fields {
        let field = field.as_ref();
        let Some(value) = item.field(field) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }

        let normalized = normalize(value, options.case_sensitive);
        let hit = classify_normalized(&normalized, query, options.min_score);
        if hit.tier.is_match() {
            matches.push(FieldMatch {
                field: field.to_string(),
                value: value.to_string(),
                score: hit.score,
                tier: hit.tier,
            });
        }
    }

    if matches.is_empty() {
        return None;
    }

    let score = matches.iter().map(|m| m.score).sum::<f64>() / matches.len() as f64;
    if score < options.min_score {
        return None;
    }

    Some(RankedResult { item, score, matches })
}
