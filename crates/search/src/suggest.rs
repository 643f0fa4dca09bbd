//! Fixed-weight relevance for the product suggestion API.
//!
//! This scorer shares the similarity primitive with the generic ranking
//! path but keeps its own point scale: localized names are worth more than
//! region, and per-field points are summed so a query that hits both the
//! Chinese and the English name outranks one that hits only one of them.
//! The result is a ranking key, not a confidence in `[0, 1]`.

use crate::fuzzy::{normalize, normalized_similarity};
use crate::record::Record;
use serde::{Deserialize, Serialize};

/// Points for an exact name match.
pub const NAME_EXACT_POINTS: f64 = 10.0;
/// Points for a name that contains the query.
pub const NAME_CONTAINS_POINTS: f64 = 7.0;
/// Multiplier on similarity for a fuzzy name match.
pub const NAME_FUZZY_WEIGHT: f64 = 5.0;
/// Similarity a name needs before fuzzy points are awarded.
pub const NAME_FUZZY_THRESHOLD: f64 = 0.5;
/// Points for an exact region match.
pub const REGION_EXACT_POINTS: f64 = 5.0;
/// Points for a region that contains the query.
pub const REGION_CONTAINS_POINTS: f64 = 3.0;

/// The fields the suggestion API ranks on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionCandidate {
    /// Chinese product name
    #[serde(default)]
    pub name_zh: Option<String>,
    /// English product name
    #[serde(default)]
    pub name_en: Option<String>,
    /// Region of origin
    #[serde(default)]
    pub region: Option<String>,
}

impl SuggestionCandidate {
    /// Copy the suggestion fields (`nameZh`, `nameEn`, `region`) out of a record.
    pub fn from_record<R: Record + ?Sized>(record: &R) -> Self {
        Self {
            name_zh: record.field("nameZh").map(str::to_string),
            name_en: record.field("nameEn").map(str::to_string),
            region: record.field("region").map(str::to_string),
        }
    }
}

/// A scored suggestion, as returned by [`rank_suggestions`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion<'a, T> {
    pub item: &'a T,
    pub score: f64,
}

/// Relevance of a suggestion candidate for `query`.
///
/// Case-insensitive. An empty or whitespace-only query scores `0`.
///
/// # Example
/// ```
/// use cellar_search::{relevance_score, SuggestionCandidate};
///
/// let item = SuggestionCandidate {
///     name_zh: Some("Opus One".into()),
///     name_en: Some("Opus One".into()),
///     region: None,
/// };
/// assert_eq!(relevance_score(&item, "Opus"), 14.0);
/// ```
pub fn relevance_score(item: &SuggestionCandidate, query: &str) -> f64 {
    score_fields(
        item.name_zh.as_deref(),
        item.name_en.as_deref(),
        item.region.as_deref(),
        query,
    )
}

/// [`relevance_score`] read straight from a record's `nameZh`, `nameEn`
/// and `region` fields.
pub fn record_relevance_score<R: Record + ?Sized>(record: &R, query: &str) -> f64 {
    score_fields(
        record.field("nameZh"),
        record.field("nameEn"),
        record.field("region"),
        query,
    )
}

/// Score records, drop those scoring zero, and sort best first.
///
/// Equal scores keep input order. `limit` caps the output after sorting.
pub fn rank_suggestions<'a, R: Record>(
    items: &'a [R],
    query: &str,
    limit: Option<usize>,
) -> Vec<Suggestion<'a, R>> {
    let mut ranked: Vec<Suggestion<'a, R>> = items
        .iter()
        .map(|item| Suggestion { item, score: record_relevance_score(item, query) })
        .filter(|s| s.score > 0.0)
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    if let Some(limit) = limit {
        ranked.truncate(limit);
    }

    tracing::debug!(candidates = items.len(), returned = ranked.len(), "ranked suggestions");

    ranked
}

fn score_fields(
    name_zh: Option<&str>,
    name_en: Option<&str>,
    region: Option<&str>,
    query: &str,
) -> f64 {
    let query = query.trim();
    if query.is_empty() {
        return 0.0;
    }
    let query = normalize(query, false);

    name_points(name_zh, &query) + name_points(name_en, &query) + region_points(region, &query)
}

fn name_points(value: Option<&str>, query: &str) -> f64 {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return 0.0;
    };
    let value = normalize(value, false);

    if value == query {
        NAME_EXACT_POINTS
    } else if value.contains(query) {
        NAME_CONTAINS_POINTS
    } else {
        let similarity = normalized_similarity(&value, query);
        if similarity >= NAME_FUZZY_THRESHOLD {
            similarity * NAME_FUZZY_WEIGHT
        } else {
            0.0
        }
    }
}

fn region_points(value: Option<&str>, query: &str) -> f64 {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return 0.0;
    };
    let value = normalize(value, false);

    if value == query {
        REGION_EXACT_POINTS
    } else if value.contains(query) {
        REGION_CONTAINS_POINTS
    } else {
        0.0
    }
}
