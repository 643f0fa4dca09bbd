//! Ranking across a candidate collection.

use crate::fuzzy::normalize;
use crate::record::Record;
use crate::scorer::{score_normalized, RankedResult};
use crate::SearchOptions;

/// Rank `items` against `query` over the named `fields`.
///
/// Candidates whose aggregate score falls below `options.min_score` are
/// dropped. The rest are sorted by score, highest first, with a stable
/// sort so equal scores keep their input order, then truncated to
/// `options.max_results`.
///
/// An empty or whitespace-only query lists the first `max_results` items
/// in input order, each scored `1.0` with no field matches.
///
/// # Example
/// ```
/// use cellar_search::{search, SearchOptions};
/// use serde_json::json;
///
/// let items = vec![
///     json!({"nameZh": "波爾多紅酒"}),
///     json!({"nameZh": "勃根地白酒"}),
/// ];
///
/// let results = search(&items, "波爾多", &["nameZh"], &SearchOptions::default());
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].item["nameZh"], "波爾多紅酒");
/// ```
pub fn search<'a, T, F>(
    items: &'a [T],
    query: &str,
    fields: &[F],
    options: &SearchOptions,
) -> Vec<RankedResult<'a, T>>
where
    T: Record + Sync,
    F: AsRef<str> + Sync,
{
    let query = query.trim();

    if query.is_empty() {
        return items
            .iter()
            .take(options.max_results)
            .map(RankedResult::unscored)
            .collect();
    }

    let query = normalize(query, options.case_sensitive);
    let mut results = score_all(items, &query, fields, options);
    let matched = results.len();

    // Vec::sort_by is stable; ties keep input order.
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results.truncate(options.max_results);

    tracing::debug!(
        candidates = items.len(),
        matched,
        returned = results.len(),
        "ranked catalog candidates"
    );

    results
}

fn score_all<'a, T, F>(
    items: &'a [T],
    query: &str,
    fields: &[F],
    options: &SearchOptions,
) -> Vec<RankedResult<'a, T>>
where
    T: Record + Sync,
    F: AsRef<str> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        // collect() keeps input order, so ties stay stable below.
        items
            .par_iter()
            .filter_map(|item| score_normalized(item, query, fields, options))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        items
            .iter()
            .filter_map(|item| score_normalized(item, query, fields, options))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MatchTier;
    use serde_json::{json, Value};

    fn wines() -> Vec<Value> {
        vec![
            json!({"nameZh": "波爾多紅酒", "nameEn": "Bordeaux Red"}),
            json!({"nameZh": "勃根地白酒", "nameEn": "Burgundy White"}),
            json!({"nameZh": "香檳", "nameEn": "Champagne"}),
            json!({"nameZh": "波爾多", "nameEn": "Bordeaux"}),
            json!({"nameZh": "納帕谷紅酒", "nameEn": "Napa Valley Red"}),
        ]
    }

    #[test]
    fn test_contains_scenario() {
        let items = vec![json!({"nameZh": "波爾多紅酒"}), json!({"nameZh": "勃根地白酒"})];
        let results = search(&items, "波爾多", &["nameZh"], &SearchOptions::default());

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].item, &items[0]);
        assert_eq!(results[0].matches[0].tier, MatchTier::Contains);
        assert!(results[0].score > 0.7 && results[0].score < 1.0);
    }

    #[test]
    fn test_empty_query_lists_first_n() {
        let items = wines();
        let opts = SearchOptions::default().with_max_results(2);
        let results = search(&items, "", &["nameZh"], &opts);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].item, &items[0]);
        assert_eq!(results[1].item, &items[1]);
        assert!(results.iter().all(|r| r.score == 1.0 && r.matches.is_empty()));
    }

    #[test]
    fn test_whitespace_query_is_empty() {
        let items = wines();
        let results = search(&items, "   ", &["nameZh"], &SearchOptions::default());
        assert_eq!(results.len(), items.len());
    }

    #[test]
    fn test_exact_outranks_contains() {
        let items = wines();
        let results = search(&items, "bordeaux", &["nameEn"], &SearchOptions::default());

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].item["nameEn"], "Bordeaux");
        assert_eq!(results[1].item["nameEn"], "Bordeaux Red");
    }

    #[test]
    fn test_ties_keep_input_order() {
        let items = vec![
            json!({"id": 1, "nameEn": "Rosé"}),
            json!({"id": 2, "nameEn": "Merlot"}),
            json!({"id": 3, "nameEn": "Rosé"}),
            json!({"id": 4, "nameEn": "Rosé"}),
        ];
        let results = search(&items, "rosé", &["nameEn"], &SearchOptions::default());

        let ids: Vec<_> = results.iter().map(|r| r.item["id"].as_i64().unwrap()).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_truncates_after_sorting() {
        let items = vec![
            json!({"nameEn": "Red Blend"}),
            json!({"nameEn": "Red"}),
            json!({"nameEn": "Reds of Rioja"}),
        ];
        let opts = SearchOptions::default().with_max_results(1);
        let results = search(&items, "red", &["nameEn"], &opts);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].item["nameEn"], "Red");
    }

    #[test]
    fn test_fuzzy_typo() {
        let items = vec![json!({"nameEn": "Chardonnay"}), json!({"nameEn": "Zinfandel"})];
        let opts = SearchOptions::default();
        let results = search(&items, "chardonay", &["nameEn"], &opts);

        // Fuzzy band tops out at 0.5, so a 0.3 floor keeps the typo
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].matches[0].tier, MatchTier::Fuzzy);
        assert!(results[0].score <= 0.5);
    }

    #[test]
    fn test_case_sensitive_search() {
        let items = vec![json!({"nameEn": "Opus One"})];
        let opts = SearchOptions::default().with_case_sensitive(true);

        let results = search(&items, "Opus", &["nameEn"], &opts);
        assert_eq!(results[0].matches[0].tier, MatchTier::Contains);

        let results = search(&items, "OPUS ONE", &["nameEn"], &opts);
        assert!(results.is_empty() || results[0].matches[0].tier != MatchTier::Exact);
    }

    #[test]
    fn test_owned_field_names() {
        let items = wines();
        let fields = vec!["nameEn".to_string()];
        let results = search(&items, "champagne", &fields, &SearchOptions::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 1.0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_ties_keep_input_order() {
        let items: Vec<Value> = (0..500)
            .map(|i| {
                let name = if i % 3 == 0 { "Rosé" } else { "Rosé Brut" };
                json!({"id": i, "nameEn": name})
            })
            .collect();
        let opts = SearchOptions::default().with_max_results(usize::MAX);
        let results = search(&items, "rosé", &["nameEn"], &opts);

        assert_eq!(results.len(), items.len());
        let ids: Vec<_> = results.iter().map(|r| r.item["id"].as_i64().unwrap()).collect();
        let mut expected: Vec<i64> = (0..500).filter(|i| i % 3 == 0).collect();
        expected.extend((0..500).filter(|i| i % 3 != 0));
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_query_is_trimmed() {
        let items = wines();
        let results = search(&items, "  champagne ", &["nameEn"], &SearchOptions::default());
        assert_eq!(results[0].score, 1.0);
    }
}
