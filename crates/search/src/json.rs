//! JSON-in, JSON-out entry points for callers that hold catalog data as text.

use crate::{highlight, rank_suggestions, search, HighlightOptions, Result, SearchOptions};
use serde_json::Value;

/// Rank a JSON array of records and return the ranked results as JSON.
///
/// Output is an array of `{"item", "score", "matches"}` objects.
///
/// # Errors
/// Fails if `items_json` is not a JSON array or the options are out of
/// range.
///
/// # Example
/// ```
/// use cellar_search::{json::search_json, SearchOptions};
///
/// let items = r#"[{"nameEn": "Opus One"}, {"nameEn": "Overture"}]"#;
/// let out = search_json(items, "opus", &["nameEn"], &SearchOptions::default()).unwrap();
/// let ranked: serde_json::Value = serde_json::from_str(&out).unwrap();
/// assert_eq!(ranked[0]["item"]["nameEn"], "Opus One");
/// ```
pub fn search_json<F>(items_json: &str, query: &str, fields: &[F], options: &SearchOptions) -> Result<String>
where
    F: AsRef<str> + Sync,
{
    options.validate()?;
    let items: Vec<Value> = serde_json::from_str(items_json)?;
    let results = search(&items, query, fields, options);
    Ok(serde_json::to_string(&results)?)
}

/// Score a JSON array of suggestion records and return `{"item", "score"}`
/// objects sorted best first, zero scores dropped.
pub fn suggest_json(items_json: &str, query: &str, limit: Option<usize>) -> Result<String> {
    let items: Vec<Value> = serde_json::from_str(items_json)?;
    let ranked = rank_suggestions(&items, query, limit);
    Ok(serde_json::to_string(&ranked)?)
}

/// Highlight `text` for `keywords` and return the segments as JSON.
pub fn highlight_json<K: AsRef<str>>(text: &str, keywords: &[K], options: &HighlightOptions) -> Result<String> {
    Ok(serde_json::to_string(&highlight(text, keywords, options))?)
}
