//! WASM bindings for catalog search.

use crate::{HighlightOptions, SearchOptions};
use wasm_bindgen::prelude::*;

/// Normalized edit-distance similarity in `[0, 1]`, case-insensitive.
#[wasm_bindgen]
pub fn similarity(a: &str, b: &str) -> f64 {
    crate::similarity(a, b)
}

/// Rank catalog records for a query.
///
/// # Arguments
/// * `query` - Search query
/// * `items_json` - JSON array of records
/// * `fields_json` - JSON array of field names to search
/// * `options_json` - JSON options object (`minScore`, `maxResults`,
///   `caseSensitive`); empty string for defaults
///
/// # Returns
/// JSON array of `{item, score, matches}`, best first
#[wasm_bindgen]
pub fn search_items(query: &str, items_json: &str, fields_json: &str, options_json: &str) -> Result<String, JsValue> {
    let fields: Vec<String> = serde_json::from_str(fields_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;

    let options: SearchOptions = if options_json.trim().is_empty() {
        SearchOptions::default()
    } else {
        serde_json::from_str(options_json)
            .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?
    };

    crate::json::search_json(items_json, query, &fields, &options)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Relevance of one suggestion record (`nameZh`, `nameEn`, `region`).
///
/// Returns 0 for an empty query or unparseable record.
#[wasm_bindgen]
pub fn suggestion_score(item_json: &str, query: &str) -> f64 {
    match serde_json::from_str::<crate::SuggestionCandidate>(item_json) {
        Ok(item) => crate::relevance_score(&item, query),
        Err(_) => 0.0,
    }
}

/// Split text into highlight segments for a whitespace-separated query.
///
/// # Returns
/// JSON array of `{text, isMatch}`
#[wasm_bindgen]
pub fn highlight_text(text: &str, query: &str, case_sensitive: bool) -> Result<String, JsValue> {
    let segments = crate::highlight_query(text, query, &HighlightOptions { case_sensitive });
    serde_json::to_string(&segments)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}
