//! Catalog search-as-you-type for the cellar storefront.
//!
//! This crate provides:
//! - Levenshtein-based string similarity
//! - Tiered match classification (exact / contains / fuzzy)
//! - Multi-field ranking with threshold and truncation
//! - A fixed-weight scorer for the product suggestion API
//! - Match highlighting for display text
//!
//! Everything here is a pure function of its inputs. Candidates arrive as an
//! in-memory slice that the caller has already fetched and capped; nothing is
//! indexed or cached between calls.
//!
//! # Example
//!
//! ```
//! use cellar_search::{highlight_query, search, HighlightOptions, SearchOptions};
//! use serde_json::json;
//!
//! let catalog = vec![
//!     json!({"nameZh": "作品一號", "nameEn": "Opus One"}),
//!     json!({"nameZh": "香檳", "nameEn": "Champagne"}),
//! ];
//!
//! let results = search(&catalog, "opus", &["nameZh", "nameEn"], &SearchOptions::default());
//! assert_eq!(results.len(), 1);
//!
//! let title = results[0].item["nameEn"].as_str().unwrap();
//! let segments = highlight_query(title, "opus", &HighlightOptions::default());
//! assert!(segments[0].is_match);
//! ```

mod error;
mod fuzzy;
mod highlight;
pub mod json;
mod options;
mod ranking;
mod record;
mod relevance;
mod scorer;
mod suggest;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::{Result, SearchError, SearchErrorCode};
pub use fuzzy::{levenshtein_distance, similarity, similarity_with_case};
pub use highlight::{highlight, highlight_query, to_html, to_marked_string, HighlightOptions, Segment};
pub use options::{SearchOptions, DEFAULT_MAX_RESULTS, DEFAULT_MIN_SCORE};
pub use ranking::search;
pub use record::Record;
pub use relevance::{classify, FieldScore, MatchTier};
pub use scorer::{score_candidate, FieldMatch, RankedResult};
pub use suggest::{
    rank_suggestions, record_relevance_score, relevance_score, Suggestion, SuggestionCandidate,
};
