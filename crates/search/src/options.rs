//! Tunables for the generic ranking path.

use crate::{Result, SearchError};
use serde::{Deserialize, Serialize};

/// Default minimum aggregate score for a candidate to be kept.
pub const DEFAULT_MIN_SCORE: f64 = 0.3;

/// Default cap on returned results.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Options for [`search`](crate::search).
///
/// Every field has a default, so a partial TOML or JSON document
/// deserializes cleanly:
///
/// ```
/// use cellar_search::SearchOptions;
///
/// let opts: SearchOptions = serde_json::from_str(r#"{"maxResults": 3}"#).unwrap();
/// assert_eq!(opts.max_results, 3);
/// assert_eq!(opts.min_score, 0.3);
/// assert!(!opts.case_sensitive);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    /// Minimum similarity for a fuzzy field match and minimum aggregate
    /// score for a candidate. Default `0.3`.
    #[serde(alias = "min_score")]
    pub min_score: f64,
    /// Results kept after sorting. Default `10`.
    #[serde(alias = "max_results")]
    pub max_results: usize,
    /// Compare without lower-casing. Default `false`.
    #[serde(alias = "case_sensitive")]
    pub case_sensitive: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            max_results: DEFAULT_MAX_RESULTS,
            case_sensitive: false,
        }
    }
}

impl SearchOptions {
    /// Set the minimum score.
    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    /// Set the result cap.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Set case sensitivity.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Check the options at an API boundary.
    ///
    /// Ranking itself accepts any value; this is for callers that take
    /// options from users or config files.
    pub fn validate(&self) -> Result<()> {
        if !self.min_score.is_finite() || !(0.0..=1.0).contains(&self.min_score) {
            return Err(SearchError::InvalidOptions(format!(
                "min_score must be within [0, 1], got {}",
                self.min_score
            )));
        }

        if self.max_results == 0 {
            return Err(SearchError::InvalidOptions(
                "max_results must be positive".into(),
            ));
        }

        Ok(())
    }
}
