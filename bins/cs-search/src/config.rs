//! Configuration file loading
//!
//! Looks for `.cellar-search.toml` (or an explicit `--config` path). Every
//! key is optional; missing keys fall back to the engine defaults.

use cellar_search::{SearchError, SearchOptions, DEFAULT_MAX_RESULTS, DEFAULT_MIN_SCORE};
use cellar_telemetry::TelemetryConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_CANDIDATES: &[&str] = &[
    ".cellar-search.toml",
    "cellar-search.toml",
    ".config/cellar-search.toml",
];

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(transparent)]
    Invalid(#[from] SearchError),
}

/// Root configuration schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigSchema {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub suggest: SuggestConfig,

    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Generic ranking defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Record fields searched when `--field` is not given
    #[serde(default = "default_fields")]
    pub fields: Vec<String>,

    #[serde(default = "default_min_score")]
    pub min_score: f64,

    #[serde(default = "default_max_results")]
    pub max_results: usize,

    #[serde(default)]
    pub case_sensitive: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            fields: default_fields(),
            min_score: default_min_score(),
            max_results: default_max_results(),
            case_sensitive: false,
        }
    }
}

impl SearchConfig {
    pub fn options(&self) -> SearchOptions {
        SearchOptions::default()
            .with_min_score(self.min_score)
            .with_max_results(self.max_results)
            .with_case_sensitive(self.case_sensitive)
    }
}

fn default_fields() -> Vec<String> {
    vec!["nameZh".to_string(), "nameEn".to_string()]
}

fn default_min_score() -> f64 {
    DEFAULT_MIN_SCORE
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

/// Suggestion API defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestConfig {
    #[serde(default = "default_max_results")]
    pub limit: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self { limit: default_max_results() }
    }
}

/// Configuration wrapper
#[derive(Debug, Clone)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = path.map(Path::to_path_buf).or_else(find_config_file);

        let schema = match &config_path {
            Some(p) => load_config_file(p)?,
            None => ConfigSchema::default(),
        };
        schema.search.options().validate()?;

        Ok(Self { schema, path: config_path })
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
