//! Logging and search metrics for cellar tools
//!
//! - Structured logging with tracing (compact or JSON, stderr or rolling file)
//! - In-process counters and latency histograms for search calls
//! - Session ids for correlating log lines from one run

mod metrics;
mod timer;

pub use metrics::{metrics, HistogramStats, MetricsRegistry, SearchStats, MAX_HISTOGRAM_SAMPLES};
pub use timer::Timer;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

/// Global session ID for correlating logs
static SESSION_ID: Lazy<String> = Lazy::new(|| Uuid::new_v4().to_string());

/// File name prefix for rolling log files.
const LOG_FILE_PREFIX: &str = "cellar-search.log";

/// Log line layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Single-line human readable output
    #[default]
    Compact,
    /// One JSON object per line
    Json,
}

/// Telemetry configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Default filter directive; `RUST_LOG` takes precedence when set
    pub log_level: String,
    pub format: LogFormat,
    pub show_target: bool,
    /// Write daily-rotated log files here instead of stderr
    pub log_dir: Option<PathBuf>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            format: LogFormat::Compact,
            show_target: false,
            log_dir: None,
        }
    }
}

/// Keeps the background log writer alive; drop it to flush file output.
#[must_use = "dropping the guard stops file logging"]
pub struct TelemetryGuard {
    _file_writer: Option<WorkerGuard>,
}

/// Install the global tracing subscriber.
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn init(config: &TelemetryConfig) -> anyhow::Result<TelemetryGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let (writer, file_writer) = match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(non_blocking), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };

    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(config.log_dir.is_none())
        .with_target(config.show_target);

    let installed = match config.format {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .try_init(),
    };
    installed.map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    tracing::debug!(
        session_id = %session_id(),
        version = env!("CARGO_PKG_VERSION"),
        "telemetry initialized"
    );

    Ok(TelemetryGuard { _file_writer: file_writer })
}

/// Get the current session ID
pub fn session_id() -> &'static str {
    &SESSION_ID
}

/// Structured record of something that happened during a run
#[derive(Debug, Serialize)]
pub struct Event {
    pub timestamp: DateTime<Utc>,
    pub session_id: String,
    pub event_type: String,
    pub data: serde_json::Value,
}

impl Event {
    pub fn new(event_type: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            timestamp: Utc::now(),
            session_id: session_id().to_string(),
            event_type: event_type.into(),
            data,
        }
    }

    pub fn log(&self) {
        tracing::info!(
            event_type = %self.event_type,
            data = %self.data,
            "event recorded"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id() {
        let id = session_id();
        assert!(Uuid::parse_str(id).is_ok());
        assert_eq!(id, session_id());
    }

    #[test]
    fn test_config_defaults_from_partial_toml_shape() {
        let config: TelemetryConfig =
            serde_json::from_value(serde_json::json!({"format": "json"})).unwrap();
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.log_level, "warn");
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_event_carries_session() {
        let event = Event::new("search_completed", serde_json::json!({"returned": 3}));
        assert_eq!(event.session_id, session_id());
        assert_eq!(event.data["returned"], 3);
    }

    #[test]
    fn test_init_once_with_file_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = TelemetryConfig {
            log_dir: Some(dir.path().to_path_buf()),
            ..TelemetryConfig::default()
        };

        let guard = init(&config).unwrap();
        assert!(init(&config).is_err());
        drop(guard);
    }
}
