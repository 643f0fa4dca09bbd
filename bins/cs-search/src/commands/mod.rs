//! Subcommand implementations

pub mod highlight;
pub mod search;
pub mod similarity;
pub mod suggest;

use crate::config::ConfigSchema;
use anyhow::{Context as _, Result};
use cellar_telemetry::Timer;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Settings shared by every subcommand
pub struct Context {
    pub config: ConfigSchema,
    /// Print machine-readable JSON instead of text
    pub json: bool,
    /// Stdout is a terminal
    pub color: bool,
}

/// Read a catalog: a JSON array of records from a file, or stdin for `-`.
pub fn load_catalog(path: &Path) -> Result<Vec<Value>> {
    let timer = Timer::start("catalog.load_ms");

    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read catalog from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?
    };

    let items: Vec<Value> = serde_json::from_str(&raw)
        .with_context(|| format!("Catalog {} is not a JSON array of records", path.display()))?;

    let elapsed = timer.stop();
    tracing::debug!(records = items.len(), elapsed_ms = elapsed.as_millis(), "catalog loaded");

    Ok(items)
}

/// First non-empty string among `fields`, used as a result's display title.
pub fn display_title<'a, S: AsRef<str>>(item: &'a Value, fields: &[S]) -> Option<&'a str> {
    fields.iter().find_map(|field| {
        item.get(field.as_ref())
            .and_then(Value::as_str)
            .filter(|v| !v.is_empty())
    })
}
