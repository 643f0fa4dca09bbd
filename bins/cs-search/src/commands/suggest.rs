//! `cs-search suggest`: fixed-weight suggestion ranking

use super::{display_title, load_catalog, Context};
use anyhow::Result;
use cellar_cli::output::{format_score, render_segments, Status};
use cellar_search::{highlight_query, rank_suggestions, HighlightOptions};
use cellar_telemetry::{metrics, SearchStats};
use std::path::PathBuf;
use std::time::Instant;

const SUGGESTION_FIELDS: [&str; 3] = ["nameZh", "nameEn", "region"];

pub fn run(ctx: &Context, catalog: PathBuf, query: String, limit: Option<usize>) -> Result<()> {
    let items = load_catalog(&catalog)?;
    let limit = limit.unwrap_or(ctx.config.suggest.limit);

    let started = Instant::now();
    let ranked = rank_suggestions(&items, &query, Some(limit));

    metrics().record_search(&SearchStats {
        operation: "suggest",
        candidates: items.len(),
        returned: ranked.len(),
        elapsed: started.elapsed(),
    });

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    if ranked.is_empty() {
        Status::warning(&format!("No suggestions for \"{}\"", query));
        return Ok(());
    }

    for suggestion in &ranked {
        let label = display_title(suggestion.item, &SUGGESTION_FIELDS)
            .map(|text| render_segments(&highlight_query(text, &query, &HighlightOptions::default()), ctx.color))
            .unwrap_or_else(|| suggestion.item.to_string());
        println!("{:>6}  {}", format_score(suggestion.score), label);
    }

    Ok(())
}
