//! `cs-search search`: generic multi-field ranking

use super::{display_title, load_catalog, Context};
use anyhow::Result;
use cellar_cli::output::{format_count, format_duration, format_score, render_segments, Status};
use cellar_search::{highlight_query, search, HighlightOptions};
use cellar_telemetry::{metrics, Event, SearchStats};
use std::path::PathBuf;
use std::time::Instant;

pub struct SearchArgs {
    pub catalog: PathBuf,
    pub query: String,
    pub fields: Vec<String>,
    pub min_score: Option<f64>,
    pub max_results: Option<usize>,
    pub case_sensitive: bool,
}

pub fn run(ctx: &Context, args: SearchArgs) -> Result<()> {
    let items = load_catalog(&args.catalog)?;

    let fields = if args.fields.is_empty() {
        ctx.config.search.fields.clone()
    } else {
        args.fields
    };

    let mut options = ctx.config.search.options();
    if let Some(min_score) = args.min_score {
        options.min_score = min_score;
    }
    if let Some(max_results) = args.max_results {
        options.max_results = max_results;
    }
    options.case_sensitive |= args.case_sensitive;
    options.validate()?;

    let started = Instant::now();
    let results = search(&items, &args.query, &fields, &options);
    let elapsed = started.elapsed();

    metrics().record_search(&SearchStats {
        operation: "search",
        candidates: items.len(),
        returned: results.len(),
        elapsed,
    });
    Event::new(
        "search_completed",
        serde_json::json!({
            "query": args.query,
            "fields": fields,
            "candidates": items.len(),
            "returned": results.len(),
        }),
    )
    .log();

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        Status::warning(&format!("No matches for \"{}\"", args.query));
        return Ok(());
    }

    Status::header(&format!(
        "{} for \"{}\" ({})",
        format_count(results.len(), "result", "results"),
        args.query,
        format_duration(elapsed)
    ));

    let highlight_opts = HighlightOptions { case_sensitive: options.case_sensitive };
    for (rank, result) in results.iter().enumerate() {
        let matched = result.matches.first().map(|m| m.value.as_str());
        let title = match matched.or_else(|| display_title(result.item, &fields)) {
            Some(text) => render_segments(&highlight_query(text, &args.query, &highlight_opts), ctx.color),
            None => result.item.to_string(),
        };
        println!("{:>3}. {}  {}", rank + 1, format_score(result.score), title);

        for m in &result.matches {
            println!("       {:<10} {:<8} {}", m.field, m.tier.as_str(), format_score(m.score));
        }
    }

    Ok(())
}
