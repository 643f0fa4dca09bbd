//! `cs-search highlight`: segment text for display

use super::Context;
use anyhow::Result;
use cellar_cli::output::render_segments;
use cellar_search::{highlight, to_html, HighlightOptions};

pub fn run(ctx: &Context, text: &str, keywords: &[String], case_sensitive: bool, mark: bool) -> Result<()> {
    let segments = highlight(text, keywords, &HighlightOptions { case_sensitive });

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&segments)?);
    } else if mark {
        println!("{}", to_html(&segments));
    } else {
        println!("{}", render_segments(&segments, ctx.color));
    }

    Ok(())
}
