//! `cs-search similarity`: edit distance between two strings

use super::Context;
use anyhow::Result;
use cellar_search::{levenshtein_distance, similarity_with_case};

pub fn run(ctx: &Context, a: &str, b: &str, case_sensitive: bool) -> Result<()> {
    let score = similarity_with_case(a, b, case_sensitive);
    let distance = if case_sensitive {
        levenshtein_distance(a, b)
    } else {
        levenshtein_distance(&a.to_lowercase(), &b.to_lowercase())
    };

    if ctx.json {
        let out = serde_json::json!({ "distance": distance, "similarity": score });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("distance:   {}", distance);
        println!("similarity: {:.4}", score);
    }

    Ok(())
}
