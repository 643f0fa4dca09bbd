//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use cellar_search::Segment;
use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }
}

/// Render highlight segments for a terminal, matched runs in bold yellow.
///
/// With `color` off, matches are wrapped in `[` `]` so they stay visible
/// when output is piped.
pub fn render_segments(segments: &[Segment], color: bool) -> String {
    let mut out = String::new();
    for segment in segments {
        match (segment.is_match, color) {
            (true, true) => out.push_str(&segment.text.bold().yellow().to_string()),
            (true, false) => {
                out.push('[');
                out.push_str(&segment.text);
                out.push(']');
            }
            (false, _) => out.push_str(&segment.text),
        }
    }
    out
}

/// Format a relevance score for display
///
/// Generic ranking scores live in `[0, 1]` and print with three decimals;
/// suggestion scores are point totals and print with one.
pub fn format_score(score: f64) -> String {
    if score <= 1.0 {
        format!("{:.3}", score)
    } else {
        format!("{:.1}", score)
    }
}

/// Format a duration for display
pub fn format_duration(duration: std::time::Duration) -> String {
    let micros = duration.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.1}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellar_search::{highlight, HighlightOptions};
    use std::time::Duration;

    #[test]
    fn test_render_segments_plain() {
        let segments = highlight("Château Margaux", &["margaux"], &HighlightOptions::default());
        assert_eq!(render_segments(&segments, false), "Château [Margaux]");
    }

    #[test]
    fn test_render_segments_color_keeps_text() {
        let segments = highlight("Opus One", &["one"], &HighlightOptions::default());
        let rendered = render_segments(&segments, true);
        assert!(rendered.starts_with("Opus "));
        assert!(rendered.contains("One"));
        assert_ne!(rendered, "Opus One");
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(0.875), "0.875");
        assert_eq!(format_score(1.0), "1.000");
        assert_eq!(format_score(14.0), "14.0");
    }

    #[test]
    fn test_format_duration_micros() {
        assert_eq!(format_duration(Duration::from_micros(250)), "250µs");
    }

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration(Duration::from_micros(2500)), "2.5ms");
    }

    #[test]
    fn test_format_duration_secs() {
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
    }

    #[test]
    fn test_format_count_singular() {
        assert_eq!(format_count(1, "result", "results"), "1 result");
    }

    #[test]
    fn test_format_count_plural() {
        assert_eq!(format_count(5, "result", "results"), "5 results");
    }
}
