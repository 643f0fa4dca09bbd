//! Match highlighting for display text.
//!
//! Keywords are always passed through [`regex::escape`] before they are
//! joined into one alternation, so user input such as `"c++"` or `"(2019)"`
//! matches literally.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// A run of display text, either plain or matching a keyword.
///
/// Concatenating every segment's `text` in order yields the original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub text: String,
    pub is_match: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self { text: text.to_string(), is_match: false }
    }

    fn matched(text: &str) -> Self {
        Self { text: text.to_string(), is_match: true }
    }
}

/// Options for [`highlight`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HighlightOptions {
    /// Match keywords with exact case. Default `false`.
    pub case_sensitive: bool,
}

/// Split `text` into plain and matched segments for `keywords`.
///
/// Empty keywords are ignored. With no usable keywords the whole text is
/// returned as a single plain segment. Where keywords overlap, the longest
/// one wins at a given position.
///
/// # Example
/// ```
/// use cellar_search::{highlight, HighlightOptions, Segment};
///
/// let segments = highlight("Château Margaux", &["margaux"], &HighlightOptions::default());
/// assert_eq!(segments, vec![
///     Segment { text: "Château ".into(), is_match: false },
///     Segment { text: "Margaux".into(), is_match: true },
/// ]);
/// ```
pub fn highlight<K: AsRef<str>>(text: &str, keywords: &[K], options: &HighlightOptions) -> Vec<Segment> {
    let Some(pattern) = build_pattern(keywords, options) else {
        return vec![Segment::plain(text)];
    };

    let mut segments = Vec::new();
    let mut last = 0;

    for found in pattern.find_iter(text) {
        if found.start() > last {
            segments.push(Segment::plain(&text[last..found.start()]));
        }
        segments.push(Segment::matched(found.as_str()));
        last = found.end();
    }

    if last < text.len() || segments.is_empty() {
        segments.push(Segment::plain(&text[last..]));
    }

    segments
}

/// Highlight every whitespace-separated term of `query`.
pub fn highlight_query(text: &str, query: &str, options: &HighlightOptions) -> Vec<Segment> {
    let keywords: Vec<&str> = query.split_whitespace().collect();
    highlight(text, &keywords, options)
}

/// Render segments as a marked-up string, wrapping matches in `open`/`close`.
///
/// Segment text is copied verbatim. For HTML output use [`to_html`], which
/// escapes the text.
///
/// ```
/// use cellar_search::{highlight_query, to_marked_string, HighlightOptions};
///
/// let segments = highlight_query("Opus One 2018", "one", &HighlightOptions::default());
/// assert_eq!(to_marked_string(&segments, "<mark>", "</mark>"), "Opus <mark>One</mark> 2018");
/// ```
pub fn to_marked_string(segments: &[Segment], open: &str, close: &str) -> String {
    let mut out = String::new();
    for segment in segments {
        if segment.is_match {
            out.push_str(open);
            out.push_str(&segment.text);
            out.push_str(close);
        } else {
            out.push_str(&segment.text);
        }
    }
    out
}

/// Render segments as HTML, matches wrapped in `<mark>`.
///
/// `&`, `<`, `>`, `"` and `'` in the text are escaped.
///
/// ```
/// use cellar_search::{highlight_query, to_html, HighlightOptions};
///
/// let segments = highlight_query("<b>Opus</b> One", "opus", &HighlightOptions::default());
/// assert_eq!(to_html(&segments), "&lt;b&gt;<mark>Opus</mark>&lt;/b&gt; One");
/// ```
pub fn to_html(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        if segment.is_match {
            out.push_str("<mark>");
            push_escaped(&mut out, &segment.text);
            out.push_str("</mark>");
        } else {
            push_escaped(&mut out, &segment.text);
        }
    }
    out
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

fn build_pattern<K: AsRef<str>>(keywords: &[K], options: &HighlightOptions) -> Option<Regex> {
    let mut terms: Vec<&str> = keywords
        .iter()
        .map(|k| k.as_ref())
        .filter(|k| !k.is_empty())
        .collect();

    if terms.is_empty() {
        return None;
    }

    // Alternation is leftmost-first; longer terms go first so "pinot noir"
    // beats "pinot" at the same position.
    terms.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    terms.dedup();

    let alternation = terms
        .iter()
        .map(|term| regex::escape(term))
        .collect::<Vec<_>>()
        .join("|");

    match RegexBuilder::new(&alternation)
        .case_insensitive(!options.case_sensitive)
        .build()
    {
        Ok(pattern) => Some(pattern),
        Err(e) => {
            tracing::warn!(error = %e, terms = terms.len(), "highlight pattern rejected, rendering plain text");
            None
        }
    }
}
