//! Edit-distance similarity.

use std::borrow::Cow;

/// Calculate Levenshtein edit distance between two strings.
///
/// Distances are counted in `char`s, so a single CJK ideograph or an
/// accented letter is one edit.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character insertions, deletions and substitutions
/// needed to transform `a` into `b`
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    distance_chars(&a_chars, &b_chars)
}

fn distance_chars(a: &[char], b: &[char]) -> usize {
    let m = a.len();
    let n = b.len();

    if m == 0 { return n; }
    if n == 0 { return m; }

    // Rolling rows over the (m+1) x (n+1) table
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Normalized similarity in `[0, 1]`, compared case-insensitively.
///
/// `1 - distance / max(len(a), len(b))`. Two empty strings are identical.
///
/// # Example
/// ```
/// use cellar_search::similarity;
///
/// assert_eq!(similarity("wine", "vine"), 0.75);
/// assert_eq!(similarity("Merlot", "merlot"), 1.0);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    similarity_with_case(a, b, false)
}

/// Normalized similarity with explicit case handling.
pub fn similarity_with_case(a: &str, b: &str, case_sensitive: bool) -> f64 {
    let a = normalize(a, case_sensitive);
    let b = normalize(b, case_sensitive);
    normalized_similarity(&a, &b)
}

/// Similarity of two strings that are already normalized.
pub(crate) fn normalized_similarity(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let longest = a_chars.len().max(b_chars.len());
    if longest == 0 {
        return 1.0;
    }

    let distance = distance_chars(&a_chars, &b_chars);
    1.0 - distance as f64 / longest as f64
}

/// Lower-case unless the caller asked for case-sensitive matching.
#[inline]
pub(crate) fn normalize(s: &str, case_sensitive: bool) -> Cow<'_, str> {
    if case_sensitive {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(s.to_lowercase())
    }
}
