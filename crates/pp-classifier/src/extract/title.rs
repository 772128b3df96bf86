//! Title extraction: what is left of an instruction once the recognized
//! category, priority, and schedule phrasing has been removed.

use regex::Regex;
use std::sync::LazyLock;

use crate::patterns::{CATEGORY_PATTERNS, PRIORITY_PATTERNS, SCHEDULE_SPANS};

static SPACE_BEFORE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([,;:.!?])").unwrap());
static REPEATED_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([,;:])(?:\s*[,;:])+").unwrap());
static LEADING_ARTICLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:a|an|the)\s+").unwrap());

const EDGE_PUNCTUATION: &[char] = &[',', ';', ':', '.', '-', '!', '?'];

/// Derive a title from `text`. Never empty for non-blank input: when
/// stripping consumes everything, the trimmed original is returned.
pub fn extract_title(text: &str) -> String {
    let mut title = text.to_string();

    let spans = CATEGORY_PATTERNS
        .iter()
        .flat_map(|(_, patterns)| patterns.iter())
        .chain(PRIORITY_PATTERNS.iter().map(|(_, pattern)| pattern))
        .chain(SCHEDULE_SPANS.iter());
    for pattern in spans {
        title = pattern.replace_all(&title, " ").into_owned();
    }

    let title = tidy(&title);
    let title = tidy(&LEADING_ARTICLE.replace(&title, ""));

    if title.is_empty() {
        text.trim().to_string()
    } else {
        title
    }
}

/// Collapse whitespace, re-attach punctuation, and trim dangling separators.
fn tidy(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let attached = SPACE_BEFORE_PUNCT.replace_all(&collapsed, "$1");
    let deduped = REPEATED_SEPARATORS.replace_all(&attached, "$1");
    deduped
        .trim_matches(|c: char| c.is_whitespace() || EDGE_PUNCTUATION.contains(&c))
        .to_string()
}
