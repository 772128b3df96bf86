//! Segmenter: split one raw instruction into sub-instructions that each
//! carry at most one intent.

use crate::patterns::{STRONG_SEPARATORS, WEAK_SEPARATOR_RE, starts_with_command};

/// Split `input` into ordered, trimmed sub-instructions.
///
/// Strong separators (`;`, newline) always split. A comma or coordinating
/// conjunction splits only when the text on both sides is a command: an
/// action verb followed by at least one more word. The result is never
/// empty: when nothing splits, or only separators remain, it is `[input]`.
pub fn segment(input: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    for chunk in input.split(STRONG_SEPARATORS) {
        let chunk = chunk.trim();
        if !chunk.is_empty() {
            split_on_verbs(chunk, &mut pieces);
        }
    }

    match pieces.as_slice() {
        [] => vec![input],
        [only] if *only == input.trim() => vec![input],
        _ => pieces,
    }
}

fn split_on_verbs<'a>(chunk: &'a str, pieces: &mut Vec<&'a str>) {
    let mut start = 0;
    for sep in WEAK_SEPARATOR_RE.find_iter(chunk) {
        let left = chunk[start..sep.start()].trim();
        let right = &chunk[sep.end()..];
        if starts_with_command(left) && starts_with_command(right) {
            pieces.push(left);
            start = sep.end();
        }
    }

    let rest = chunk[start..].trim();
    if !rest.is_empty() {
        pieces.push(rest);
    }
}
