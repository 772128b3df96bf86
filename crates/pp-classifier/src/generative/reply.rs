//! Locating the one JSON object inside a raw model reply.

use crate::error::{GenerativeError, GenerativeResult};

const FENCE: &str = "```";

/// Return the JSON object text of `raw`.
///
/// A reply may wrap the object in exactly one markdown fence (optionally
/// tagged `json`), with prose around it. Without a fence the whole trimmed
/// reply must be the object. Anything else is ambiguous and rejected.
pub fn extract_object(raw: &str) -> GenerativeResult<&str> {
    let trimmed = raw.trim();

    let body = match trimmed.matches(FENCE).count() {
        0 => trimmed,
        2 => {
            let start = trimmed.find(FENCE).map_or(0, |i| i + FENCE.len());
            let inner = &trimmed[start..];
            let end = inner.find(FENCE).unwrap_or(inner.len());
            strip_language_tag(&inner[..end]).trim()
        }
        fences => {
            return Err(GenerativeError::MalformedReply(format!(
                "ambiguous reply with {fences} code fences"
            )));
        }
    };

    if body.starts_with('{') && body.ends_with('}') {
        Ok(body)
    } else {
        Err(GenerativeError::MalformedReply(
            "reply is not a single JSON object".into(),
        ))
    }
}

fn strip_language_tag(block: &str) -> &str {
    block
        .strip_prefix("json")
        .or_else(|| block.strip_prefix("JSON"))
        .unwrap_or(block)
}
