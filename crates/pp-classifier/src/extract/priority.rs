use pp_protocol::Priority;

use crate::patterns::PRIORITY_PATTERNS;

/// Highest-severity priority keyword present in `text`, if any.
pub fn extract_priority(text: &str) -> Option<Priority> {
    PRIORITY_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(text))
        .map(|(priority, _)| *priority)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_map_to_levels() {
        assert_eq!(extract_priority("pay rent asap"), Some(Priority::Urgent));
        assert_eq!(extract_priority("important: call bank"), Some(Priority::High));
        assert_eq!(extract_priority("high priority review"), Some(Priority::High));
        assert_eq!(
            extract_priority("tidy desk, medium priority"),
            Some(Priority::Medium)
        );
        assert_eq!(
            extract_priority("learn chess when I can"),
            Some(Priority::Low)
        );
    }

    #[test]
    fn severity_order_beats_position() {
        // "low priority" appears first but urgent is evaluated first.
        assert_eq!(
            extract_priority("low priority unless it becomes urgent"),
            Some(Priority::Urgent)
        );
    }

    #[test]
    fn no_keyword_leaves_priority_unset() {
        assert_eq!(extract_priority("buy milk"), None);
        // "normal" on its own is not a priority keyword.
        assert_eq!(extract_priority("back to normal"), None);
    }
}
