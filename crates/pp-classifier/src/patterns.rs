//! Pattern library: the read-only recognizer tables every deterministic
//! component reads from.
//!
//! All patterns are case-insensitive and compiled once on first use. Order
//! inside each table is evaluation order.

use regex::Regex;
use std::sync::LazyLock;

use pp_protocol::{Category, Priority, Recurrence};

/// Confidence of a segment whose category came from a pattern hit.
pub const PATTERN_HIT_CONFIDENCE: f64 = 0.8;
/// Confidence of a segment that fell back to the default category.
pub const DEFAULT_FALLBACK_CONFIDENCE: f64 = 0.6;
/// Category assigned when no pattern matches.
pub const DEFAULT_CATEGORY: Category = Category::Task;
/// Shorter instructions never fall back to the default category.
pub const MIN_INSTRUCTION_CHARS: usize = 4;

fn compile(pattern: &str) -> Regex {
    Regex::new(&format!("(?i){pattern}")).unwrap()
}

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| compile(p)).collect()
}

// ── Categories ────────────────────────────────────────────────

/// Category recognizers in declaration order. First category with any
/// matching pattern wins.
pub static CATEGORY_PATTERNS: LazyLock<Vec<(Category, Vec<Regex>)>> = LazyLock::new(|| {
    vec![
        (
            Category::Task,
            compile_all(&[
                r"\b(?:add|create|new|make)\s+(?:a\s+|an\s+|new\s+)?(?:task|todo|to-do)\b(?:\s+to\b|\s*:)?",
                r"\b(?:remind\s+me\s+to|i\s+need\s+to|i\s+have\s+to|i\s+should|don't\s+forget\s+to|do\s+not\s+forget\s+to)\b",
            ]),
        ),
        (
            Category::Goal,
            compile_all(&[
                r"\b(?:add|create|new|set)\s+(?:a\s+|an\s+|new\s+|my\s+)?goal\b(?:\s+(?:to|of)\b|\s*:)?",
                r"\b(?:i\s+want\s+to|my\s+goal\s+is(?:\s+to)?|achieve|accomplish)\b",
            ]),
        ),
        (
            Category::Habit,
            compile_all(&[
                r"\b(?:add|create|new|track|start)\s+(?:a\s+|an\s+|new\s+|the\s+)?habit\b(?:\s+(?:of|to)\b|\s*:)?",
                r"\b(?:daily|every\s+day|routine)\b",
            ]),
        ),
        (
            Category::Meal,
            compile_all(&[
                r"\b(?:log|record|ate|had|eating)\s+(?:a\s+|my\s+)?(?:meal|breakfast|lunch|dinner|snack|food)\b(?:\s*:)?",
                r"\b(?:meal|breakfast|lunch|dinner|snack)\s*:",
            ]),
        ),
        (
            Category::Journal,
            compile_all(&[
                r"\bwrite\s+(?:in\s+)?(?:my\s+|a\s+)?(?:journal|diary)(?:\s+entry)?\b(?:\s+(?:about|that)\b|\s*:)?",
                r"\b(?:journal|diary|reflect)(?:\s+entry)?\b(?:\s+(?:on|about|that)\b|\s*:)?",
                r"\b(?:today\s+i|feeling|thoughts\s+about)\b",
            ]),
        ),
        (
            Category::Event,
            compile_all(&[
                r"\b(?:add|create|new)\s+(?:a\s+|an\s+|new\s+)?(?:calendar\s+)?event\b(?:\s*:)?",
                r"\b(?:schedule|book)\b(?:\s+(?:a|an)\b)?",
            ]),
        ),
        (
            Category::Note,
            compile_all(&[
                r"\b(?:add|create|take|new|make)\s+(?:a\s+|an\s+|new\s+)?note\b(?:\s+(?:that|about|to)\b|\s*:)?",
                r"\bnote(?:\s+that\b|\s*:)",
                r"\bjot\s+down\b",
            ]),
        ),
    ]
});

/// Phrases that refer to an existing record ("mark X as done", "delete the
/// task ..."). The deterministic path has no record identifiers, so these
/// never become create actions.
pub static RECORD_REFERENCE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"^(?:mark|set)\b.+\bas\s+(?:done|complete|completed|finished)\b",
        r"^(?:delete|remove)\s+(?:the\s+|my\s+|that\s+|this\s+)?(?:task|todo|goal|habit|meal|journal|entry|event|note|item)s?\b",
        r"^(?:done\s+with|finished\s+with|completed)\b",
    ])
});

// ── Modifiers ─────────────────────────────────────────────────

/// Priority recognizers, most severe first. First match wins.
pub static PRIORITY_PATTERNS: LazyLock<Vec<(Priority, Regex)>> = LazyLock::new(|| {
    vec![
        (
            Priority::Urgent,
            compile(r"\b(?:urgent(?:ly)?|asap|immediately|critical)\b"),
        ),
        (Priority::High, compile(r"\b(?:important|high\s+priority)\b")),
        (
            Priority::Medium,
            compile(r"\b(?:medium|normal)\s+priority\b"),
        ),
        (
            Priority::Low,
            compile(r"\b(?:low\s+priority|when\s+i\s+can|someday)\b"),
        ),
    ]
});

/// Recurrence recognizers.
pub static RECURRENCE_PATTERNS: LazyLock<Vec<(Recurrence, Regex)>> = LazyLock::new(|| {
    vec![
        (Recurrence::Daily, compile(RECURRENCE_DAILY)),
        (Recurrence::Weekly, compile(RECURRENCE_WEEKLY)),
        (Recurrence::Monthly, compile(RECURRENCE_MONTHLY)),
    ]
});

const RECURRENCE_DAILY: &str = r"\b(?:every\s+day|each\s+day|daily)\b";
const RECURRENCE_WEEKLY: &str = r"\b(?:every\s+week|each\s+week|weekly)\b";
const RECURRENCE_MONTHLY: &str = r"\b(?:every\s+month|each\s+month|monthly)\b";

// ── Schedule ──────────────────────────────────────────────────

// today | tonight | now | tomorrow | next week
const RELATIVE_DAY: &str = r"\b(today|tonight|now|tomorrow|next\s+week)\b";
// [next|this] <weekday>
const WEEKDAY: &str =
    r"\b(?:(next|this)\s+)?(monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b";
// M/D, M/D/YY, M/D/YYYY
const MONTH_DAY_DATE: &str = r"\b(\d{1,2})/(\d{1,2})(?:/(\d{4}|\d{2}))?\b";
// YYYY-MM-DD
const ISO_DATE: &str = r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b";
// H[:MM] am|pm  or  HH:MM
const CLOCK_TIME: &str = r"\b(\d{1,2})(?::(\d{2}))?\s*(am|pm)\b|\b(\d{1,2}):(\d{2})\b";

pub static RELATIVE_DAY_RE: LazyLock<Regex> = LazyLock::new(|| compile(RELATIVE_DAY));
pub static WEEKDAY_RE: LazyLock<Regex> = LazyLock::new(|| compile(WEEKDAY));
pub static MONTH_DAY_DATE_RE: LazyLock<Regex> = LazyLock::new(|| compile(MONTH_DAY_DATE));
pub static ISO_DATE_RE: LazyLock<Regex> = LazyLock::new(|| compile(ISO_DATE));
pub static CLOCK_TIME_RE: LazyLock<Regex> = LazyLock::new(|| compile(CLOCK_TIME));

/// Schedule spans removed from titles, each including the preposition that
/// would otherwise dangle ("at 5pm", "due by friday").
pub static SCHEDULE_SPANS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        RELATIVE_DAY,
        WEEKDAY,
        MONTH_DAY_DATE,
        ISO_DATE,
        CLOCK_TIME,
        RECURRENCE_DAILY,
        RECURRENCE_WEEKLY,
        RECURRENCE_MONTHLY,
    ]
    .iter()
    .map(|src| {
        compile(&format!(
            r"(?:\b(?:due\s+)?(?:at|on|by|before|until|for)\s+|\bdue\s+)?(?:{src})"
        ))
    })
    .collect()
});

// ── Segmentation & gating ─────────────────────────────────────

/// Closed set of verbs that may open an independent sub-instruction.
pub const ACTION_VERBS: &[&str] = &[
    "add", "book", "buy", "call", "check", "clean", "clear", "cook", "create", "do", "email",
    "finish", "fix", "get", "log", "make", "meet", "note", "order", "pay", "pick", "plan",
    "prepare", "read", "remind", "renew", "return", "review", "schedule", "send", "set",
    "start", "submit", "take", "text", "track", "visit", "walk", "wash", "water", "write",
];

/// Comma and coordinating-conjunction separators considered by the segmenter.
pub static WEAK_SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"\s*,\s*(?:(?:and\s+then|and|also|plus|then)\s+)?|\s+(?:and\s+then|and|also|plus|then)\s+",
    )
});

/// Characters that always end a sub-instruction.
pub const STRONG_SEPARATORS: &[char] = &[';', '\n'];

/// Questions never fall back to the default category.
pub static INTERROGATIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^(?:\?|(?:what|when|where|who|whom|whose|why|how|which)\b)")
});

/// View-navigation requests never fall back to the default category.
pub static NAVIGATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^(?:show|view|go\s+to|navigate\s+to|take\s+me\s+to)\b")
});

/// Whether `word` (any case, surrounding punctuation ignored) is an action verb.
pub fn is_action_verb(word: &str) -> bool {
    let word = word
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    ACTION_VERBS.contains(&word.as_str())
}

/// Whether `text` opens with an action verb followed by at least one more
/// word. "water" alone is a noun; "water the plants" is a command.
pub fn starts_with_command(text: &str) -> bool {
    let mut words = text.split_whitespace();
    words.next().is_some_and(is_action_verb) && words.next().is_some()
}

/// First category, in declaration order, with any matching pattern.
pub fn match_category(text: &str) -> Option<Category> {
    CATEGORY_PATTERNS
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|p| p.is_match(text)))
        .map(|(category, _)| *category)
}

/// Whether `text` refers to an existing record rather than a new one.
pub fn refers_to_existing_record(text: &str) -> bool {
    RECORD_REFERENCE_PATTERNS.iter().any(|p| p.is_match(text))
}
