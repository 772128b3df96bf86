use serde::{Deserialize, Serialize};

/// Domain kind of a record created from an instruction.
///
/// Variant declaration order matters: the deterministic classifier walks
/// categories in this order and the first one with a matching pattern wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// One-off task. `todo` is accepted on input for older payloads.
    #[serde(alias = "todo")]
    Task,
    /// Long-term objective.
    Goal,
    /// Recurring habit.
    Habit,
    /// Consumption log entry.
    Meal,
    /// Reflective journal entry.
    Journal,
    /// Calendar event.
    Event,
    /// Free-form note.
    Note,
}

impl Category {
    /// All categories in declaration (evaluation) order.
    pub const ALL: [Category; 7] = [
        Self::Task,
        Self::Goal,
        Self::Habit,
        Self::Meal,
        Self::Journal,
        Self::Event,
        Self::Note,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Goal => "goal",
            Self::Habit => "habit",
            Self::Meal => "meal",
            Self::Journal => "journal",
            Self::Event => "event",
            Self::Note => "note",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Urgency of a record, ordered from least to most severe.
///
/// `#[derive(Ord)]` uses declaration order, so Low < Medium < High < Urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status a record update may move to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    Active,
    Completed,
    Archived,
    Deleted,
}

/// Kind of event a `log_event` action records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Completion,
    HabitLog,
    MealLog,
    FocusSession,
    Custom,
}
