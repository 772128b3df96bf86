use serde::{Deserialize, Serialize};

use crate::kinds::{Category, EventKind, Priority, RecordStatus};
use crate::schedule::ScheduleHint;

/// One structured intent inside an action plan.
///
/// Encoded with an internal `"type"` tag, e.g.
/// `{"type": "create_record", "category": "task", "title": "buy milk"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Create a new record of the given category.
    CreateRecord {
        category: Category,
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        body: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        priority: Option<Priority>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        schedule: Option<ScheduleHint>,
    },
    /// Apply a partial update to an existing record.
    UpdateRecord {
        record_id: String,
        updates: RecordPatch,
    },
    /// Record an event (habit check-in, meal, focus session, ...).
    LogEvent {
        event_kind: EventKind,
        /// Free-form event data; must be a JSON object.
        payload: serde_json::Value,
    },
    /// Move the user to a view.
    Navigate { destination: String },
}

impl Action {
    /// Create-record action with only the required fields set.
    pub fn create(category: Category, title: impl Into<String>) -> Self {
        Self::CreateRecord {
            category,
            title: title.into(),
            body: None,
            priority: None,
            schedule: None,
        }
    }

    /// Wire tag of this action (`create_record`, `update_record`, ...).
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CreateRecord { .. } => "create_record",
            Self::UpdateRecord { .. } => "update_record",
            Self::LogEvent { .. } => "log_event",
            Self::Navigate { .. } => "navigate",
        }
    }

    /// Category of a create-record action.
    pub fn category(&self) -> Option<Category> {
        match self {
            Self::CreateRecord { category, .. } => Some(*category),
            _ => None,
        }
    }

    /// Title of a create-record action.
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::CreateRecord { title, .. } => Some(title),
            _ => None,
        }
    }
}

/// Partial set of record fields carried by an update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RecordStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ScheduleHint>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.body.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.schedule.is_none()
    }
}
