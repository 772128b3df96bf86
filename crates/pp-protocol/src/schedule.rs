use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// How often a scheduled record repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recurrence {
    Daily,
    Weekly,
    Monthly,
}

/// Optional date, time, and recurrence attached to a record.
///
/// Each sub-field is independently optional. Producers never emit a hint
/// with every sub-field unset; use [`ScheduleHint::non_empty`] to collapse
/// such a hint to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleHint {
    /// Calendar date, encoded `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Wall-clock time, encoded `HH:MM`. Seconds on input are dropped.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "hh_mm")]
    pub time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
}

impl ScheduleHint {
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.time.is_none() && self.recurrence.is_none()
    }

    /// `None` when no sub-field is set.
    pub fn non_empty(self) -> Option<Self> {
        if self.is_empty() { None } else { Some(self) }
    }
}

mod hh_mm {
    use chrono::{NaiveTime, Timelike};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(t) => serializer.serialize_str(&t.format("%H:%M").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(s) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        let time = NaiveTime::parse_from_str(&s, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M:%S"))
            .map_err(serde::de::Error::custom)?;
        NaiveTime::from_hms_opt(time.hour(), time.minute(), 0)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom("time out of range"))
    }
}
