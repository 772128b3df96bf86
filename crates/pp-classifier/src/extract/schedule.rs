//! Schedule extraction: relative days, weekdays, numeric dates, clock times,
//! and recurrence phrases.
//!
//! Date forms are evaluated in a fixed order (relative day, weekday,
//! `M/D[/Y]`, `YYYY-MM-DD`) and a later form that fires overwrites an
//! earlier one. All dates resolve against the caller-supplied `today`.

use chrono::{Datelike, Days, NaiveDate, NaiveTime, Weekday};

use pp_protocol::{Recurrence, ScheduleHint};

use crate::patterns::{
    CLOCK_TIME_RE, ISO_DATE_RE, MONTH_DAY_DATE_RE, RECURRENCE_PATTERNS, RELATIVE_DAY_RE,
    WEEKDAY_RE,
};

/// Extract a schedule hint from `text`, or `None` when nothing was found.
pub fn extract_schedule(text: &str, today: NaiveDate) -> Option<ScheduleHint> {
    let mut date = relative_day(text, today);
    for later in [
        weekday(text, today),
        month_day_date(text, today),
        iso_date(text),
    ] {
        if later.is_some() {
            date = later;
        }
    }

    ScheduleHint {
        date,
        time: clock_time(text),
        recurrence: recurrence(text),
    }
    .non_empty()
}

/// today / tonight / now / tomorrow / next week.
fn relative_day(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let caps = RELATIVE_DAY_RE.captures(text)?;
    let offset = match caps[1].to_lowercase().as_str() {
        "today" | "tonight" | "now" => 0,
        "tomorrow" => 1,
        _ => 7, // next week
    };
    today.checked_add_days(Days::new(offset))
}

/// Named weekday, resolved to its next occurrence on or after `today`.
///
/// A `next` qualifier means strictly after today: on a Monday, "monday" is
/// today and "next monday" is a week out.
fn weekday(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let caps = WEEKDAY_RE.captures(text)?;
    let target = parse_weekday(&caps[2])?;
    let strictly_after = caps
        .get(1)
        .is_some_and(|q| q.as_str().eq_ignore_ascii_case("next"));

    let mut ahead =
        (7 + target.num_days_from_monday() - today.weekday().num_days_from_monday()) % 7;
    if ahead == 0 && strictly_after {
        ahead = 7;
    }
    today.checked_add_days(Days::new(u64::from(ahead)))
}

fn parse_weekday(name: &str) -> Option<Weekday> {
    match name.to_lowercase().as_str() {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// `M/D`, `M/D/YY`, `M/D/YYYY`. Two-digit years are 20YY; no year means
/// the current year.
fn month_day_date(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    MONTH_DAY_DATE_RE.captures_iter(text).find_map(|caps| {
        let month: u32 = caps[1].parse().ok()?;
        let day: u32 = caps[2].parse().ok()?;
        let year = match caps.get(3) {
            Some(y) if y.as_str().len() == 2 => 2000 + y.as_str().parse::<i32>().ok()?,
            Some(y) => y.as_str().parse().ok()?,
            None => today.year(),
        };
        NaiveDate::from_ymd_opt(year, month, day)
    })
}

/// `YYYY-MM-DD`.
fn iso_date(text: &str) -> Option<NaiveDate> {
    ISO_DATE_RE.captures_iter(text).find_map(|caps| {
        NaiveDate::from_ymd_opt(
            caps[1].parse().ok()?,
            caps[2].parse().ok()?,
            caps[3].parse().ok()?,
        )
    })
}

/// `H[:MM]am|pm` or `HH:MM`, as a 24-hour time.
fn clock_time(text: &str) -> Option<NaiveTime> {
    CLOCK_TIME_RE.captures_iter(text).find_map(|caps| {
        if let Some(meridiem) = caps.get(3) {
            let hour: u32 = caps[1].parse().ok()?;
            let minute: u32 = match caps.get(2) {
                Some(m) => m.as_str().parse().ok()?,
                None => 0,
            };
            let hour = to_24_hour(hour, meridiem.as_str().eq_ignore_ascii_case("pm"))?;
            NaiveTime::from_hms_opt(hour, minute, 0)
        } else {
            let hour: u32 = caps.get(4)?.as_str().parse().ok()?;
            let minute: u32 = caps.get(5)?.as_str().parse().ok()?;
            NaiveTime::from_hms_opt(hour, minute, 0)
        }
    })
}

/// 12am → 0, 12pm → 12, other pm hours +12.
fn to_24_hour(hour: u32, pm: bool) -> Option<u32> {
    match (hour, pm) {
        (12, false) => Some(0),
        (12, true) => Some(12),
        (1..=11, false) => Some(hour),
        (1..=11, true) => Some(hour + 12),
        _ => None,
    }
}

fn recurrence(text: &str) -> Option<Recurrence> {
    RECURRENCE_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(text))
        .map(|(recurrence, _)| *recurrence)
}
