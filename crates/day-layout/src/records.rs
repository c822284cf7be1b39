//! Appointment and task records, and parsing them from dashboard JSON.
//!
//! This is the edge where timestamps are resolved to local wall-clock time.
//! Nothing past this module sees an offset or a timezone.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::event::{span_occurs_on, DayMember, TimeBounded};

/// Naive datetime layouts accepted when no offset is present.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// A scheduled appointment occupying `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// A task with a single due instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub due: NaiveDateTime,
}

/// Either kind of record the day view receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScheduleItem {
    Appointment(Appointment),
    Task(Task),
}

impl ScheduleItem {
    pub fn as_appointment(&self) -> Option<&Appointment> {
        match self {
            ScheduleItem::Appointment(a) => Some(a),
            ScheduleItem::Task(_) => None,
        }
    }

    pub fn as_task(&self) -> Option<&Task> {
        match self {
            ScheduleItem::Task(t) => Some(t),
            ScheduleItem::Appointment(_) => None,
        }
    }
}

impl TimeBounded for Appointment {
    fn start(&self) -> NaiveDateTime {
        self.start
    }

    fn end(&self) -> NaiveDateTime {
        self.end
    }
}

/// Tasks render as point events at their due time.
impl TimeBounded for Task {
    fn start(&self) -> NaiveDateTime {
        self.due
    }

    fn end(&self) -> NaiveDateTime {
        self.due
    }
}

impl TimeBounded for ScheduleItem {
    fn start(&self) -> NaiveDateTime {
        match self {
            ScheduleItem::Appointment(a) => a.start,
            ScheduleItem::Task(t) => t.due,
        }
    }

    fn end(&self) -> NaiveDateTime {
        match self {
            ScheduleItem::Appointment(a) => a.end,
            ScheduleItem::Task(t) => t.due,
        }
    }
}

impl DayMember for Appointment {
    fn occurs_on(&self, day: NaiveDate) -> bool {
        span_occurs_on(self.start, self.end, day)
    }
}

impl DayMember for Task {
    fn occurs_on(&self, day: NaiveDate) -> bool {
        self.due.date() == day
    }
}

impl DayMember for ScheduleItem {
    fn occurs_on(&self, day: NaiveDate) -> bool {
        match self {
            ScheduleItem::Appointment(a) => a.occurs_on(day),
            ScheduleItem::Task(t) => t.occurs_on(day),
        }
    }
}

/// Wire shape of an item before its kind is known.
#[derive(Deserialize)]
struct RawItem {
    #[serde(default)]
    id: Option<serde_json::Value>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    start: Option<String>,
    #[serde(default)]
    end: Option<String>,
    #[serde(default)]
    due: Option<String>,
}

/// Resolve an IANA timezone name.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse()
        .map_err(|_| LayoutError::InvalidTimezone(name.to_string()))
}

/// Parse a datetime string into local wall-clock time.
///
/// RFC 3339 values are converted to `tz` when given, otherwise they keep the
/// wall clock of their own offset. Naive values are taken as already local.
pub fn parse_local_datetime(value: &str, tz: Option<Tz>) -> Result<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(match tz {
            Some(tz) => dt.with_timezone(&tz).naive_local(),
            None => dt.naive_local(),
        });
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .ok_or_else(|| LayoutError::InvalidDateTime {
            value: value.to_string(),
            reason: "expected RFC 3339 or YYYY-MM-DDTHH:MM[:SS]".to_string(),
        })
}

/// Parse a calendar day in `YYYY-MM-DD` form.
pub fn parse_day(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| LayoutError::InvalidDateTime {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Parse a single appointment or task object.
pub fn parse_item_json(json: &str, timezone: Option<&str>) -> Result<ScheduleItem> {
    let tz = timezone.map(parse_timezone).transpose()?;
    let raw: RawItem = serde_json::from_str(json)?;
    item_from_raw(0, raw, tz)
}

/// Parse a JSON array of appointments (`start`/`end`) and tasks (`due`).
///
/// `timezone` is an optional IANA name used to resolve offset-carrying
/// timestamps to the viewer's wall clock.
pub fn parse_schedule_json(json: &str, timezone: Option<&str>) -> Result<Vec<ScheduleItem>> {
    let tz = timezone.map(parse_timezone).transpose()?;
    let raw: Vec<RawItem> = serde_json::from_str(json)?;

    raw.into_iter()
        .enumerate()
        .map(|(index, item)| item_from_raw(index, item, tz))
        .collect()
}

fn item_from_raw(index: usize, raw: RawItem, tz: Option<Tz>) -> Result<ScheduleItem> {
    let id = raw.id.map(|v| match v {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    });

    match (raw.start, raw.end, raw.due) {
        (Some(start), Some(end), _) => Ok(ScheduleItem::Appointment(Appointment {
            id,
            title: raw.title,
            start: parse_local_datetime(&start, tz)?,
            end: parse_local_datetime(&end, tz)?,
        })),
        (None, None, Some(due)) => Ok(ScheduleItem::Task(Task {
            id,
            title: raw.title,
            due: parse_local_datetime(&due, tz)?,
        })),
        (Some(_), None, _) | (None, Some(_), _) => Err(LayoutError::InvalidInput(format!(
            "item {index} has only one of start/end"
        ))),
        (None, None, None) => Err(LayoutError::InvalidInput(format!(
            "item {index} needs start/end or due"
        ))),
    }
}
