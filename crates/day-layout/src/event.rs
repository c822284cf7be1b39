//! Event shapes the engine accepts.
//!
//! The engine never owns caller records. Anything with a start and an end
//! implements [`TimeBounded`]; anything that can be placed on a calendar day
//! implements [`DayMember`].

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A record with a local wall-clock start and end.
pub trait TimeBounded {
    fn start(&self) -> NaiveDateTime;
    fn end(&self) -> NaiveDateTime;
}

/// A record that may or may not fall on a given calendar day.
pub trait DayMember {
    fn occurs_on(&self, day: NaiveDate) -> bool;
}

impl<T: TimeBounded + ?Sized> TimeBounded for &T {
    fn start(&self) -> NaiveDateTime {
        (**self).start()
    }

    fn end(&self) -> NaiveDateTime {
        (**self).end()
    }
}

/// A plain start/end pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEvent {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DayEvent {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }
}

impl TimeBounded for DayEvent {
    fn start(&self) -> NaiveDateTime {
        self.start
    }

    fn end(&self) -> NaiveDateTime {
        self.end
    }
}

impl DayMember for DayEvent {
    fn occurs_on(&self, day: NaiveDate) -> bool {
        span_occurs_on(self.start, self.end, day)
    }
}

/// Local midnight at the start of `day`.
pub fn start_of_day(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

/// Local midnight at the start of the day after `day`.
pub fn next_midnight(day: NaiveDate) -> NaiveDateTime {
    start_of_day(day) + Duration::days(1)
}

/// Calendar-day membership for a `[start, end]` span.
///
/// The span covers every date from `start.date()` through the date of its last
/// occupied instant. An end exactly at a later midnight belongs to the previous
/// day. Inverted spans only cover their start date.
pub fn span_occurs_on(start: NaiveDateTime, end: NaiveDateTime, day: NaiveDate) -> bool {
    let first = start.date();
    let last = if end <= start {
        first
    } else if end == start_of_day(end.date()) {
        // Ends at a midnight strictly after the start.
        end.date().pred_opt().unwrap_or(first).max(first)
    } else {
        end.date()
    };
    first <= day && day <= last
}
