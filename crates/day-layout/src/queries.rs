//! Auxiliary values a day column needs next to the event boxes.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::event::{next_midnight, start_of_day, DayMember, TimeBounded};
use crate::time::{clamp_minutes, minutes_since_start_of_day, minutes_to_px};

pub use crate::window::get_total_window_height_px;

/// Pixel offset of a single minute-of-day, clamped into the window.
pub fn point_top_px(minute: f64, window_start: u32, window_end: u32) -> f64 {
    let clamped = clamp_minutes(minute, window_start, window_end);
    minutes_to_px(clamped - f64::from(window_start))
}

/// Offset of the "now" line for the column showing `target_date`.
///
/// Returns `None` when `now` is on a different calendar day, meaning no line
/// is drawn. A current time outside the window sticks to the nearest edge.
pub fn get_now_top_px_for_window(
    target_date: NaiveDate,
    now: NaiveDateTime,
    window_start: u32,
    window_end: u32,
) -> Option<f64> {
    if now.date() != target_date {
        return None;
    }
    Some(point_top_px(
        minutes_since_start_of_day(now),
        window_start,
        window_end,
    ))
}

/// Whether `event` spans exactly `day` 00:00:00.000 through 23:59:59.999.
///
/// Multi-day spans that include `day` are not all-day for it.
pub fn is_all_day_for_date<E: TimeBounded + ?Sized>(event: &E, day: NaiveDate) -> bool {
    event.start() == start_of_day(day)
        && event.end() == next_midnight(day) - Duration::milliseconds(1)
}

/// Items that fall on `day` by calendar-day equality.
pub fn events_for_day<T: DayMember>(items: &[T], day: NaiveDate) -> Vec<&T> {
    items.iter().filter(|item| item.occurs_on(day)).collect()
}

/// Split events into all-day ones (rendered as a ribbon) and timed ones.
pub fn split_all_day<E: TimeBounded>(events: &[E], day: NaiveDate) -> (Vec<&E>, Vec<&E>) {
    events.iter().partition(|e| is_all_day_for_date(*e, day))
}
