//! Minute-of-day arithmetic and the rendering grid.
//!
//! Every vertical pixel value in this crate goes through [`minutes_to_px`], so
//! changing [`MINUTES_PER_STEP`] or [`PIXELS_PER_STEP`] rescales the whole
//! layout consistently.

use chrono::{NaiveDateTime, Timelike};

use crate::event::TimeBounded;

/// Time quantum of the grid, in minutes.
pub const MINUTES_PER_STEP: u32 = 5;
/// Height of one grid step, in pixels.
pub const PIXELS_PER_STEP: u32 = 25;
/// First minute of a day.
pub const DAY_START: u32 = 0;
/// One past the last minute of a day (midnight of the following day).
pub const DAY_END: u32 = 1440;
/// Whitespace added above the earliest and below the latest event.
pub const WINDOW_PADDING_MINUTES: u32 = 30;

/// Minutes elapsed since local midnight of the instant's own calendar day.
///
/// Seconds contribute fractionally (`h*60 + m + s/60`); sub-second precision is
/// ignored.
pub fn minutes_since_start_of_day(instant: NaiveDateTime) -> f64 {
    f64::from(instant.hour() * 60 + instant.minute()) + f64::from(instant.second()) / 60.0
}

/// Round `value` to the nearest multiple of `step`, halves rounding up.
///
/// `snap_to_step(12.0, 5.0) == 10.0`, `snap_to_step(12.5, 5.0) == 15.0`.
pub fn snap_to_step(value: f64, step: f64) -> f64 {
    (value / step + 0.5).floor() * step
}

/// Largest multiple of `step` that is `<= value`.
pub fn snap_down(value: f64, step: f64) -> f64 {
    (value / step).floor() * step
}

/// Smallest multiple of `step` that is `>= value`.
pub fn snap_up(value: f64, step: f64) -> f64 {
    (value / step).ceil() * step
}

/// Convert a minute distance into grid pixels.
pub fn minutes_to_px(minutes: f64) -> f64 {
    minutes / f64::from(MINUTES_PER_STEP) * f64::from(PIXELS_PER_STEP)
}

/// Treat a raw end minute of exactly `0` as the end of the day.
///
/// Events stored as "ends at the following midnight" would otherwise collapse
/// to the top of the column.
pub fn normalize_end_minutes(raw: f64) -> f64 {
    if raw == 0.0 {
        f64::from(DAY_END)
    } else {
        raw
    }
}

/// Start and end minute of an event's span on its start day.
///
/// An end at midnight counts as [`DAY_END`] only when it lies on a later date
/// than the start, so a zero-length event at 00:00 stays zero-length.
pub fn span_minutes<E: TimeBounded + ?Sized>(event: &E) -> (f64, f64) {
    let start = event.start();
    let end = event.end();
    let start_min = minutes_since_start_of_day(start);
    let raw_end = minutes_since_start_of_day(end);
    let end_min = if raw_end == 0.0 && end.date() > start.date() {
        f64::from(DAY_END)
    } else {
        raw_end
    };
    (start_min, end_min)
}

/// Clamp without panicking when a caller hands in an inverted window.
pub(crate) fn clamp_minutes(value: f64, lo: u32, hi: u32) -> f64 {
    value.min(f64::from(hi)).max(f64::from(lo))
}
