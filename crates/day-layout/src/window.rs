//! Visible time range of a day column.
//!
//! The window hugs the day's events with [`WINDOW_PADDING_MINUTES`] of
//! breathing room on either side, so a day with two morning appointments does
//! not render sixteen hours of empty grid.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::event::TimeBounded;
use crate::time::{
    minutes_since_start_of_day, minutes_to_px, normalize_end_minutes, snap_down, snap_up,
    DAY_END, DAY_START, MINUTES_PER_STEP, WINDOW_PADDING_MINUTES,
};

/// Minutes subtracted from the earliest start when the padded window collapses.
const FALLBACK_LEAD_MINUTES: f64 = 60.0;
/// Fixed length of the fallback window.
const FALLBACK_SPAN_MINUTES: u32 = 120;

/// A `[window_start, window_end)` range in minutes from local midnight.
///
/// Always satisfies `DAY_START <= window_start < window_end <= DAY_END` when
/// produced by [`get_day_window`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWindow {
    pub window_start: u32,
    pub window_end: u32,
}

impl DayWindow {
    /// The whole day, `00:00` to the following midnight.
    pub const FULL_DAY: DayWindow = DayWindow {
        window_start: DAY_START,
        window_end: DAY_END,
    };

    /// Pixel height of the whole window.
    pub fn total_height_px(&self) -> f64 {
        get_total_window_height_px(self.window_start, self.window_end)
    }

    /// Length of the window in minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.window_end.saturating_sub(self.window_start)
    }
}

impl Default for DayWindow {
    fn default() -> Self {
        Self::FULL_DAY
    }
}

/// Pixel height of a `[window_start, window_end)` range.
pub fn get_total_window_height_px(window_start: u32, window_end: u32) -> f64 {
    minutes_to_px(f64::from(window_end) - f64::from(window_start))
}

/// Compute the window a day column should render for `events`.
///
/// An empty list yields the full day. Otherwise the earliest start and latest
/// end (an end at raw minute `0` counts as the end of the day) are padded by
/// [`WINDOW_PADDING_MINUTES`], snapped outward to the step grid and clamped to
/// the day. If malformed events collapse that range, a fixed two-hour window
/// starting an hour before the earliest start is returned instead.
pub fn get_day_window<E: TimeBounded>(events: &[E]) -> DayWindow {
    let Some((min_start, max_end)) = events
        .iter()
        .map(|e| {
            (
                minutes_since_start_of_day(e.start()),
                normalize_end_minutes(minutes_since_start_of_day(e.end())),
            )
        })
        .reduce(|(lo, hi), (s, e)| (lo.min(s), hi.max(e)))
    else {
        return DayWindow::FULL_DAY;
    };

    let step = f64::from(MINUTES_PER_STEP);
    let padding = f64::from(WINDOW_PADDING_MINUTES);
    let window_start = to_day_minute(snap_down(min_start - padding, step));
    let window_end = to_day_minute(snap_up(max_end + padding, step));

    if window_end > window_start {
        return DayWindow {
            window_start,
            window_end,
        };
    }

    let start = to_day_minute(snap_down(min_start - FALLBACK_LEAD_MINUTES, step))
        .min(DAY_END - FALLBACK_SPAN_MINUTES);
    debug!(
        min_start,
        max_end, start, "padded day window collapsed, using fallback window"
    );
    DayWindow {
        window_start: start,
        window_end: start + FALLBACK_SPAN_MINUTES,
    }
}

/// Clamp a minute value into the day and convert it to an integer minute.
fn to_day_minute(value: f64) -> u32 {
    // Values are already snapped to whole steps, so truncation is exact.
    value.clamp(f64::from(DAY_START), f64::from(DAY_END)) as u32
}
