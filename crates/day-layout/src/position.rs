//! Vertical geometry of a single event inside a day window.

use serde::{Deserialize, Serialize};

use crate::event::TimeBounded;
use crate::time::{clamp_minutes, minutes_to_px, span_minutes, PIXELS_PER_STEP};
use crate::window::get_total_window_height_px;

/// Pixel offset and height relative to the top of a window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionResult {
    pub top_px: f64,
    pub height_px: f64,
}

/// Map an event's span onto pixels within `[window_start, window_end]`.
///
/// Both ends are clamped into the window first. Events that are zero-length,
/// inverted, or entirely outside the window still get one step of height so
/// they stay visible at the nearest boundary. The box never extends past the
/// bottom of the window: a minimum-height box near the end is pulled up.
pub fn compute_vertical_position_px<E: TimeBounded + ?Sized>(
    event: &E,
    window_start: u32,
    window_end: u32,
) -> PositionResult {
    let (start, end) = span_minutes(event);
    let start_min = clamp_minutes(start, window_start, window_end);
    let end_min = clamp_minutes(end, window_start, window_end);

    let total_px = get_total_window_height_px(window_start, window_end);
    let height_px = minutes_to_px(end_min - start_min).max(f64::from(PIXELS_PER_STEP));
    let top_px = minutes_to_px(start_min - f64::from(window_start))
        .min(total_px - height_px)
        .max(0.0);

    PositionResult { top_px, height_px }
}
