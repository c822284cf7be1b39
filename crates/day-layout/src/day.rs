//! One-call layout of a full day column.
//!
//! Runs the pipeline in order: pick the day's items, set all-day items aside,
//! clip the rest to the day, compute the window once, pack columns across all
//! timed items, then position each one.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::event::{next_midnight, start_of_day, DayMember, TimeBounded};
use crate::packer::layout_day_events;
use crate::position::compute_vertical_position_px;
use crate::queries::{events_for_day, get_now_top_px_for_window, is_all_day_for_date};
use crate::window::{get_day_window, DayWindow};

/// Everything the UI needs to paint one event box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedEvent<'a, E> {
    pub event: &'a E,
    pub top_px: f64,
    pub height_px: f64,
    pub column_index: usize,
    pub columns_count: usize,
}

/// Complete rendering instructions for one day column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayLayout<'a, E> {
    pub day: NaiveDate,
    pub window: DayWindow,
    pub total_height_px: f64,
    /// `None` unless `day` is today.
    pub now_top_px: Option<f64>,
    /// Timed events in start order.
    pub events: Vec<PlacedEvent<'a, E>>,
    /// Events spanning exactly the whole day, in input order.
    pub all_day: Vec<&'a E>,
}

/// An event's span cut down to a single calendar day.
struct Clipped<'a, E> {
    inner: &'a E,
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl<E> TimeBounded for Clipped<'_, E> {
    fn start(&self) -> NaiveDateTime {
        self.start
    }

    fn end(&self) -> NaiveDateTime {
        self.end
    }
}

/// Set aside all-day items for `day` and clip the rest to the day.
fn split_day<E>(events: &[E], day: NaiveDate) -> (Vec<&E>, Vec<Clipped<'_, E>>)
where
    E: TimeBounded + DayMember,
{
    let (all_day, timed): (Vec<&E>, Vec<&E>) = events_for_day(events, day)
        .into_iter()
        .partition(|e| is_all_day_for_date(*e, day));

    let day_start = start_of_day(day);
    let day_end = next_midnight(day);
    let clipped = timed
        .into_iter()
        .map(|event| Clipped {
            inner: event,
            start: event.start().clamp(day_start, day_end),
            end: event.end().clamp(day_start, day_end),
        })
        .collect();

    (all_day, clipped)
}

/// The window `layout_day` would pick for `day`, without packing columns or
/// reading a clock.
pub fn day_window_for_date<E>(events: &[E], day: NaiveDate) -> DayWindow
where
    E: TimeBounded + DayMember,
{
    let (_, timed) = split_day(events, day);
    get_day_window(&timed)
}

/// Lay out `events` for the column showing `day`, with the current instant
/// `now` supplied by the caller.
pub fn layout_day<E>(events: &[E], day: NaiveDate, now: NaiveDateTime) -> DayLayout<'_, E>
where
    E: TimeBounded + DayMember,
{
    let (all_day, clipped) = split_day(events, day);

    let window = get_day_window(&clipped);
    let DayWindow {
        window_start,
        window_end,
    } = window;

    let placed = layout_day_events(&clipped, window_start, window_end)
        .into_iter()
        .map(|layout| {
            let position = compute_vertical_position_px(layout.event, window_start, window_end);
            PlacedEvent {
                event: layout.event.inner,
                top_px: position.top_px,
                height_px: position.height_px,
                column_index: layout.column_index,
                columns_count: layout.columns_count,
            }
        })
        .collect();

    DayLayout {
        day,
        window,
        total_height_px: window.total_height_px(),
        now_top_px: get_now_top_px_for_window(day, now, window_start, window_end),
        events: placed,
        all_day,
    }
}
