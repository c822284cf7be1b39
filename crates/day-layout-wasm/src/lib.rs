//! WASM bindings for day-layout.
//!
//! Exposes the day-column layout engine to the web dashboard via
//! `wasm-bindgen`. Event lists cross the boundary as JSON strings: arrays of
//! `{id?, title?, start, end}` appointments and `{id?, title?, due}` tasks.
//! Results come back as JSON strings with snake_case fields.
//!
//! The current instant is an argument everywhere it matters; the JavaScript
//! side owns the clock.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p day-layout-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/day-layout-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/day_layout_wasm.wasm
//! ```

use chrono::NaiveDateTime;
use day_layout::error::Result as ParseResult;
use day_layout::records::{
    parse_day, parse_item_json, parse_local_datetime, parse_schedule_json, parse_timezone,
};
use day_layout::{DayWindow, ScheduleItem, TimeBounded};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct WindowDto {
    window_start: u32,
    window_end: u32,
    total_height_px: f64,
}

impl From<DayWindow> for WindowDto {
    fn from(w: DayWindow) -> Self {
        Self {
            window_start: w.window_start,
            window_end: w.window_end,
            total_height_px: w.total_height_px(),
        }
    }
}

/// An input item tagged with its position in the caller's array.
struct Indexed<'a> {
    index: usize,
    item: &'a ScheduleItem,
}

impl TimeBounded for Indexed<'_> {
    fn start(&self) -> NaiveDateTime {
        self.item.start()
    }

    fn end(&self) -> NaiveDateTime {
        self.item.end()
    }
}

#[derive(Serialize)]
struct ColumnDto<'a> {
    /// Position of the event in the caller's input array.
    index: usize,
    event: &'a ScheduleItem,
    column_index: usize,
    columns_count: usize,
}

// ---------------------------------------------------------------------------
// Native implementations, kept free of `JsValue` so they run under `cargo test`
// ---------------------------------------------------------------------------

fn to_json<T: Serialize>(value: &T) -> ParseResult<String> {
    Ok(serde_json::to_string(value)?)
}

fn parse_now(now: &str, timezone: Option<&str>) -> ParseResult<NaiveDateTime> {
    let tz = timezone.map(parse_timezone).transpose()?;
    parse_local_datetime(now, tz)
}

fn day_window_json(events_json: &str) -> ParseResult<String> {
    let items = parse_schedule_json(events_json, None)?;
    to_json(&WindowDto::from(day_layout::get_day_window(&items)))
}

fn vertical_position_json(
    event_json: &str,
    window_start: u32,
    window_end: u32,
) -> ParseResult<String> {
    let item = parse_item_json(event_json, None)?;
    to_json(&day_layout::compute_vertical_position_px(
        &item,
        window_start,
        window_end,
    ))
}

fn day_columns_json(
    events_json: &str,
    window_start: u32,
    window_end: u32,
) -> ParseResult<String> {
    let items = parse_schedule_json(events_json, None)?;
    let indexed: Vec<Indexed<'_>> = items
        .iter()
        .enumerate()
        .map(|(index, item)| Indexed { index, item })
        .collect();
    let dtos: Vec<ColumnDto<'_>> =
        day_layout::layout_day_events(&indexed, window_start, window_end)
            .into_iter()
            .map(|r| ColumnDto {
                index: r.event.index,
                event: r.event.item,
                column_index: r.column_index,
                columns_count: r.columns_count,
            })
            .collect();
    to_json(&dtos)
}

fn now_top_px(
    target_date: &str,
    now: &str,
    window_start: u32,
    window_end: u32,
) -> ParseResult<Option<f64>> {
    let day = parse_day(target_date)?;
    let now = parse_now(now, None)?;
    Ok(day_layout::get_now_top_px_for_window(
        day,
        now,
        window_start,
        window_end,
    ))
}

fn all_day_for_date(event_json: &str, day: &str) -> ParseResult<bool> {
    let item = parse_item_json(event_json, None)?;
    Ok(day_layout::is_all_day_for_date(&item, parse_day(day)?))
}

fn items_for_day_json(
    items_json: &str,
    day: &str,
    timezone: Option<&str>,
) -> ParseResult<String> {
    let items = parse_schedule_json(items_json, timezone)?;
    to_json(&day_layout::events_for_day(&items, parse_day(day)?))
}

fn day_layout_json(
    items_json: &str,
    day: &str,
    now: &str,
    timezone: Option<&str>,
) -> ParseResult<String> {
    let items = parse_schedule_json(items_json, timezone)?;
    let day = parse_day(day)?;
    let now = parse_now(now, timezone)?;
    to_json(&day_layout::layout_day(&items, day, now))
}

fn to_js(err: day_layout::LayoutError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Minutes per grid step. Pixel expectations should be derived from this.
#[wasm_bindgen(js_name = "minutesPerStep")]
pub fn minutes_per_step() -> u32 {
    day_layout::MINUTES_PER_STEP
}

/// Pixels per grid step.
#[wasm_bindgen(js_name = "pixelsPerStep")]
pub fn pixels_per_step() -> u32 {
    day_layout::PIXELS_PER_STEP
}

/// Compute the visible window for a day's events.
///
/// Returns `{window_start, window_end, total_height_px}` as JSON.
#[wasm_bindgen(js_name = "getDayWindow")]
pub fn get_day_window(events_json: &str) -> Result<String, JsValue> {
    day_window_json(events_json).map_err(to_js)
}

/// Pixel `{top_px, height_px}` of a single event inside a window.
#[wasm_bindgen(js_name = "computeVerticalPosition")]
pub fn compute_vertical_position(
    event_json: &str,
    window_start: u32,
    window_end: u32,
) -> Result<String, JsValue> {
    vertical_position_json(event_json, window_start, window_end).map_err(to_js)
}

/// Column assignment for a day's events.
///
/// Returns an array of `{index, event, column_index, columns_count}` in start
/// order, where `index` points back into the input array.
#[wasm_bindgen(js_name = "layoutDayEvents")]
pub fn layout_day_events(
    events_json: &str,
    window_start: u32,
    window_end: u32,
) -> Result<String, JsValue> {
    day_columns_json(events_json, window_start, window_end).map_err(to_js)
}

/// Offset of the "now" line, or `undefined` when `target_date` is not today.
#[wasm_bindgen(js_name = "nowTopPx")]
pub fn now_top_px_for_window(
    target_date: &str,
    now: &str,
    window_start: u32,
    window_end: u32,
) -> Result<Option<f64>, JsValue> {
    now_top_px(target_date, now, window_start, window_end).map_err(to_js)
}

/// Whether an event spans exactly the whole of `day`.
#[wasm_bindgen(js_name = "isAllDayForDate")]
pub fn is_all_day_for_date(event_json: &str, day: &str) -> Result<bool, JsValue> {
    all_day_for_date(event_json, day).map_err(to_js)
}

/// Items falling on `day`, as a JSON array of tagged items.
#[wasm_bindgen(js_name = "eventsForDay")]
pub fn events_for_day(
    items_json: &str,
    day: &str,
    timezone: Option<String>,
) -> Result<String, JsValue> {
    items_for_day_json(items_json, day, timezone.as_deref()).map_err(to_js)
}

/// Full layout of one day column: window, placed events, all-day ribbon and
/// now-line. `timezone` resolves offset-carrying timestamps to the viewer's
/// wall clock.
#[wasm_bindgen(js_name = "layoutDay")]
pub fn layout_day(
    items_json: &str,
    day: &str,
    now: &str,
    timezone: Option<String>,
) -> Result<String, JsValue> {
    day_layout_json(items_json, day, now, timezone.as_deref()).map_err(to_js)
}
