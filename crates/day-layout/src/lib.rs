//! # day-layout
//!
//! Pure layout engine for a calendar day column.
//!
//! Given the appointments and tasks of one day, the engine decides which slice
//! of the day to render, where each event sits vertically, and how overlapping
//! events share the column width. Everything is a synchronous function of its
//! arguments: no I/O, no shared state, and no clock reads (the current instant
//! is passed in by the caller).
//!
//! ## Modules
//!
//! - [`time`] — minute-of-day arithmetic, step snapping, grid constants
//! - [`event`] — the [`TimeBounded`] and [`DayMember`] traits
//! - [`window`] — visible `[window_start, window_end)` range of a day
//! - [`position`] — pixel top/height of one event
//! - [`packer`] — overlap clusters and column assignment
//! - [`queries`] — now-line, all-day detection, day filtering
//! - [`day`] — the whole pipeline in one call
//! - [`records`] — appointment/task records parsed from JSON
//! - [`error`] — Error types

pub mod day;
pub mod error;
pub mod event;
pub mod packer;
pub mod position;
pub mod queries;
pub mod records;
pub mod time;
pub mod window;

pub use day::{day_window_for_date, layout_day, DayLayout, PlacedEvent};
pub use error::LayoutError;
pub use event::{DayEvent, DayMember, TimeBounded};
pub use packer::{layout_day_events, LayoutResult};
pub use position::{compute_vertical_position_px, PositionResult};
pub use queries::{
    events_for_day, get_now_top_px_for_window, get_total_window_height_px, is_all_day_for_date,
};
pub use records::{parse_schedule_json, Appointment, ScheduleItem, Task};
pub use time::{MINUTES_PER_STEP, PIXELS_PER_STEP};
pub use window::{get_day_window, DayWindow};
