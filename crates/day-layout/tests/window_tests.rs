//! Tests for the day-window calculator.

use chrono::{NaiveDate, NaiveDateTime};
use day_layout::event::DayEvent;
use day_layout::{
    get_day_window, get_total_window_height_px, DayWindow, MINUTES_PER_STEP, PIXELS_PER_STEP,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, day)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

fn event(sh: u32, sm: u32, eh: u32, em: u32) -> DayEvent {
    DayEvent::new(at(16, sh, sm), at(16, eh, em))
}

fn window(start: u32, end: u32) -> DayWindow {
    DayWindow {
        window_start: start,
        window_end: end,
    }
}

// ── Basic shapes ────────────────────────────────────────────────────────────

#[test]
fn empty_day_renders_full_day() {
    let events: Vec<DayEvent> = vec![];
    assert_eq!(get_day_window(&events), window(0, 1440));
    assert_eq!(DayWindow::default(), DayWindow::FULL_DAY);
}

#[test]
fn single_event_is_padded_by_half_an_hour() {
    // 10:00-11:00 → 09:30-11:30
    let events = vec![event(10, 0, 11, 0)];
    assert_eq!(get_day_window(&events), window(570, 690));
}

#[test]
fn window_spans_earliest_start_to_latest_end() {
    let events = vec![event(13, 0, 14, 0), event(8, 15, 9, 0), event(11, 0, 16, 45)];
    assert_eq!(get_day_window(&events), window(465, 1035));
}

#[test]
fn padding_is_clamped_at_midnight() {
    let events = vec![event(0, 10, 1, 0)];
    assert_eq!(get_day_window(&events), window(0, 90));
}

#[test]
fn off_grid_times_snap_outward_to_whole_steps() {
    let events = vec![DayEvent::new(
        NaiveDate::from_ymd_opt(2026, 3, 16)
            .unwrap()
            .and_hms_opt(10, 3, 20)
            .unwrap(),
        at(16, 11, 2),
    )];
    assert_eq!(get_day_window(&events), window(570, 695));
}

// ── Midnight-end normalization ──────────────────────────────────────────────

#[test]
fn event_ending_at_next_midnight_extends_window_to_end_of_day() {
    let events = vec![DayEvent::new(at(16, 22, 0), at(17, 0, 0))];
    assert_eq!(get_day_window(&events), window(1290, 1440));
}

#[test]
fn raw_zero_end_counts_as_end_of_day_even_on_same_date() {
    let events = vec![DayEvent::new(at(16, 10, 0), at(16, 0, 0))];
    assert_eq!(get_day_window(&events), window(570, 1440));
}

// ── Degenerate input ────────────────────────────────────────────────────────

#[test]
fn collapsed_window_falls_back_to_two_hours_around_start() {
    // 20:00 → 10:00 on the same day: padded range inverts.
    let events = vec![event(20, 0, 10, 0)];
    assert_eq!(get_day_window(&events), window(1140, 1260));
}

#[test]
fn fallback_window_never_runs_past_end_of_day() {
    let events = vec![event(23, 50, 22, 0)];
    let w = get_day_window(&events);
    assert_eq!(w, window(1320, 1440));
    assert!(w.window_end > w.window_start);
}

// ── Height ──────────────────────────────────────────────────────────────────

#[test]
fn total_height_follows_the_step_grid() {
    let expected = f64::from(120 / MINUTES_PER_STEP * PIXELS_PER_STEP);
    assert_eq!(get_total_window_height_px(570, 690), expected);
    assert_eq!(window(570, 690).total_height_px(), expected);
    assert_eq!(window(570, 690).duration_minutes(), 120);
}

#[test]
fn full_day_height() {
    assert_eq!(
        DayWindow::FULL_DAY.total_height_px(),
        f64::from(1440 / MINUTES_PER_STEP * PIXELS_PER_STEP)
    );
}
