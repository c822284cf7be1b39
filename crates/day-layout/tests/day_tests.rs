//! Tests for the composed one-call day layout.

use chrono::{NaiveDate, NaiveDateTime};
use day_layout::records::{Appointment, ScheduleItem, Task};
use day_layout::{
    day_window_for_date, layout_day, DayWindow, MINUTES_PER_STEP, PIXELS_PER_STEP,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
}

fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
    day(d).and_hms_opt(h, m, 0).unwrap()
}

fn px(minutes: u32) -> f64 {
    f64::from(minutes) / f64::from(MINUTES_PER_STEP) * f64::from(PIXELS_PER_STEP)
}

fn appt(id: &str, start: NaiveDateTime, end: NaiveDateTime) -> ScheduleItem {
    ScheduleItem::Appointment(Appointment {
        id: Some(id.to_string()),
        title: None,
        start,
        end,
    })
}

fn task(id: &str, due: NaiveDateTime) -> ScheduleItem {
    ScheduleItem::Task(Task {
        id: Some(id.to_string()),
        title: None,
        due,
    })
}

fn id(item: &ScheduleItem) -> &str {
    match item {
        ScheduleItem::Appointment(a) => a.id.as_deref().unwrap(),
        ScheduleItem::Task(t) => t.id.as_deref().unwrap(),
    }
}

#[test]
fn clinic_morning_layout() {
    let items = vec![
        appt("checkup", at(16, 9, 0), at(16, 10, 0)),
        appt("surgery", at(16, 9, 30), at(16, 11, 0)),
        appt("followup", at(16, 11, 0), at(16, 11, 30)),
        appt("tomorrow", at(17, 9, 0), at(17, 10, 0)),
    ];

    let layout = layout_day(&items, day(16), at(16, 10, 0));

    assert_eq!(
        layout.window,
        DayWindow {
            window_start: 510,
            window_end: 720,
        }
    );
    assert_eq!(layout.total_height_px, px(210));
    assert_eq!(layout.now_top_px, Some(px(90)));
    assert!(layout.all_day.is_empty());

    let ids: Vec<&str> = layout.events.iter().map(|p| id(p.event)).collect();
    assert_eq!(ids, vec!["checkup", "surgery", "followup"]);

    let checkup = &layout.events[0];
    assert_eq!((checkup.column_index, checkup.columns_count), (0, 2));
    assert_eq!((checkup.top_px, checkup.height_px), (px(30), px(60)));

    let surgery = &layout.events[1];
    assert_eq!((surgery.column_index, surgery.columns_count), (1, 2));
    assert_eq!((surgery.top_px, surgery.height_px), (px(60), px(90)));

    let followup = &layout.events[2];
    assert_eq!((followup.column_index, followup.columns_count), (0, 1));
    assert_eq!((followup.top_px, followup.height_px), (px(150), px(30)));
}

#[test]
fn all_day_items_are_kept_off_the_grid() {
    let items = vec![
        appt(
            "closed",
            at(16, 0, 0),
            day(16).and_hms_milli_opt(23, 59, 59, 999).unwrap(),
        ),
        appt("walk-in", at(16, 14, 0), at(16, 14, 30)),
    ];

    let layout = layout_day(&items, day(16), at(15, 12, 0));

    assert_eq!(layout.all_day.len(), 1);
    assert_eq!(id(layout.all_day[0]), "closed");
    assert_eq!(layout.events.len(), 1);
    assert_eq!(layout.window.window_start, 810);
    assert_eq!(layout.window.window_end, 900);
    assert_eq!(layout.now_top_px, None);
}

#[test]
fn tasks_render_as_point_events() {
    let items = vec![
        appt("consult", at(16, 10, 0), at(16, 11, 0)),
        task("call-lab", at(16, 10, 30)),
    ];

    let layout = layout_day(&items, day(16), at(16, 8, 0));

    let call = &layout.events[1];
    assert_eq!(id(call.event), "call-lab");
    assert_eq!(call.height_px, f64::from(PIXELS_PER_STEP));
    assert_eq!((call.column_index, call.columns_count), (0, 1));
    // The appointment is not widened by the task sitting inside it.
    assert_eq!(layout.events[0].columns_count, 1);
    // "Now" is before the window.
    assert_eq!(layout.now_top_px, Some(0.0));
}

#[test]
fn late_task_is_drawn_inside_the_column() {
    let items = vec![task("night-check", at(16, 23, 58))];

    let layout = layout_day(&items, day(16), at(16, 12, 0));
    assert_eq!(layout.window.window_start, 1405);
    assert_eq!(layout.window.window_end, 1440);

    let check = &layout.events[0];
    assert_eq!(check.height_px, f64::from(PIXELS_PER_STEP));
    assert_eq!(check.top_px + check.height_px, layout.total_height_px);
}

#[test]
fn overnight_appointment_is_clipped_to_each_day() {
    let items = vec![appt("boarding", at(16, 22, 0), at(17, 2, 0))];

    let first = layout_day(&items, day(16), at(16, 23, 0));
    assert_eq!(first.window.window_end, 1440);
    let evening = &first.events[0];
    assert_eq!(
        evening.top_px + evening.height_px,
        first.total_height_px
    );

    let second = layout_day(&items, day(17), at(17, 1, 0));
    assert_eq!(second.window.window_start, 0);
    assert_eq!(second.window.window_end, 150);
    assert_eq!(second.events[0].top_px, 0.0);
    assert_eq!(second.events[0].height_px, px(120));
}

#[test]
fn standalone_window_matches_full_layout() {
    let items = vec![
        appt("boarding", at(16, 22, 0), at(17, 2, 0)),
        appt("checkup", at(17, 9, 0), at(17, 10, 0)),
        appt("closed", at(18, 0, 0), day(19).and_hms_milli_opt(0, 0, 0, 0).unwrap()),
        task("call-lab", at(17, 14, 0)),
    ];

    for d in [16, 17, 18] {
        let layout = layout_day(&items, day(d), at(d, 12, 0));
        assert_eq!(day_window_for_date(&items, day(d)), layout.window);
    }
    // The overnight tail is clipped to the 17th before the window is taken.
    assert_eq!(
        day_window_for_date(&items, day(17)),
        DayWindow {
            window_start: 0,
            window_end: 870,
        }
    );
}

#[test]
fn empty_day_is_a_full_day_column() {
    let items: Vec<ScheduleItem> = vec![];
    let layout = layout_day(&items, day(16), at(16, 12, 0));
    assert_eq!(layout.window, DayWindow::FULL_DAY);
    assert!(layout.events.is_empty());
    assert_eq!(layout.now_top_px, Some(px(720)));
}

#[test]
fn layout_serializes_for_the_dashboard() {
    let items = vec![appt("checkup", at(16, 9, 0), at(16, 10, 0))];
    let layout = layout_day(&items, day(16), at(16, 9, 0));
    let value = serde_json::to_value(&layout).unwrap();
    assert_eq!(value["window"]["window_start"], 510);
    assert_eq!(value["events"][0]["column_index"], 0);
    assert_eq!(value["events"][0]["event"]["kind"], "appointment");
    assert_eq!(value["day"], "2026-03-16");
}
