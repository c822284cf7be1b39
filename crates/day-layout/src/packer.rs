//! Horizontal column packing for overlapping events.
//!
//! A greedy interval-graph colouring: events are swept in start order, each
//! one takes the lowest-numbered column whose occupant has already ended, and
//! a new column opens only when every existing column is busy. Sorting by
//! start makes first-fit optimal, so a cluster's column count equals the
//! largest number of its events active at the same instant.
//!
//! Events are grouped into clusters. A cluster closes once every active column
//! has ended at or before the next event's start; all of its events then share
//! the cluster's column count, and the next event starts over at column 0.
//! Events that end exactly when another starts do not overlap.

use serde::Serialize;
use tracing::trace;

use crate::event::TimeBounded;
use crate::time::{clamp_minutes, span_minutes};

/// Horizontal placement of one event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutResult<'a, E> {
    pub event: &'a E,
    /// 0-based column, always `< columns_count`.
    pub column_index: usize,
    /// Number of columns shared by every event of the same cluster.
    pub columns_count: usize,
}

/// Assign columns to a day's events.
///
/// Spans are clamped into `[window_start, window_end]` before overlap tests,
/// so events clipped away entirely behave like zero-length events. A
/// zero-length or inverted span overlaps nothing: it gets column 0 of its own
/// single-column cluster and leaves the surrounding sweep untouched.
///
/// Results come back ordered by start time; events with equal starts keep
/// their input order.
pub fn layout_day_events<E: TimeBounded>(
    events: &[E],
    window_start: u32,
    window_end: u32,
) -> Vec<LayoutResult<'_, E>> {
    if events.is_empty() {
        return Vec::new();
    }

    let spans: Vec<Span> = events
        .iter()
        .map(|event| {
            let (start, end) = span_minutes(event);
            Span {
                sort_key: start,
                start: clamp_minutes(start, window_start, window_end),
                end: clamp_minutes(end, window_start, window_end),
            }
        })
        .collect();

    let mut order: Vec<usize> = (0..events.len()).collect();
    // `sort_by` is stable, which keeps equal starts in input order.
    order.sort_by(|&a, &b| spans[a].sort_key.total_cmp(&spans[b].sort_key));

    let slots = order
        .iter()
        .enumerate()
        .fold(Sweep::new(order.len()), |sweep, (rank, &index)| {
            sweep.place(rank, &spans[index])
        })
        .finish();

    order
        .iter()
        .zip(slots)
        .map(|(&index, slot)| LayoutResult {
            event: &events[index],
            column_index: slot.column_index,
            columns_count: slot.columns_count,
        })
        .collect()
}

/// Whether two events overlap under half-open `[start, end)` semantics.
///
/// Zero-length and inverted spans overlap nothing.
pub fn overlaps<A: TimeBounded + ?Sized, B: TimeBounded + ?Sized>(a: &A, b: &B) -> bool {
    let (a_start, a_end) = span_minutes(a);
    let (b_start, b_end) = span_minutes(b);
    a_start < a_end && b_start < b_end && a_start < b_end && b_start < a_end
}

#[derive(Debug, Clone, Copy)]
struct Span {
    sort_key: f64,
    start: f64,
    end: f64,
}

impl Span {
    fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    column_index: usize,
    columns_count: usize,
}

/// Accumulator for the start-ordered sweep.
struct Sweep {
    /// End time of the event currently occupying each column.
    columns: Vec<f64>,
    /// Sorted positions of the events in the open cluster.
    pending: Vec<usize>,
    /// Placement per sorted position.
    slots: Vec<Slot>,
}

impl Sweep {
    fn new(len: usize) -> Self {
        Self {
            columns: Vec::new(),
            pending: Vec::new(),
            slots: vec![
                Slot {
                    column_index: 0,
                    columns_count: 1,
                };
                len
            ],
        }
    }

    fn place(mut self, rank: usize, span: &Span) -> Self {
        if span.is_empty() {
            return self;
        }

        if self.columns.iter().all(|&end| end <= span.start) {
            self.flush();
        }

        let column_index = match self.columns.iter().position(|&end| end <= span.start) {
            Some(free) => {
                self.columns[free] = span.end;
                free
            }
            None => {
                self.columns.push(span.end);
                self.columns.len() - 1
            }
        };

        self.slots[rank].column_index = column_index;
        self.pending.push(rank);
        self
    }

    /// Close the open cluster, writing its column count onto every member.
    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let columns_count = self.columns.len();
        trace!(
            events = self.pending.len(),
            columns_count,
            "closing overlap cluster"
        );
        for &rank in &self.pending {
            self.slots[rank].columns_count = columns_count;
        }
        self.pending.clear();
        self.columns.clear();
    }

    fn finish(mut self) -> Vec<Slot> {
        self.flush();
        self.slots
    }
}
