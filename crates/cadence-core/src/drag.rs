//! Reschedule engine: drag-to-date gesture handling and release shifting.
//!
//! The drag lifecycle is an explicit finite-state machine of plain values
//! driven by pure functions; the rendering layer translates pointer events
//! into calls against it. Only one session can be active at a time:
//! [`DragState`] owns the session, and beginning a drag while one is active
//! is an ignored transition, not an error.

use jiff::civil::Date;
use jiff::Span;
use log::debug;

use crate::axis::DateColumn;
use crate::error::{ConsoleError, Result};
use crate::layout::LayoutConfig;
use crate::models::ReleaseEntry;

/// Pointer movement (in pixels) below which a gesture is a click, not a
/// drag. Keeps double-click-to-edit from mutating the schedule.
pub const DRAG_THRESHOLD: f64 = 4.0;

/// An in-progress drag of one plan bar.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub plan_id: u64,
    /// Bar's left edge at drag start, for cancellation restore
    pub origin_left: f64,
    pointer_start: f64,
    current_left: f64,
    /// Set once pointer movement has exceeded [`DRAG_THRESHOLD`]
    recognized: bool,
}

/// Exclusive gesture state for the interaction surface.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
    /// Bar is animating to its snapped position; new drags stay disabled
    /// until the surface settles back to `Idle`.
    Animating { plan_id: u64, target_left: f64 },
}

/// Result of releasing the pointer.
#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    /// Threshold never exceeded; treat as a plain click, no mutation
    Click { plan_id: u64 },
    /// Drag aborted (pointer left the surface); restore the origin position
    Cancelled { plan_id: u64, origin_left: f64 },
    /// Bar snapped to a column; apply the reschedule and persist
    Snapped {
        plan_id: u64,
        column: usize,
        target_left: f64,
        start_date: Date,
    },
}

/// Starts a drag session for a plan bar.
pub fn begin_drag(plan_id: u64, rect_left: f64, pointer_x: f64) -> DragSession {
    DragSession {
        plan_id,
        origin_left: rect_left,
        pointer_start: pointer_x,
        current_left: rect_left,
        recognized: false,
    }
}

/// Tracks the pointer horizontally, returning the bar's preview left edge.
///
/// No vertical movement and no cross-row reassignment: the bar follows the
/// pointer delta on its own row only.
pub fn update_drag(session: &mut DragSession, pointer_x: f64) -> f64 {
    let delta = pointer_x - session.pointer_start;
    if delta.abs() > DRAG_THRESHOLD {
        session.recognized = true;
    }
    session.current_left = session.origin_left + delta;
    session.current_left
}

/// Ends a drag, snapping to the nearest column by left-edge distance.
///
/// Ties break toward the lower index (earlier date): the scan keeps the
/// first minimum it sees.
pub fn end_drag(
    session: &DragSession,
    pointer_x: f64,
    axis: &[DateColumn],
    config: &LayoutConfig,
) -> DragOutcome {
    let delta = pointer_x - session.pointer_start;
    if !session.recognized && delta.abs() <= DRAG_THRESHOLD {
        return DragOutcome::Click {
            plan_id: session.plan_id,
        };
    }

    let left = session.origin_left + delta;
    match snap_column(left, axis, config) {
        Some(column) => DragOutcome::Snapped {
            plan_id: session.plan_id,
            column: column.index,
            target_left: config.column_left(column.index),
            start_date: column.date,
        },
        None => DragOutcome::Cancelled {
            plan_id: session.plan_id,
            origin_left: session.origin_left,
        },
    }
}

/// Aborts a drag, returning the left edge the bar must be restored to.
pub fn cancel_drag(session: &DragSession) -> f64 {
    session.origin_left
}

/// Nearest column to a bar's left edge, first minimum wins.
pub fn snap_column<'a>(
    left: f64,
    axis: &'a [DateColumn],
    config: &LayoutConfig,
) -> Option<&'a DateColumn> {
    let mut best: Option<(&DateColumn, f64)> = None;
    for column in axis {
        let distance = (left - config.column_left(column.index)).abs();
        // Strictly-less keeps the earlier date on exact ties.
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((column, distance));
        }
    }
    best.map(|(column, _)| column)
}

impl DragState {
    /// Begins a drag if the surface is idle; otherwise the gesture is
    /// silently ignored and `false` is returned.
    pub fn begin(&mut self, plan_id: u64, rect_left: f64, pointer_x: f64) -> bool {
        match self {
            DragState::Idle => {
                *self = DragState::Dragging(begin_drag(plan_id, rect_left, pointer_x));
                true
            }
            _ => {
                debug!("ignoring drag start for plan {plan_id}: surface busy");
                false
            }
        }
    }

    /// Pointer moved; returns the preview left edge while dragging.
    pub fn update(&mut self, pointer_x: f64) -> Option<f64> {
        match self {
            DragState::Dragging(session) => Some(update_drag(session, pointer_x)),
            _ => None,
        }
    }

    /// Pointer released; resolves the session and moves to the next state.
    pub fn release(
        &mut self,
        pointer_x: f64,
        axis: &[DateColumn],
        config: &LayoutConfig,
    ) -> Option<DragOutcome> {
        let DragState::Dragging(session) = self else {
            return None;
        };
        let outcome = end_drag(session, pointer_x, axis, config);
        *self = match &outcome {
            DragOutcome::Snapped {
                plan_id,
                target_left,
                ..
            } => DragState::Animating {
                plan_id: *plan_id,
                target_left: *target_left,
            },
            _ => DragState::Idle,
        };
        Some(outcome)
    }

    /// Pointer left the surface; aborts any active session.
    pub fn abort(&mut self) -> Option<f64> {
        let DragState::Dragging(session) = self else {
            return None;
        };
        let origin = cancel_drag(session);
        *self = DragState::Idle;
        Some(origin)
    }

    /// Snap animation finished; the surface accepts new drags again.
    pub fn settle(&mut self) {
        if matches!(self, DragState::Animating { .. }) {
            *self = DragState::Idle;
        }
    }
}

/// Shifts a release sequence to a new start date, preserving duration.
///
/// The duration is the inclusive day span of the pre-drag releases (one day
/// when empty). Entry `i` lands on `start + i` days, keeping its quantity
/// and remark; offsets past the original entry count are filled with the
/// first entry's quantity and an empty remark, so a plan with gap days
/// comes out contiguous. Entries beyond the duration (possible only through
/// external mutation) are truncated.
pub fn reschedule(releases: &[ReleaseEntry], start: Date) -> Result<Vec<ReleaseEntry>> {
    let duration = match (
        releases.iter().map(|r| r.date).min(),
        releases.iter().map(|r| r.date).max(),
    ) {
        (Some(first), Some(last)) => usize::try_from((last - first).get_days()).unwrap_or(0) + 1,
        _ => 1,
    };

    let first_quantity = releases.first().map_or(0, |r| r.quantity);

    let mut shifted = Vec::with_capacity(duration);
    for i in 0..duration {
        let date = start
            .checked_add(Span::new().days(i as i64))
            .map_err(|e| {
                ConsoleError::invalid_input("start").with_reason(format!("date overflow: {e}"))
            })?;
        let entry = match releases.get(i) {
            Some(existing) => ReleaseEntry {
                date,
                quantity: existing.quantity,
                remark: existing.remark.clone(),
            },
            None => ReleaseEntry {
                date,
                quantity: first_quantity,
                remark: String::new(),
            },
        };
        shifted.push(entry);
    }
    Ok(shifted)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::axis::DateColumn;

    fn axis(start: Date, days: usize) -> Vec<DateColumn> {
        let mut columns = Vec::new();
        let mut cur = start;
        for index in 0..days {
            columns.push(DateColumn { index, date: cur });
            cur = cur.tomorrow().unwrap();
        }
        columns
    }

    fn entry(d: Date, quantity: u32, remark: &str) -> ReleaseEntry {
        ReleaseEntry {
            date: d,
            quantity,
            remark: remark.to_string(),
        }
    }

    #[test]
    fn below_threshold_is_a_click() {
        let cols = axis(date(2024, 1, 1), 5);
        let config = LayoutConfig::default();
        let mut session = begin_drag(9, 80.0, 100.0);
        update_drag(&mut session, 102.0);
        let outcome = end_drag(&session, 102.0, &cols, &config);
        assert_eq!(outcome, DragOutcome::Click { plan_id: 9 });
    }

    #[test]
    fn snap_picks_nearest_column_by_left_edge() {
        let cols = axis(date(2024, 1, 1), 5);
        let config = LayoutConfig::default(); // 80 px columns

        // 130 px is closer to column 2 (160) than column 1 (80).
        let snapped = snap_column(130.0, &cols, &config).unwrap();
        assert_eq!(snapped.index, 2);
        // Exact midpoint (120) ties; earlier date wins.
        let tied = snap_column(120.0, &cols, &config).unwrap();
        assert_eq!(tied.index, 1);
    }

    #[test]
    fn drop_near_column_shifts_all_releases() {
        // A 3-day plan on Jan 1-3 dropped nearest the Jan 5 column lands on
        // Jan 5, 6, 7 with per-day quantities preserved in order.
        let cols = axis(date(2024, 1, 1), 10);
        let config = LayoutConfig::default();
        let releases = vec![
            entry(date(2024, 1, 1), 3, "a"),
            entry(date(2024, 1, 2), 5, "b"),
            entry(date(2024, 1, 3), 7, "c"),
        ];

        let mut session = begin_drag(1, 0.0, 10.0);
        update_drag(&mut session, 335.0);
        let outcome = end_drag(&session, 335.0, &cols, &config);
        let DragOutcome::Snapped { start_date, column, .. } = outcome else {
            panic!("expected a snap, got {outcome:?}");
        };
        assert_eq!(column, 4);
        assert_eq!(start_date, date(2024, 1, 5));

        let shifted = reschedule(&releases, start_date).unwrap();
        assert_eq!(shifted.len(), 3);
        assert_eq!(shifted[0], entry(date(2024, 1, 5), 3, "a"));
        assert_eq!(shifted[1], entry(date(2024, 1, 6), 5, "b"));
        assert_eq!(shifted[2], entry(date(2024, 1, 7), 7, "c"));
    }

    #[test]
    fn reschedule_preserves_length_and_quantities() {
        let releases = vec![
            entry(date(2024, 3, 10), 4, "x"),
            entry(date(2024, 3, 11), 6, ""),
        ];
        let shifted = reschedule(&releases, date(2024, 3, 1)).unwrap();
        assert_eq!(shifted.len(), releases.len());
        assert_eq!(shifted[0].date, date(2024, 3, 1));
        for (before, after) in releases.iter().zip(&shifted) {
            assert_eq!(before.quantity, after.quantity);
            assert_eq!(before.remark, after.remark);
        }
    }

    #[test]
    fn reschedule_fills_gap_days_from_first_entry() {
        // Two entries spanning three days: the gap day is synthesized with
        // the first entry's quantity and an empty remark.
        let releases = vec![
            entry(date(2024, 1, 1), 9, "head"),
            entry(date(2024, 1, 3), 2, "tail"),
        ];
        let shifted = reschedule(&releases, date(2024, 2, 1)).unwrap();
        assert_eq!(shifted.len(), 3);
        assert_eq!(shifted[1].date, date(2024, 2, 2));
        assert_eq!(shifted[1].quantity, 2); // entry at offset 1 is reused
        assert_eq!(shifted[2].quantity, 9); // offset 2 synthesized
        assert_eq!(shifted[2].remark, "");
    }

    #[test]
    fn reschedule_of_empty_plan_defaults_to_one_day() {
        let shifted = reschedule(&[], date(2024, 5, 5)).unwrap();
        assert_eq!(shifted.len(), 1);
        assert_eq!(shifted[0].date, date(2024, 5, 5));
        assert_eq!(shifted[0].quantity, 0);
    }

    #[test]
    fn reschedule_truncates_entries_beyond_duration() {
        // Duplicate dates make the entry count exceed the day span.
        let releases = vec![
            entry(date(2024, 1, 1), 1, ""),
            entry(date(2024, 1, 2), 2, ""),
            entry(date(2024, 1, 2), 3, ""),
        ];
        let shifted = reschedule(&releases, date(2024, 1, 1)).unwrap();
        assert_eq!(shifted.len(), 2);
    }

    #[test]
    fn drag_state_is_exclusive() {
        let cols = axis(date(2024, 1, 1), 3);
        let config = LayoutConfig::default();
        let mut state = DragState::default();

        assert!(state.begin(1, 0.0, 5.0));
        assert!(!state.begin(2, 80.0, 5.0)); // second drag ignored

        state.update(100.0);
        let outcome = state.release(100.0, &cols, &config).unwrap();
        assert!(matches!(outcome, DragOutcome::Snapped { plan_id: 1, .. }));
        assert!(matches!(state, DragState::Animating { .. }));

        assert!(!state.begin(2, 80.0, 5.0)); // still animating
        state.settle();
        assert!(state.begin(2, 80.0, 5.0));
    }

    #[test]
    fn abort_restores_origin() {
        let mut state = DragState::default();
        state.begin(4, 240.0, 12.0);
        state.update(300.0);
        assert_eq!(state.abort(), Some(240.0));
        assert_eq!(state, DragState::Idle);
        assert_eq!(state.abort(), None);
    }
}
