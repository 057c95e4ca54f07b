//! Timeline layout engine: spans and rows for drawable plan bars.
//!
//! Layout is a pure function of the plan list and the derived axis. Output
//! geometry is advisory only; the caller owns rendering and hit-testing
//! (each rectangle carries its plan id for tagging). The whole layout is
//! discarded and recomputed on every refresh.

use jiff::civil::Date;
use log::{debug, warn};

use crate::axis::{column_index, DateColumn};
use crate::models::Plan;

/// Pixel geometry configuration for the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Width of one date column in pixels
    pub column_width: f64,
    /// Height of one plan bar in pixels
    pub row_height: f64,
    /// Vertical gap between plan bars in pixels
    pub row_margin: f64,
    /// Offset of the first row from the top of the surface
    pub top_offset: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            column_width: 80.0,
            row_height: 40.0,
            row_margin: 5.0,
            top_offset: 10.0,
        }
    }
}

impl LayoutConfig {
    /// Vertical distance between the tops of two adjacent rows.
    pub fn row_stride(&self) -> f64 {
        self.row_height + self.row_margin
    }

    /// Top pixel coordinate of a row.
    pub fn row_top(&self, row: usize) -> f64 {
        self.top_offset + row as f64 * self.row_stride()
    }

    /// Left pixel coordinate of a column.
    pub fn column_left(&self, col: usize) -> f64 {
        col as f64 * self.column_width
    }
}

/// Drawable rectangle for one plan bar. Ephemeral, rebuilt on each pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRect {
    pub plan_id: u64,
    /// Row slot, assigned sequentially in processing order
    pub row: usize,
    /// First axis column covered by the bar
    pub col_start: usize,
    /// Number of columns covered, inclusive of gap days
    pub col_span: usize,
    pub left: f64,
    pub top: f64,
    pub width: f64,
}

/// Complete drawable output of a layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    pub columns: Vec<DateColumn>,
    pub rects: Vec<LayoutRect>,
    /// Axis index of today's date, when it falls inside the axis
    pub today_column: Option<usize>,
}

impl Timeline {
    /// An empty timeline, for shops with no drawable plans.
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            rects: Vec::new(),
            today_column: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

/// Lays out plans against the axis, newest first.
///
/// Row assignment is sequential by processing order: every plan gets its
/// own row even when date ranges do not overlap. Operators rely on the
/// vertical order of rows, so non-overlapping bars must not be packed into
/// shared rows.
///
/// A plan whose dates cannot be located on the axis is skipped with a
/// warning; it stays in the store and in list views, only the bar is
/// dropped. A single malformed plan never aborts the pass.
pub fn layout(
    plans: &[Plan],
    columns: Vec<DateColumn>,
    today: Date,
    config: &LayoutConfig,
) -> Timeline {
    if columns.is_empty() {
        return Timeline::empty();
    }

    // Newest first; sort_by is stable, so equal timestamps keep input order.
    let mut ordered: Vec<&Plan> = plans.iter().collect();
    ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let mut rects = Vec::new();
    let mut next_row = 0usize;

    for plan in ordered {
        let (Some(first), Some(last)) = (plan.first_date(), plan.last_date()) else {
            continue;
        };

        let (Some(col_start), Some(col_end)) =
            (column_index(&columns, first), column_index(&columns, last))
        else {
            // Should not happen given how the axis is built, but a corrupt
            // plan must not take the whole timeline down.
            warn!(
                "plan {} ('{}') has dates outside the axis, skipping from layout",
                plan.id, plan.name
            );
            continue;
        };

        let row = next_row;
        next_row += 1;

        let col_span = col_end - col_start + 1;
        rects.push(LayoutRect {
            plan_id: plan.id,
            row,
            col_start,
            col_span,
            left: config.column_left(col_start),
            top: config.row_top(row),
            width: col_span as f64 * config.column_width,
        });
    }

    let today_column = column_index(&columns, today);
    debug!(
        "laid out {} bars over {} columns (today at {:?})",
        rects.len(),
        columns.len(),
        today_column
    );

    Timeline {
        columns,
        rects,
        today_column,
    }
}
