//! Date-axis builder: the shared day-indexed coordinate system.
//!
//! The axis is derived fresh from the current plan list on every layout or
//! comparison pass; it is never cached or persisted. It spans every calendar
//! day from the earliest to the latest release date across all plans, with
//! no gaps, so every plan's span maps onto a contiguous integer column
//! range even when the plan itself skips days.

use jiff::civil::{Date, Weekday};

use crate::models::Plan;

/// One derived calendar-day column on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateColumn {
    /// Zero-based position on the axis
    pub index: usize,
    /// The calendar date this column represents
    pub date: Date,
}

/// Builds the contiguous date axis spanning all plans' releases.
///
/// Returns an empty axis when no plan carries any release; callers must
/// render an empty state rather than attempt layout.
pub fn build_axis(plans: &[Plan]) -> Vec<DateColumn> {
    let mut min_max: Option<(Date, Date)> = None;
    for plan in plans {
        for release in &plan.releases {
            min_max = Some(match min_max {
                None => (release.date, release.date),
                Some((min, max)) => (min.min(release.date), max.max(release.date)),
            });
        }
    }

    let Some((min, max)) = min_max else {
        return Vec::new();
    };

    let mut columns = Vec::new();
    let mut cur = min;
    loop {
        columns.push(DateColumn {
            index: columns.len(),
            date: cur,
        });
        if cur >= max {
            break;
        }
        match cur.tomorrow() {
            Ok(next) => cur = next,
            Err(_) => break,
        }
    }
    columns
}

/// Locates a date on the axis.
///
/// The axis is contiguous, so the lookup is pure day arithmetic against the
/// first column rather than a scan.
pub fn column_index(axis: &[DateColumn], date: Date) -> Option<usize> {
    let first = axis.first()?;
    let offset = (date - first.date).get_days();
    usize::try_from(offset).ok().filter(|i| *i < axis.len())
}

/// Display name of a date's weekday, for column headers.
pub fn weekday_name(date: Date) -> &'static str {
    match date.weekday() {
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
        Weekday::Sunday => "Sun",
    }
}
